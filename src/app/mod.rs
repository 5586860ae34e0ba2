//! Application-Layer: Controller, State, Events, Input und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod input;
mod intent_mapping;
pub mod render_scene;
/// Editor-Sitzung
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Szene, Selektion, View, Zeiger).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, InputEvent, Key, Modifiers, PointerButton};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, GroupTransform, PointerState, SelectionChange, SelectionSet, SelectionState,
    ViewState,
};
