//! Szenen-Editor Library: Mehrfachselektion, Hit-Tests und Kamera-Pan/Zoom.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod demo;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InputEvent, Key, Modifiers, PointerButton,
    SelectionSet, ViewState,
};
pub use crate::core::{BoundingShape, Camera2D, Entity, EntityId, Rect, Scene};
pub use shared::{EditorOptions, RenderScene};
