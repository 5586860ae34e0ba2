//! Application State — Editor-Sitzung als expliziter Kontext.

mod app_state;
mod group;
mod pointer;
mod selection;
mod view;

pub use app_state::AppState;
pub use group::GroupTransform;
pub use pointer::{drag_meets_threshold, PointerPhase, PointerState};
pub use selection::{SelectionChange, SelectionHook, SelectionSet, SelectionState};
pub use view::ViewState;
