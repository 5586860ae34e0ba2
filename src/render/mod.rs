//! Debug-Overlays der Selektion, gezeichnet mit dem egui-Painter.

mod painter;
pub mod selection_overlay;

pub use crate::shared::RenderScene;
pub use painter::{paint_scene, to_color32};
pub use selection_overlay::{build_overlays, OverlayPrimitive};
