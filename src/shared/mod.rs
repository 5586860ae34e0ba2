//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.
pub mod options;
mod render_scene;

pub use options::{EditorOptions, ZoomStyle};
pub use render_scene::RenderScene;
