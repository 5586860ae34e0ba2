//! UI-Layer mit egui: Menü, Properties, Status, Konsole und Viewport-Adapter.

pub mod console;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod viewport;

pub use console::show_console;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use viewport::{render_viewport, ViewportInput};
