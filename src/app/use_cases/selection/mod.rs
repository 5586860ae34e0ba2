//! Use-Case-Funktionen für Entitäts-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick` — Einzelklick-Selektion mit Ctrl-Toggle
//! - `rect` — Rechteck-Selektion (Drag)
//! - `bulk` — Aktionen auf der gesamten Mehrfach-Selektion
//! - `helpers` — Gemeinsame Hilfsfunktionen
mod bulk;
mod helpers;
mod pick;
mod rect;

pub use bulk::{apply_group_offset, delete_selected, duplicate_selected, toggle_active_selected};
pub use helpers::{clear_selection, deselect_entity, select_entity};
pub use pick::{pick_entity, select_at_point};
pub use rect::{entities_within, select_within};
