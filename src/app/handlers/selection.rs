//! Handler für Selektions-Operationen.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityId, Rect};

/// Einzelklick-Selektion an einer Weltposition.
pub fn select_at_point(state: &mut AppState, world_pos: Vec2, extend: bool) {
    use_cases::selection::select_at_point(state, world_pos, extend);
}

/// Selektiert alle von der Drag-Zone getroffenen Entitäten.
pub fn select_within(state: &mut AppState, zone: Rect) {
    use_cases::selection::select_within(state, zone);
}

/// Fügt eine einzelne Entität hinzu.
pub fn select(state: &mut AppState, id: EntityId) {
    use_cases::selection::select_entity(state, id);
}

/// Entfernt eine einzelne Entität.
pub fn deselect(state: &mut AppState, id: EntityId) {
    use_cases::selection::deselect_entity(state, id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Schaltet das Aktiv-Flag aller selektierten Entitäten um.
pub fn toggle_active(state: &mut AppState) {
    use_cases::selection::toggle_active_selected(state);
}

/// Löscht alle selektierten Entitäten.
pub fn delete_all(state: &mut AppState) {
    use_cases::selection::delete_selected(state);
}

/// Dupliziert alle selektierten Entitäten.
pub fn duplicate_all(state: &mut AppState) {
    use_cases::selection::duplicate_selected(state);
}

/// Wendet den Gruppen-Versatz an.
pub fn apply_group_offset(state: &mut AppState, offset: Vec2) {
    use_cases::selection::apply_group_offset(state, offset);
}
