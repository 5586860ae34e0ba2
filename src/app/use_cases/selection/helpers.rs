//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::core::{EntityId, Scene};
use crate::AppState;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.set.clear();
}

/// Fügt eine Entität der Szene zur Selektion hinzu.
///
/// Unbekannte IDs werden ignoriert; Sentinels lehnt die Selektionsmenge selbst ab.
pub fn select_entity(state: &mut AppState, id: EntityId) -> bool {
    if !state.scene.contains(id) {
        log::warn!("Selektion von unbekannter Entität {} ignoriert", id);
        return false;
    }
    state.selection.set.add(id)
}

/// Entfernt eine Entität aus der Selektion.
pub fn deselect_entity(state: &mut AppState, id: EntityId) -> bool {
    state.selection.set.remove(id)
}

/// Entitäten, die an Pick und Rechteck-Selektion teilnehmen: aktiv, kein Sentinel.
pub(super) fn selectable_entities(scene: &Scene) -> impl Iterator<Item = &crate::core::Entity> {
    scene
        .iter()
        .filter(move |entity| entity.active && !scene.is_sentinel(entity.id))
}
