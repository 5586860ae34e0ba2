//! Use-Case: Aktionen auf der gesamten Mehrfach-Selektion.

use glam::Vec2;

use crate::core::{EntityId, Transform};
use crate::AppState;

fn selected_ids(state: &AppState) -> Vec<EntityId> {
    state.selection.set.iter().collect()
}

/// Schaltet das Aktiv-Flag jeder selektierten Entität um.
pub fn toggle_active_selected(state: &mut AppState) {
    for id in selected_ids(state) {
        if let Some(entity) = state.scene.get_mut(id) {
            entity.active = !entity.active;
        }
    }
}

/// Zerstört alle selektierten Entitäten. Die Selektion wird vorher geleert.
pub fn delete_selected(state: &mut AppState) {
    let ids = selected_ids(state);
    if ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    state.selection.set.clear();
    let removed = ids
        .into_iter()
        .filter(|&id| state.scene.destroy(id).is_some())
        .count();
    log::info!("{} selektierte Entitäten gelöscht", removed);
}

/// Dupliziert alle selektierten Entitäten; danach sind genau die Kopien selektiert.
pub fn duplicate_selected(state: &mut AppState) {
    let ids = selected_ids(state);
    if ids.is_empty() {
        return;
    }

    let copies: Vec<EntityId> = ids
        .into_iter()
        .filter_map(|id| state.scene.duplicate(id))
        .collect();

    state.selection.set.clear();
    for &copy in &copies {
        state.selection.set.add(copy);
    }
    log::info!("{} selektierte Entitäten dupliziert", copies.len());
}

/// Wendet einen Gruppen-Versatz auf alle selektierten Entitäten an.
///
/// Verschoben wird nur um die Differenz zum zuletzt angewendeten Versatz.
/// Entitäten ohne Transform erhalten vorher einen im Ursprung.
pub fn apply_group_offset(state: &mut AppState, offset: Vec2) {
    state.selection.sync_group();
    let delta = state.selection.group.take_delta(offset);
    if delta == Vec2::ZERO {
        return;
    }

    for id in selected_ids(state) {
        let Some(entity) = state.scene.get_mut(id) else {
            log::warn!("Selektierte Entität {} existiert nicht mehr", id);
            continue;
        };
        let transform = entity.transform.get_or_insert_with(Transform::default);
        transform.position += delta;
    }
}
