//! Use-Case-Funktionen für den Szenen-Lebenszyklus.

use crate::app::AppState;
use crate::core::{EntityId, Scene};

use super::camera::sync_editor_camera;

/// Ersetzt die Szene. Die Selektion ist danach leer und kennt die neuen Sentinels.
pub fn load_scene(state: &mut AppState, scene: Scene) {
    install_scene(state, scene.clone());
    state.loaded_scene = Some(scene);
    log::info!(
        "Szene '{}' geladen ({} Entitäten)",
        state.scene.name,
        state.entity_count()
    );
}

/// Stellt den zuletzt geladenen Szenenstand wieder her.
pub fn reload_scene(state: &mut AppState) {
    let Some(snapshot) = state.loaded_scene.clone() else {
        log::warn!("Keine geladene Szene zum Neuladen vorhanden");
        state.selection.set.clear();
        return;
    };
    install_scene(state, snapshot);
    log::info!("Szene '{}' neu geladen", state.scene.name);
}

fn install_scene(state: &mut AppState, scene: Scene) {
    state.selection.set.clear();
    state.selection.set.set_excluded(scene.sentinels());
    state.pointer.cancel();
    state.scene = scene;
    sync_editor_camera(state);
}

/// Zerstört eine Entität; ist sie selektiert, wird sie vorher deselektiert.
pub fn destroy_entity(state: &mut AppState, id: EntityId) {
    if state.selection.set.contains(id) {
        state.selection.set.remove(id);
    }
    if state.scene.destroy(id).is_none() {
        log::debug!("Entität {} konnte nicht zerstört werden", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use glam::Vec2;

    #[test]
    fn load_clears_selection() {
        let mut state = AppState::new();
        let id = state.scene.insert(Entity::new("old"));
        state.selection.set.add(id);

        let mut next = Scene::new("next");
        next.insert(Entity::new("fresh"));
        load_scene(&mut state, next);

        assert_eq!(state.selection_count(), 0);
        assert_eq!(state.scene.name, "next");
        assert_eq!(state.entity_count(), 1);
    }

    #[test]
    fn reload_restores_loaded_snapshot() {
        let mut scene = Scene::new("level");
        let id = scene.insert(Entity::new("crate").with_transform(Vec2::new(1.0, 2.0)));
        let mut state = AppState::new();
        load_scene(&mut state, scene);

        state.selection.set.add(id);
        if let Some(entity) = state.scene.get_mut(id) {
            entity.transform = None;
        }

        reload_scene(&mut state);

        assert_eq!(state.selection_count(), 0);
        let entity = state.scene.get(id).expect("Entität wiederhergestellt");
        assert_eq!(entity.origin(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn destroy_evicts_selected_entity() {
        let mut state = AppState::new();
        let id = state.scene.insert(Entity::new("doomed"));
        state.selection.set.add(id);

        destroy_entity(&mut state, id);

        assert!(!state.is_selected(id));
        assert!(!state.scene.contains(id));
    }
}
