//! Handler für den Szenen-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityId, Scene};

/// Ersetzt die aktuelle Szene.
pub fn load(state: &mut AppState, scene: Scene) {
    use_cases::scene::load_scene(state, scene);
}

/// Lädt die Szene aus dem zuletzt geladenen Stand neu.
pub fn reload(state: &mut AppState) {
    use_cases::scene::reload_scene(state);
}

/// Zerstört eine Entität.
pub fn destroy(state: &mut AppState, id: EntityId) {
    use_cases::scene::destroy_entity(state, id);
}
