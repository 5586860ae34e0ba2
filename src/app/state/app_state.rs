use crate::app::CommandLog;
use crate::core::{EntityId, Scene};
use crate::shared::EditorOptions;

use super::{PointerState, SelectionState, ViewState};

/// Editor-Sitzung: alle Zustände, die Selektions-Controller und Renderer teilen.
pub struct AppState {
    /// Aktuell bearbeitete Szene
    pub scene: Scene,
    /// Zuletzt geladener Szenenstand (Quelle für Reload)
    pub loaded_scene: Option<Scene>,
    /// Aktuelle Selektion
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Zeigerzustand der Selektions-Zustandsmaschine
    pub pointer: PointerState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt eine Sitzung mit leerer Szene.
    pub fn new() -> Self {
        Self::with_scene(Scene::default())
    }

    /// Erstellt eine Sitzung für die gegebene Szene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            selection: SelectionState::for_scene(&scene),
            loaded_scene: Some(scene.clone()),
            scene,
            view: ViewState::new(),
            pointer: PointerState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selection.set.contains(id)
    }

    /// Die einzige selektierte Entität (nur bei genau einer).
    pub fn current_selection(&self) -> Option<EntityId> {
        self.selection.set.current()
    }

    pub fn selection_count(&self) -> usize {
        self.selection.set.len()
    }

    /// Anzahl der Entitäten ohne Editor-Sentinels (für UI-Anzeige)
    pub fn entity_count(&self) -> usize {
        self.scene.len().saturating_sub(2)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
