use glam::Vec2;

use crate::core::{EntityId, Scene};
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick im Viewport (Fenster-Koordinaten); `extend` = Ctrl gehalten
    SelectionClickRequested { screen_pos: Vec2, extend: bool },
    /// Drag-Rechteck losgelassen (Fenster-Koordinaten, nicht normalisiert)
    SelectionRectRequested { start_screen: Vec2, end_screen: Vec2 },
    /// Entität programmatisch selektieren (Hierarchie-Panel)
    SelectEntityRequested { id: EntityId },
    /// Entität aus der Selektion entfernen
    DeselectEntityRequested { id: EntityId },
    /// Selektion leeren
    DeselectAllRequested,

    /// Kamera um ein Bildschirm-Delta verschieben (Mittelmaus-Drag)
    CameraPanRequested { screen_delta: Vec2 },
    /// Scroll-Zoom; `steps` > 0 zoomt hinein
    CameraZoomRequested { steps: f32, screen_pos: Vec2 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Fenstergröße hat sich geändert
    WindowResized { size: Vec2 },

    /// Viewport-Interaktion sperren/entsperren (Modal-Panels)
    ViewportLockRequested { locked: bool },
    /// Entwickler-Konsole umschalten (Gravis-Taste)
    ConsoleToggleRequested,

    /// Neue Szene wurde geladen
    SceneLoaded { scene: Box<Scene> },
    /// Szene aus dem zuletzt geladenen Stand neu laden (Ctrl+Shift+R)
    SceneReloadRequested,
    /// Einzelne Entität zerstören
    DestroyEntityRequested { id: EntityId },

    /// Mehrfach-Selektion: Aktiv-Flag aller selektierten Entitäten umschalten
    ToggleActiveSelectedRequested,
    /// Mehrfach-Selektion: alle selektierten Entitäten löschen
    DeleteSelectedRequested,
    /// Mehrfach-Selektion: alle selektierten Entitäten duplizieren
    DuplicateSelectedRequested,
    /// Gruppen-Versatz im Inspector geändert
    GroupOffsetChanged { offset: Vec2 },

    /// Optionen wurden geändert (sofort anwenden + speichern)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
