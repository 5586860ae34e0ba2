use glam::Vec2;

use crate::core::{EntityId, Rect, Scene};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Einzelklick-Pick an Weltposition
    SelectAtPoint { world_pos: Vec2, extend: bool },
    /// Rechteck-Selektion mit Zone in Welt-Koordinaten
    SelectWithinRect { zone: Rect },
    /// Entität zur Selektion hinzufügen
    SelectEntity { id: EntityId },
    /// Entität aus der Selektion entfernen
    DeselectEntity { id: EntityId },
    /// Selektion leeren
    ClearSelection,

    /// Kamera um Welt-Delta verschieben
    PanCamera { delta: Vec2 },
    /// Zoom mit Faktor; `focus_screen` ist die Zeigerposition im Fenster
    ZoomCamera { factor: f32, focus_screen: Vec2 },
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Fenstergröße setzen
    SetScreenSize { size: Vec2 },

    /// Viewport-Sperre setzen
    SetViewportLocked { locked: bool },
    /// Entwickler-Konsole umschalten
    ToggleConsole,

    /// Szene ersetzen
    LoadScene { scene: Box<Scene> },
    /// Szene aus dem geladenen Stand wiederherstellen
    ReloadScene,
    /// Entität zerstören (Selektion muss vorher bereinigt sein)
    DestroyEntity { id: EntityId },

    /// Aktiv-Flag aller selektierten Entitäten umschalten
    ToggleActiveSelected,
    /// Alle selektierten Entitäten zerstören
    DeleteSelected,
    /// Alle selektierten Entitäten duplizieren, Selektion = Duplikate
    DuplicateSelected,
    /// Gruppen-Versatz anwenden
    ApplyGroupOffset { offset: Vec2 },

    /// Optionen anwenden und speichern
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
