//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::Vec2;

use super::options::EditorOptions;
use crate::core::{world_to_screen, Camera2D, Entity, Rect};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Momentaufnahme der selektierten Entitäten in Selektions-Reihenfolge
    pub selected: Vec<Entity>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Fenstergröße in Pixeln
    pub screen_size: Vec2,
    /// Höhe der Menüleiste in Pixeln
    pub top_bar_px: f32,
    /// Viewport-Bereich in Fensterkoordinaten
    pub viewport: Rect,
    /// Drag-Rechteck-Hinweis in Fensterkoordinaten (nur über der Schwelle)
    pub drag_rect: Option<Rect>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Overlays zu zeichnen sind.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Welt-Position → Fensterposition (inklusive Menüleiste).
    pub fn world_to_window(&self, world: Vec2) -> Vec2 {
        world_to_screen(world, self.screen_size, self.camera.view_field())
            + Vec2::new(0.0, self.top_bar_px)
    }

    /// Welt-Länge → Pixel entlang X.
    pub fn world_len_to_px(&self, len: f32) -> f32 {
        len / self.camera.world_per_pixel(self.screen_size)
    }
}
