use glam::Vec2;

use crate::core::{screen_to_world_below_bar, Camera2D, Rect};
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Fenstergröße in Pixel
    pub screen_size: Vec2,
    /// Viewport-Interaktion gesperrt (Modal-Panel, Konsole)
    pub viewport_locked: bool,
    /// Entwickler-Konsole sichtbar
    pub console_open: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::default(),
            screen_size: Camera2D::DEFAULT_SCREEN_SIZE,
            viewport_locked: false,
            console_open: false,
        }
    }

    /// Bildschirmbereich des Viewports unterhalb der Menüleiste.
    pub fn viewport_rect(&self, options: &EditorOptions) -> Rect {
        Rect::new(
            0.0,
            options.top_bar_px,
            self.screen_size.x * options.viewport_width_fraction,
            self.screen_size.y * options.viewport_height_fraction,
        )
    }

    /// Liegt die Bildschirmposition im Viewport? Alle Grenzen exklusiv.
    pub fn is_hovered(&self, screen_pos: Vec2, options: &EditorOptions) -> bool {
        let viewport = self.viewport_rect(options);
        let max = viewport.max();
        screen_pos.x > viewport.x
            && screen_pos.x < max.x
            && screen_pos.y > viewport.y
            && screen_pos.y < max.y
    }

    /// Darf der Viewport an dieser Position auf Eingaben reagieren?
    pub fn accepts_pointer(&self, screen_pos: Vec2, options: &EditorOptions) -> bool {
        !self.viewport_locked && self.is_hovered(screen_pos, options)
    }

    /// Fensterposition → Welt-Koordinaten unter dem aktuellen View-Field.
    pub fn screen_to_world(&self, screen_pos: Vec2, options: &EditorOptions) -> Vec2 {
        screen_to_world_below_bar(
            screen_pos,
            self.screen_size,
            self.camera.view_field(),
            options.top_bar_px,
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
