//! 2D-Kamera für Pan und Zoom sowie die Screen↔Welt-Abbildung.
//!
//! Die Kamera beschreibt ein sichtbares Welt-Rechteck (View-Field): Ursprung =
//! Kamera-Position, Größe = Screen-Größe / Zoom. Die Abbildung wird bei jedem Aufruf
//! aus dem aktuellen View-Field berechnet, nie gecacht.
//!
//! Annahme: View-Field und Screen-Größe sind nie 0. Das stellt `resize()` sicher,
//! erzwungen wird es in den Abbildungsfunktionen nicht.

use glam::Vec2;

use super::geometry::Rect;

/// Rechnet eine Screen-Position in Welt-Koordinaten um.
///
/// `scale = screen_size / view_field.size`, `world = screen / scale + view_field.origin`.
pub fn screen_to_world(screen: Vec2, screen_size: Vec2, view_field: Rect) -> Vec2 {
    let scale = screen_size / view_field.size();
    screen / scale + view_field.min()
}

/// Wie `screen_to_world`, zieht aber vorher die Höhe der oberen UI-Leiste von Y ab.
pub fn screen_to_world_below_bar(
    screen: Vec2,
    screen_size: Vec2,
    view_field: Rect,
    top_bar_px: f32,
) -> Vec2 {
    screen_to_world(
        Vec2::new(screen.x, screen.y - top_bar_px),
        screen_size,
        view_field,
    )
}

/// Inverse von `screen_to_world`.
pub fn world_to_screen(world: Vec2, screen_size: Vec2, view_field: Rect) -> Vec2 {
    let scale = screen_size / view_field.size();
    (world - view_field.min()) * scale
}

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Welt-Position der oberen linken Ecke des View-Fields
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Welt-Einheit pro Pixel)
    pub zoom: f32,
    /// Größe des sichtbaren Welt-Rechtecks
    pub view_size: Vec2,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 10.0;
    /// Screen-Größe, solange noch kein Resize gemeldet wurde.
    pub const DEFAULT_SCREEN_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

    /// Erstellt eine Kamera ohne Pan mit Zoom 1.0 für die gegebene Screen-Größe.
    pub fn new(screen_size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            view_size: screen_size,
        }
    }

    /// Das aktuell sichtbare Welt-Rechteck.
    pub fn view_field(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.view_size.x,
            self.view_size.y,
        )
    }

    /// Passt das View-Field nach einem Fenster-Resize an den aktuellen Zoom an.
    pub fn resize(&mut self, screen_size: Vec2) {
        self.view_size = screen_size.max(Vec2::ONE) / self.zoom;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Multipliziert den Zoom mit `factor`, begrenzt auf `[min, max]`, und passt das View-Field an.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32, screen_size: Vec2) {
        self.zoom = (self.zoom * factor).clamp(min, max);
        self.resize(screen_size);
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        screen_to_world(screen_pos, screen_size, self.view_field())
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        world_to_screen(world_pos, screen_size, self.view_field())
    }

    /// Welt-Einheiten pro Screen-Pixel entlang X.
    pub fn world_per_pixel(&self, screen_size: Vec2) -> f32 {
        self.view_size.x / screen_size.x.max(1.0)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCREEN_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_mapping_at_zoom_one_without_pan() {
        let camera = Camera2D::new(Vec2::new(800.0, 600.0));
        let world = camera.screen_to_world(Vec2::new(123.0, 456.0), Vec2::new(800.0, 600.0));
        assert_relative_eq!(world.x, 123.0);
        assert_relative_eq!(world.y, 456.0);
    }

    #[test]
    fn top_bar_offset_is_subtracted_before_mapping() {
        let view_field = Rect::new(0.0, 0.0, 800.0, 600.0);
        let screen_size = Vec2::new(800.0, 600.0);
        let world = screen_to_world_below_bar(Vec2::new(10.0, 135.0), screen_size, view_field, 35.0);
        assert_relative_eq!(world.x, 10.0);
        assert_relative_eq!(world.y, 100.0);
    }

    #[test]
    fn pan_offsets_world_position() {
        let mut camera = Camera2D::new(Vec2::new(800.0, 600.0));
        camera.pan(Vec2::new(100.0, -50.0));
        let world = camera.screen_to_world(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0));
        assert_relative_eq!(world.x, 100.0);
        assert_relative_eq!(world.y, -50.0);
    }

    #[test]
    fn zoom_shrinks_view_field_and_scales_mapping() {
        let screen_size = Vec2::new(800.0, 600.0);
        let mut camera = Camera2D::new(screen_size);
        camera.zoom_by_clamped(2.0, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX, screen_size);
        assert_relative_eq!(camera.view_size.x, 400.0);
        assert_relative_eq!(camera.view_size.y, 300.0);

        let world = camera.screen_to_world(Vec2::new(800.0, 600.0), screen_size);
        assert_relative_eq!(world.x, 400.0);
        assert_relative_eq!(world.y, 300.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let screen_size = Vec2::new(800.0, 600.0);
        let mut camera = Camera2D::new(screen_size);
        camera.zoom_by_clamped(1000.0, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX, screen_size);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
        camera.zoom_by_clamped(0.0001, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX, screen_size);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MIN);
    }

    #[test]
    fn world_to_screen_inverts_screen_to_world() {
        let screen_size = Vec2::new(1024.0, 768.0);
        let mut camera = Camera2D::new(screen_size);
        camera.pan(Vec2::new(-37.0, 12.5));
        camera.zoom_by_clamped(1.7, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX, screen_size);

        let screen = Vec2::new(300.0, 200.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen, screen_size), screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
    }
}
