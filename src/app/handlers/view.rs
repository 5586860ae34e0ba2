//! Handler für Kamera und Viewport.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt gemäß Zoom-Stil um den Faktor.
pub fn zoom(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    use_cases::camera::zoom(state, factor, focus_screen);
}

/// Aktualisiert die Fenstergröße im State.
pub fn set_screen_size(state: &mut AppState, size: Vec2) {
    use_cases::viewport::resize(state, size);
}

/// Setzt die Viewport-Sperre.
pub fn set_viewport_locked(state: &mut AppState, locked: bool) {
    use_cases::viewport::set_locked(state, locked);
}

/// Schaltet die Entwickler-Konsole um.
pub fn toggle_console(state: &mut AppState) {
    use_cases::viewport::toggle_console(state);
}
