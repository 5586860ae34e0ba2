//! Use-Case-Funktionen für Viewport-Zustand.

use glam::Vec2;

use crate::app::AppState;

use super::camera::sync_editor_camera;

/// Aktualisiert die Fenstergröße und passt das View-Field an den Zoom an.
pub fn resize(state: &mut AppState, size: Vec2) {
    state.view.screen_size = size.max(Vec2::ONE);
    state.view.camera.resize(state.view.screen_size);
    sync_editor_camera(state);
}

/// Sperrt oder entsperrt die Viewport-Interaktion.
///
/// Beim Sperren endet ein laufender Drag oder Pan sofort.
pub fn set_locked(state: &mut AppState, locked: bool) {
    if state.view.viewport_locked == locked {
        return;
    }
    state.view.viewport_locked = locked;
    if locked {
        state.pointer.cancel();
        state.pointer.pan_anchor = None;
    }
    log::debug!("Viewport {}", if locked { "gesperrt" } else { "entsperrt" });
}

/// Öffnet oder schließt die Entwickler-Konsole; die Viewport-Sperre folgt ihr.
pub fn toggle_console(state: &mut AppState) {
    state.view.console_open = !state.view.console_open;
    let open = state.view.console_open;
    set_locked(state, open);
}
