//! Use-Case-Funktionen für Kamera-Steuerung.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{Camera2D, Rect};
use crate::shared::options::ZoomStyle;

/// Überträgt die Editor-Kamera auf die Kamera-Entität der Szene.
pub fn sync_editor_camera(state: &mut AppState) {
    let id = state.scene.editor_camera();
    let camera = &state.view.camera;
    let Some(entity) = state.scene.get_mut(id) else {
        return;
    };
    if let Some(transform) = entity.transform.as_mut() {
        transform.position = camera.position;
    }
    if let Some(component) = entity.camera.as_mut() {
        component.view_field = Rect::new(0.0, 0.0, camera.view_size.x, camera.view_size.y);
    }
}

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new(state.view.screen_size);
    sync_editor_camera(state);
}

/// Verschiebt die Kamera um ein Welt-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
    sync_editor_camera(state);
}

/// Zoomt um `factor`, begrenzt auf die Zoom-Grenzen der Optionen.
///
/// Der Zoom-Stil legt fest, welcher Punkt auf dem Bildschirm fix bleibt:
/// obere linke Ecke, Viewport-Mitte oder die Zeigerposition.
pub fn zoom(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    let screen_size = state.view.screen_size;
    let bar = Vec2::new(0.0, state.options.top_bar_px);
    let focus = match state.options.zoom_style {
        ZoomStyle::TopLeft => Vec2::ZERO,
        ZoomStyle::Center => state.view.viewport_rect(&state.options).center() - bar,
        ZoomStyle::Mouse => focus_screen - bar,
    };

    let camera = &mut state.view.camera;
    let before = camera.screen_to_world(focus, screen_size);
    camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
        screen_size,
    );
    let after = camera.screen_to_world(focus, screen_size);
    camera.pan(before - after);

    sync_editor_camera(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_camera_sets_default_position_and_zoom() {
        let mut state = AppState::new();
        state.view.camera.pan(Vec2::new(100.0, 200.0));
        state.view.camera.zoom = 5.0;

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
        assert_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut state = AppState::new();
        zoom(&mut state, 1000.0, Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 10.0);
        zoom(&mut state, 1e-6, Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 0.1);
    }

    #[test]
    fn mouse_zoom_keeps_world_point_under_pointer() {
        let mut state = AppState::new();
        let pointer = Vec2::new(300.0, 200.0 + state.options.top_bar_px);
        let before = state.view.screen_to_world(pointer, &state.options);

        zoom(&mut state, 2.0, pointer);

        let after = state.view.screen_to_world(pointer, &state.options);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
        assert_relative_eq!(state.view.camera.view_size.x, 640.0);
    }

    #[test]
    fn top_left_zoom_keeps_position() {
        let mut state = AppState::new();
        state.options.zoom_style = ZoomStyle::TopLeft;
        state.view.camera.pan(Vec2::new(50.0, 20.0));

        zoom(&mut state, 2.0, Vec2::new(400.0, 400.0));

        assert_relative_eq!(state.view.camera.position.x, 50.0);
        assert_relative_eq!(state.view.camera.position.y, 20.0);
    }

    #[test]
    fn center_zoom_keeps_viewport_centre() {
        let mut state = AppState::new();
        state.options.zoom_style = ZoomStyle::Center;
        let centre = state.view.viewport_rect(&state.options).center();
        let before = state.view.screen_to_world(centre, &state.options);

        zoom(&mut state, 2.0, Vec2::ZERO);

        let after = state.view.screen_to_world(centre, &state.options);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn pan_updates_editor_camera_entity() {
        let mut state = AppState::new();
        pan(&mut state, Vec2::new(-30.0, 12.0));

        let camera = state
            .scene
            .get(state.scene.editor_camera())
            .expect("Editor-Kamera vorhanden");
        assert_eq!(camera.origin(), Vec2::new(-30.0, 12.0));
    }
}
