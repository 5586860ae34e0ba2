//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::drag_meets_threshold;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Rect;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectionClickRequested { screen_pos, extend } => {
            let world_pos = state.view.screen_to_world(screen_pos, &state.options);
            vec![AppCommand::SelectAtPoint { world_pos, extend }]
        }
        AppIntent::SelectionRectRequested {
            start_screen,
            end_screen,
        } => {
            if !drag_meets_threshold(start_screen, end_screen, state.options.min_select_px) {
                return Vec::new();
            }
            let start = state.view.screen_to_world(start_screen, &state.options);
            let end = state.view.screen_to_world(end_screen, &state.options);
            vec![AppCommand::SelectWithinRect {
                zone: Rect::from_drag(start, end),
            }]
        }
        AppIntent::SelectEntityRequested { id } => vec![AppCommand::SelectEntity { id }],
        AppIntent::DeselectEntityRequested { id } => vec![AppCommand::DeselectEntity { id }],
        AppIntent::DeselectAllRequested => vec![AppCommand::ClearSelection],

        AppIntent::CameraPanRequested { screen_delta } => {
            let world_per_pixel =
                state.view.camera.view_size / state.view.screen_size.max(glam::Vec2::ONE);
            vec![AppCommand::PanCamera {
                delta: -screen_delta * world_per_pixel,
            }]
        }
        AppIntent::CameraZoomRequested { steps, screen_pos } => {
            if steps == 0.0 {
                return Vec::new();
            }
            vec![AppCommand::ZoomCamera {
                factor: state.options.camera_scroll_zoom_step.powf(steps),
                focus_screen: screen_pos,
            }]
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::WindowResized { size } => vec![AppCommand::SetScreenSize { size }],

        AppIntent::ViewportLockRequested { locked } => {
            vec![AppCommand::SetViewportLocked { locked }]
        }
        AppIntent::ConsoleToggleRequested => vec![AppCommand::ToggleConsole],

        AppIntent::SceneLoaded { scene } => {
            vec![AppCommand::ClearSelection, AppCommand::LoadScene { scene }]
        }
        AppIntent::SceneReloadRequested => {
            vec![AppCommand::ClearSelection, AppCommand::ReloadScene]
        }
        AppIntent::DestroyEntityRequested { id } => {
            let mut commands = Vec::with_capacity(2);
            if state.is_selected(id) {
                commands.push(AppCommand::DeselectEntity { id });
            }
            commands.push(AppCommand::DestroyEntity { id });
            commands
        }

        AppIntent::ToggleActiveSelectedRequested => vec![AppCommand::ToggleActiveSelected],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::DuplicateSelectedRequested => vec![AppCommand::DuplicateSelected],
        AppIntent::GroupOffsetChanged { offset } => {
            vec![AppCommand::ApplyGroupOffset { offset }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
