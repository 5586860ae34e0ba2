//! Mittelmaus-Pan, Scroll-Zoom und Fenster-Resize.

use crate::app::{AppIntent, AppState, InputEvent, PointerButton};

pub(super) fn handle(state: &mut AppState, event: &InputEvent, intents: &mut Vec<AppIntent>) {
    match *event {
        InputEvent::PointerDown {
            button: PointerButton::Middle,
            pos,
            ..
        } => {
            if state.view.accepts_pointer(pos, &state.options) {
                state.pointer.pan_anchor = Some(pos);
            }
        }
        InputEvent::PointerMotion { pos, .. } => {
            let Some(anchor) = state.pointer.pan_anchor else {
                return;
            };
            if state.view.viewport_locked {
                state.pointer.pan_anchor = None;
                return;
            }
            state.pointer.pan_anchor = Some(pos);
            let screen_delta = pos - anchor;
            if screen_delta != glam::Vec2::ZERO {
                intents.push(AppIntent::CameraPanRequested { screen_delta });
            }
        }
        InputEvent::PointerUp {
            button: PointerButton::Middle,
            ..
        }
        | InputEvent::PointerLeft => state.pointer.pan_anchor = None,
        InputEvent::Wheel { delta, pos } => {
            if delta == 0.0 || !state.view.accepts_pointer(pos, &state.options) {
                return;
            }
            intents.push(AppIntent::CameraZoomRequested {
                steps: delta.signum(),
                screen_pos: pos,
            });
        }
        InputEvent::WindowResized { size } => intents.push(AppIntent::WindowResized { size }),
        _ => {}
    }
}
