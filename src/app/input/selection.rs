//! Selektions-Zustandsmaschine: Idle → Dragging → Idle.

use crate::app::{AppIntent, AppState, InputEvent, PointerButton};

/// Wertet ein Event für die Selektion aus.
///
/// Gesperrter Viewport oder Zeiger außerhalb erzwingen Idle; dann findet
/// kein Hit-Test statt.
pub(super) fn handle(state: &mut AppState, event: &InputEvent, intents: &mut Vec<AppIntent>) {
    match *event {
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            pos,
            modifiers,
        } => {
            if !state.view.accepts_pointer(pos, &state.options) {
                state.pointer.cancel();
                return;
            }
            state.pointer.press(pos);
            intents.push(AppIntent::SelectionClickRequested {
                screen_pos: pos,
                extend: modifiers.ctrl,
            });
        }
        InputEvent::PointerMotion { pos, primary_held } => {
            if !state.view.accepts_pointer(pos, &state.options) {
                state.pointer.cancel();
                return;
            }
            if primary_held {
                state.pointer.drag_to(pos, state.options.min_select_px);
            }
        }
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            pos,
            ..
        } => {
            if state.view.viewport_locked {
                state.pointer.cancel();
                return;
            }
            if let Some((start, end)) = state.pointer.release(pos, state.options.min_select_px) {
                intents.push(AppIntent::SelectionRectRequested {
                    start_screen: start,
                    end_screen: end,
                });
            }
        }
        InputEvent::PointerLeft => state.pointer.cancel(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PointerPhase;
    use crate::app::Modifiers;
    use glam::Vec2;

    fn down(pos: Vec2, modifiers: Modifiers) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            pos,
            modifiers,
        }
    }

    fn motion(pos: Vec2) -> InputEvent {
        InputEvent::PointerMotion {
            pos,
            primary_held: true,
        }
    }

    fn up(pos: Vec2) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    fn run(state: &mut AppState, event: InputEvent) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        handle(state, &event, &mut intents);
        intents
    }

    #[test]
    fn press_emits_click_with_extend_flag() {
        let mut state = AppState::new();
        let intents = run(&mut state, down(Vec2::new(100.0, 100.0), Modifiers::CTRL));
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::SelectionClickRequested { extend: true, .. }]
        ));
    }

    #[test]
    fn full_drag_emits_rect_on_release() {
        let mut state = AppState::new();
        run(&mut state, down(Vec2::new(100.0, 100.0), Modifiers::NONE));
        run(&mut state, motion(Vec2::new(150.0, 160.0)));
        assert!(state.pointer.show_drag_rect);

        let intents = run(&mut state, up(Vec2::new(160.0, 170.0)));
        match intents.as_slice() {
            [AppIntent::SelectionRectRequested {
                start_screen,
                end_screen,
            }] => {
                assert_eq!(*start_screen, Vec2::new(100.0, 100.0));
                assert_eq!(*end_screen, Vec2::new(160.0, 170.0));
            }
            other => panic!("unerwartete Intents: {other:?}"),
        }
        assert_eq!(state.pointer.phase, PointerPhase::Idle);
    }

    #[test]
    fn leaving_the_viewport_cancels_drag() {
        let mut state = AppState::new();
        run(&mut state, down(Vec2::new(100.0, 100.0), Modifiers::NONE));
        run(&mut state, motion(Vec2::new(150.0, 160.0)));

        run(&mut state, InputEvent::PointerLeft);

        assert_eq!(state.pointer.phase, PointerPhase::Idle);
        assert!(!state.pointer.show_drag_rect);
        assert!(run(&mut state, up(Vec2::new(160.0, 170.0))).is_empty());
    }

    #[test]
    fn locked_viewport_suppresses_everything() {
        let mut state = AppState::new();
        state.view.viewport_locked = true;

        assert!(run(&mut state, down(Vec2::new(100.0, 100.0), Modifiers::NONE)).is_empty());
        run(&mut state, motion(Vec2::new(200.0, 200.0)));
        assert_eq!(state.pointer.phase, PointerPhase::Idle);
        assert!(run(&mut state, up(Vec2::new(200.0, 200.0))).is_empty());
    }

    #[test]
    fn press_outside_viewport_is_ignored() {
        let mut state = AppState::new();
        let intents = run(&mut state, down(Vec2::new(100.0, 10.0), Modifiers::NONE));
        assert!(intents.is_empty());
        assert!(state.pointer.press_origin.is_none());
    }
}
