//! Tastenkombinationen des Editors.

use crate::app::{AppIntent, InputEvent, Key};

pub(super) fn handle(event: &InputEvent, intents: &mut Vec<AppIntent>) {
    let InputEvent::KeyDown { key, modifiers } = *event else {
        return;
    };
    match key {
        Key::Grave => intents.push(AppIntent::ConsoleToggleRequested),
        Key::R if modifiers.ctrl && modifiers.shift => {
            intents.push(AppIntent::SceneReloadRequested)
        }
        Key::R => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Modifiers;

    fn run(key: Key, modifiers: Modifiers) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        handle(&InputEvent::KeyDown { key, modifiers }, &mut intents);
        intents
    }

    #[test]
    fn ctrl_shift_r_reloads_scene() {
        assert!(matches!(
            run(Key::R, Modifiers::CTRL_SHIFT).as_slice(),
            [AppIntent::SceneReloadRequested]
        ));
        assert!(run(Key::R, Modifiers::CTRL).is_empty());
    }

    #[test]
    fn grave_toggles_console() {
        assert!(matches!(
            run(Key::Grave, Modifiers::NONE).as_slice(),
            [AppIntent::ConsoleToggleRequested]
        ));
    }
}
