//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, InputEvent};
use crate::shared::RenderScene;

/// Orchestriert Eingaben, Intents und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein rohes Eingabe-Event.
    ///
    /// Muss vor jeder anderen Editor-Eingabeverarbeitung aufgerufen werden,
    /// damit der Selektionszustand im selben Frame aktuell ist.
    pub fn handle_input(
        &mut self,
        state: &mut AppState,
        event: &InputEvent,
    ) -> anyhow::Result<()> {
        for intent in super::input::translate(state, event) {
            self.handle_intent(state, intent)?;
        }
        Ok(())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::SelectAtPoint { world_pos, extend } => {
                handlers::selection::select_at_point(state, world_pos, extend)
            }
            AppCommand::SelectWithinRect { zone } => {
                handlers::selection::select_within(state, zone)
            }
            AppCommand::SelectEntity { id } => handlers::selection::select(state, id),
            AppCommand::DeselectEntity { id } => handlers::selection::deselect(state, id),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom(state, factor, focus_screen),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetScreenSize { size } => handlers::view::set_screen_size(state, size),
            AppCommand::SetViewportLocked { locked } => {
                handlers::view::set_viewport_locked(state, locked)
            }
            AppCommand::ToggleConsole => handlers::view::toggle_console(state),

            // === Szene ===
            AppCommand::LoadScene { scene } => handlers::scene::load(state, *scene),
            AppCommand::ReloadScene => handlers::scene::reload(state),
            AppCommand::DestroyEntity { id } => handlers::scene::destroy(state, id),

            // === Mehrfach-Selektion ===
            AppCommand::ToggleActiveSelected => handlers::selection::toggle_active(state),
            AppCommand::DeleteSelected => handlers::selection::delete_all(state),
            AppCommand::DuplicateSelected => handlers::selection::duplicate_all(state),
            AppCommand::ApplyGroupOffset { offset } => {
                handlers::selection::apply_group_offset(state, offset)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        state.selection.sync_group();
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
