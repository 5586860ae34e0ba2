//! Entwickler-Konsole: zeigt die zuletzt ausgeführten Commands.

use crate::app::{AppIntent, AppState};

/// Anzahl der angezeigten Log-Einträge.
const VISIBLE_ENTRIES: usize = 200;

/// Zeigt die Konsole, solange sie geöffnet ist.
pub fn show_console(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.view.console_open {
        return events;
    }

    let mut open = true;
    egui::Window::new("Konsole")
        .open(&mut open)
        .default_width(420.0)
        .default_height(260.0)
        .show(ctx, |ui| {
            ui.label(format!("{} Commands", state.command_log.len()));
            ui.separator();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let entries = state.command_log.entries();
                    let skip = entries.len().saturating_sub(VISIBLE_ENTRIES);
                    for command in &entries[skip..] {
                        ui.monospace(format!("{:?}", command));
                    }
                });
        });

    if !open {
        events.push(AppIntent::ConsoleToggleRequested);
    }

    events
}
