//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};
use crate::demo::demo_scene;

/// Rendert die Menü-Leiste in exakt der Höhe der oberen Leiste.
pub fn render_menu(ctx: &egui::Context, state: &AppState, show_options: &mut bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar")
        .exact_height(state.options.top_bar_px)
        .show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Datei", |ui| {
                    if ui.button("Demo-Szene laden").clicked() {
                        events.push(AppIntent::SceneLoaded {
                            scene: Box::new(demo_scene()),
                        });
                        ui.close();
                    }

                    let has_snapshot = state.loaded_scene.is_some();
                    if ui
                        .add_enabled(has_snapshot, egui::Button::new("Neu laden (Ctrl+Shift+R)"))
                        .clicked()
                    {
                        events.push(AppIntent::SceneReloadRequested);
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Beenden").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });

                ui.menu_button("Bearbeiten", |ui| {
                    let has_selection = !state.selection.set.is_empty();

                    if ui
                        .add_enabled(has_selection, egui::Button::new("Alles abwählen"))
                        .clicked()
                    {
                        events.push(AppIntent::DeselectAllRequested);
                        ui.close();
                    }

                    if ui
                        .add_enabled(has_selection, egui::Button::new("Aktiv umschalten"))
                        .clicked()
                    {
                        events.push(AppIntent::ToggleActiveSelectedRequested);
                        ui.close();
                    }

                    if ui
                        .add_enabled(has_selection, egui::Button::new("Alle duplizieren"))
                        .clicked()
                    {
                        events.push(AppIntent::DuplicateSelectedRequested);
                        ui.close();
                    }

                    if ui
                        .add_enabled(has_selection, egui::Button::new("Alle löschen"))
                        .clicked()
                    {
                        events.push(AppIntent::DeleteSelectedRequested);
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Optionen...").clicked() {
                        *show_options = true;
                        ui.close();
                    }
                });

                ui.menu_button("Ansicht", |ui| {
                    if ui.button("Kamera zurücksetzen").clicked() {
                        events.push(AppIntent::ResetCameraRequested);
                        ui.close();
                    }

                    let mut locked = state.view.viewport_locked;
                    if ui.checkbox(&mut locked, "Viewport sperren").changed() {
                        events.push(AppIntent::ViewportLockRequested { locked });
                    }

                    let console_label = if state.view.console_open {
                        "Konsole schließen (`)"
                    } else {
                        "Konsole öffnen (`)"
                    };
                    if ui.button(console_label).clicked() {
                        events.push(AppIntent::ConsoleToggleRequested);
                        ui.close();
                    }
                });
            });
        });

    events
}
