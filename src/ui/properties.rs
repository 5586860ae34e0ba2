//! Properties-Panel (rechte Seitenleiste): Selektion, Gruppen-Versatz, Szenen-Liste.

use crate::app::{AppIntent, AppState};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Selektion");
            ui.separator();

            match (state.selection_count(), state.current_selection()) {
                (0, _) => {
                    ui.label("Keine Selektion");
                }
                (_, Some(id)) => {
                    if let Some(entity) = state.scene.get(id) {
                        ui.label(format!("{} {}", entity.id, entity.name));
                        let origin = entity.origin();
                        ui.label(format!("Position: ({:.1}, {:.1})", origin.x, origin.y));
                        ui.label(format!("Aktiv: {}", entity.active));
                    }
                }
                (count, None) => {
                    ui.label(format!("{} Entitäten selektiert", count));
                    render_group_offset(ui, state, &mut events);
                }
            }

            if !state.selection.set.is_empty() {
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    if ui.button("Aktiv umschalten").clicked() {
                        events.push(AppIntent::ToggleActiveSelectedRequested);
                    }
                    if ui.button("Duplizieren").clicked() {
                        events.push(AppIntent::DuplicateSelectedRequested);
                    }
                    if ui.button("Löschen").clicked() {
                        events.push(AppIntent::DeleteSelectedRequested);
                    }
                });
            }

            ui.separator();
            ui.heading("Szene");
            egui::ScrollArea::vertical().show(ui, |ui| {
                for entity in state.scene.iter() {
                    if state.scene.is_sentinel(entity.id) {
                        continue;
                    }
                    let selected = state.is_selected(entity.id);
                    let label = format!("{} {}", entity.id, entity.name);
                    if ui.selectable_label(selected, label).clicked() {
                        events.push(if selected {
                            AppIntent::DeselectEntityRequested { id: entity.id }
                        } else {
                            AppIntent::SelectEntityRequested { id: entity.id }
                        });
                    }
                }
            });
        });

    events
}

fn render_group_offset(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut offset = state.selection.group.offset;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Versatz:");
        changed |= ui
            .add(egui::DragValue::new(&mut offset.x).prefix("x: ").speed(1.0))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut offset.y).prefix("y: ").speed(1.0))
            .changed();
    });
    if changed {
        events.push(AppIntent::GroupOffsetChanged { offset });
    }
}
