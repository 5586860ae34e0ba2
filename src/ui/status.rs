//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Szene: {} | Entitäten: {}",
                state.scene.name,
                state.entity_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            match (state.selection_count(), state.current_selection()) {
                (0, _) => ui.label("Selektiert: 0"),
                (_, Some(id)) => ui.label(format!("Selektiert: {}", id)),
                (count, None) => ui.label(format!("Selektiert: {}", count)),
            };

            if state.view.viewport_locked {
                ui.separator();
                ui.label(egui::RichText::new("Viewport gesperrt").color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
