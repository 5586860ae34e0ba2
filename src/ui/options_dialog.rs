//! Optionen-Dialog für Selektion, Kamera und Overlay-Farben.

use crate::app::{AppIntent, AppState};
use crate::render::to_color32;
use crate::shared::ZoomStyle;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(
    ctx: &egui::Context,
    state: &AppState,
    open: &mut bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !*open {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .open(open)
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Selektion ───────────────────────────────────
                    ui.collapsing("Selektion", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Mindestgröße Drag (px):");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.min_select_px).range(0..=200))
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.pick_colliders, "Collider per Klick wählbar")
                            .changed();
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Stil:");
                            for (style, label) in [
                                (ZoomStyle::TopLeft, "Oben links"),
                                (ZoomStyle::Center, "Mitte"),
                                (ZoomStyle::Mouse, "Maus"),
                            ] {
                                changed |= ui
                                    .radio_value(&mut opts.zoom_style, style, label)
                                    .changed();
                            }
                        });
                        ui.horizontal(|ui| {
                            ui.label("Scroll-Schritt:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Overlays ────────────────────────────────────
                    ui.collapsing("Overlays", |ui| {
                        changed |= color_edit(ui, "Renderer:", &mut opts.overlay_color_renderer);
                        changed |= color_edit(
                            ui,
                            "Renderer (rotiert):",
                            &mut opts.overlay_color_renderer_rotated,
                        );
                        changed |= color_edit(
                            ui,
                            "Renderer-Mitte:",
                            &mut opts.overlay_color_renderer_center,
                        );
                        changed |= color_edit(ui, "Rigidbody:", &mut opts.overlay_color_rigidbody);
                        changed |=
                            color_edit(ui, "Audio-Reichweite:", &mut opts.overlay_color_audio_range);
                        changed |=
                            color_edit(ui, "Audio-Abklingen:", &mut opts.overlay_color_audio_falloff);
                        changed |= color_edit(ui, "Kamera:", &mut opts.overlay_color_camera);
                        changed |= color_edit(ui, "Button:", &mut opts.overlay_color_button);
                        changed |= color_edit(ui, "Transform:", &mut opts.overlay_color_transform);
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.overlay_line_width_px)
                                        .range(0.5..=8.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    ui.separator();
                    if ui.button("Standardwerte").clicked() {
                        events.push(AppIntent::ResetOptionsRequested);
                    }
                });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|channel| channel as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
