//! Viewport-Adapter: übersetzt egui-Rohereignisse in `InputEvent`s und zeichnet die Overlays.

use eframe::egui;
use glam::Vec2;

use crate::app::{InputEvent, Key, Modifiers, PointerButton};
use crate::render;
use crate::shared::RenderScene;

/// Merkt sich, was zwischen zwei Frames für die Übersetzung nötig ist.
#[derive(Debug, Default)]
pub struct ViewportInput {
    primary_held: bool,
    last_pointer_pos: Option<Vec2>,
    last_window_size: Option<Vec2>,
}

impl ViewportInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Eingaben des aktuellen Frames in Reihenfolge ihres Eintreffens.
    pub fn collect_events(&mut self, ctx: &egui::Context) -> Vec<InputEvent> {
        let mut out = Vec::new();

        let size = to_vec2(ctx.content_rect().size());
        if self.last_window_size != Some(size) {
            self.last_window_size = Some(size);
            out.push(InputEvent::WindowResized { size });
        }

        // Klicks auf egui-Fenster über dem Viewport gehören nicht der Selektion
        let ui_has_pointer = ctx.wants_pointer_input();
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            if ui_has_pointer && matches!(event, egui::Event::PointerButton { pressed: true, .. }) {
                continue;
            }
            self.translate(event, &mut out);
        }

        out
    }

    fn translate(&mut self, event: &egui::Event, out: &mut Vec<InputEvent>) {
        match event {
            egui::Event::PointerMoved(pos) => {
                let pos = to_vec2(pos.to_vec2());
                self.last_pointer_pos = Some(pos);
                out.push(InputEvent::PointerMotion {
                    pos,
                    primary_held: self.primary_held,
                });
            }
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
                ..
            } => {
                let Some(button) = map_button(*button) else {
                    return;
                };
                if button == PointerButton::Primary {
                    self.primary_held = *pressed;
                }
                let pos = to_vec2(pos.to_vec2());
                let modifiers = map_modifiers(modifiers);
                out.push(if *pressed {
                    InputEvent::PointerDown {
                        button,
                        pos,
                        modifiers,
                    }
                } else {
                    InputEvent::PointerUp {
                        button,
                        pos,
                        modifiers,
                    }
                });
            }
            egui::Event::PointerGone => {
                self.primary_held = false;
                self.last_pointer_pos = None;
                out.push(InputEvent::PointerLeft);
            }
            egui::Event::MouseWheel { delta, .. } => self.push_wheel(delta.y, out),
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => {
                if let Some(key) = map_key(*key) {
                    out.push(InputEvent::KeyDown {
                        key,
                        modifiers: map_modifiers(modifiers),
                    });
                }
            }
            _ => {}
        }
    }

    /// Scroll ohne bekannte Zeigerposition wird verworfen.
    fn push_wheel(&self, delta: f32, out: &mut Vec<InputEvent>) {
        if let Some(pos) = self.last_pointer_pos {
            if delta != 0.0 {
                out.push(InputEvent::Wheel { delta, pos });
            }
        }
    }
}

/// Zeichnet Overlays und Drag-Hinweis, beschnitten auf den Viewport.
pub fn render_viewport(ctx: &egui::Context, scene: &RenderScene) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let viewport = egui::Rect::from_min_size(
                egui::pos2(scene.viewport.x, scene.viewport.y),
                egui::vec2(scene.viewport.w, scene.viewport.h),
            );
            let painter = ui.painter().with_clip_rect(viewport);
            painter.rect_stroke(
                viewport,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(80)),
                egui::StrokeKind::Inside,
            );
            render::paint_scene(&painter, scene);
        });
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Backtick => Some(Key::Grave),
        egui::Key::R => Some(Key::R),
        _ => None,
    }
}

fn map_modifiers(modifiers: &egui::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.command || modifiers.ctrl,
        shift: modifiers.shift,
    }
}

fn to_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}
