//! Zeichnet Overlay-Primitive mit dem egui-Painter.

use eframe::egui;
use glam::Vec2;

use super::selection_overlay::{build_overlays, OverlayPrimitive};
use crate::shared::RenderScene;

/// Zeichnet die Selektions-Overlays und den Drag-Hinweis eines Frames.
///
/// Der Painter sollte auf den Viewport zugeschnitten sein; alle Positionen
/// sind Fensterkoordinaten.
pub fn paint_scene(painter: &egui::Painter, scene: &RenderScene) {
    if scene.has_selection() {
        let stroke_width = scene.options.overlay_line_width_px;
        for primitive in build_overlays(scene) {
            paint_primitive(painter, scene, &primitive, stroke_width);
        }
    }

    if let Some(drag) = scene.drag_rect {
        let rect = egui::Rect::from_min_max(to_pos(drag.min()), to_pos(drag.max()));
        let stroke_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200);
        let fill = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 24);
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, stroke_color),
            egui::StrokeKind::Inside,
        );
    }
}

fn paint_primitive(
    painter: &egui::Painter,
    scene: &RenderScene,
    primitive: &OverlayPrimitive,
    stroke_width: f32,
) {
    let color = to_color32(primitive.color());
    let stroke = egui::Stroke::new(stroke_width, color);

    match *primitive {
        OverlayPrimitive::Rect { rect, .. } => {
            let min = scene.world_to_window(rect.min());
            let max = scene.world_to_window(rect.max());
            let screen = egui::Rect::from_two_pos(to_pos(min), to_pos(max));
            painter.rect_stroke(screen, 0.0, stroke, egui::StrokeKind::Middle);
        }
        OverlayPrimitive::Polygon { verts, .. } => {
            let points = verts
                .iter()
                .map(|&v| to_pos(scene.world_to_window(v)))
                .collect();
            painter.add(egui::Shape::closed_line(points, stroke));
        }
        OverlayPrimitive::Circle { circle, .. } => {
            let center = to_pos(scene.world_to_window(circle.center));
            painter.circle_stroke(center, scene.world_len_to_px(circle.radius), stroke);
        }
        OverlayPrimitive::Marker { center, size, .. } => {
            let center = to_pos(scene.world_to_window(center));
            let side = scene.world_len_to_px(size);
            let rect = egui::Rect::from_center_size(center, egui::vec2(side, side));
            painter.rect_filled(rect, 0.0, color);
        }
    }
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// RGBA-Farbe in [0, 1] → egui-Farbe.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::to_color32;

    #[test]
    fn color_conversion_clamps_and_rounds() {
        let c = to_color32([1.0, 0.5, -1.0, 2.0]);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 128, 0, 255));
    }
}
