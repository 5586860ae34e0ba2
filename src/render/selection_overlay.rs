//! Overlay-Primitive für selektierte Entitäten.
//!
//! Pro Entität wird für jede vorhandene Komponente ein Overlay erzeugt,
//! in fester Reihenfolge: Renderer, Rigidbody, Audio-Quelle, Kamera, Button,
//! zuletzt der Transform-Marker (nur ohne jede flächige Komponente).
//! Alle Primitive liegen in Welt-Koordinaten.

use glam::Vec2;

use crate::core::{component_shape, BoundingShape, Circle, ComponentKind, Entity, Rect};
use crate::shared::{EditorOptions, RenderScene};

/// Ein zu zeichnendes Overlay in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayPrimitive {
    /// Achsen-aligniertes Rechteck (Umriss)
    Rect { rect: Rect, color: [f32; 4] },
    /// Geschlossener Polygonzug durch vier Ecken (Umriss)
    Polygon { verts: [Vec2; 4], color: [f32; 4] },
    /// Kreis (Umriss)
    Circle { circle: Circle, color: [f32; 4] },
    /// Gefülltes Quadrat mit fester Welt-Kantenlänge
    Marker {
        center: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

impl OverlayPrimitive {
    pub fn color(&self) -> [f32; 4] {
        match *self {
            Self::Rect { color, .. }
            | Self::Polygon { color, .. }
            | Self::Circle { color, .. }
            | Self::Marker { color, .. } => color,
        }
    }
}

/// Erzeugt die Overlays aller selektierten Entitäten der Szene.
pub fn build_overlays(scene: &RenderScene) -> Vec<OverlayPrimitive> {
    let mut out = Vec::new();
    for entity in &scene.selected {
        push_entity_overlays(entity, &scene.options, &mut out);
    }
    out
}

/// Hängt die Overlays einer Entität an `out` an.
pub fn push_entity_overlays(
    entity: &Entity,
    options: &EditorOptions,
    out: &mut Vec<OverlayPrimitive>,
) {
    if let (Some(aligned), Some(rotated), Some(center)) = (
        entity.renderer_world_rect(),
        entity.renderer_world_obb(),
        entity.renderer_world_center(),
    ) {
        out.push(OverlayPrimitive::Rect {
            rect: aligned,
            color: options.overlay_color_renderer,
        });
        out.push(OverlayPrimitive::Polygon {
            verts: rotated.verts,
            color: options.overlay_color_renderer_rotated,
        });
        out.push(OverlayPrimitive::Marker {
            center,
            size: options.marker_size_world,
            color: options.overlay_color_renderer_center,
        });
    }

    if let Some(shape) = component_shape(entity, ComponentKind::Rigidbody) {
        out.push(shape_primitive(shape, options.overlay_color_rigidbody, options));
    }

    if let Some((range, falloff)) = entity.audio_world_circles() {
        out.push(OverlayPrimitive::Circle {
            circle: range,
            color: options.overlay_color_audio_range,
        });
        out.push(OverlayPrimitive::Circle {
            circle: falloff,
            color: options.overlay_color_audio_falloff,
        });
    }

    if let Some(shape) = component_shape(entity, ComponentKind::Camera) {
        out.push(shape_primitive(shape, options.overlay_color_camera, options));
    }

    if let Some(shape) = component_shape(entity, ComponentKind::Button) {
        out.push(shape_primitive(shape, options.overlay_color_button, options));
    }

    if entity.is_bare_transform() {
        if let Some(shape) = component_shape(entity, ComponentKind::Transform) {
            out.push(shape_primitive(shape, options.overlay_color_transform, options));
        }
    }
}

fn shape_primitive(
    shape: BoundingShape,
    color: [f32; 4],
    options: &EditorOptions,
) -> OverlayPrimitive {
    match shape {
        BoundingShape::Rect(rect) => OverlayPrimitive::Rect { rect, color },
        BoundingShape::Oriented(obb) => OverlayPrimitive::Polygon {
            verts: obb.verts,
            color,
        },
        BoundingShape::Circle(circle) => OverlayPrimitive::Circle { circle, color },
        BoundingShape::Point(center) => OverlayPrimitive::Marker {
            center,
            size: options.marker_size_world,
            color,
        },
    }
}
