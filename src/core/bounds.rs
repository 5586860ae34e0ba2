//! Einheitliche Bounding-Shapes pro Komponente.
//!
//! Jede Komponenten-Art wird über `component_shape()` auf genau eine `BoundingShape`
//! abgebildet. Hit-Tests und Overlay-Rendering verzweigen danach nur noch über die
//! vier Shape-Varianten statt über Komponenten-Präsenz.

use glam::Vec2;

use super::entity::{ColliderShape, Entity};
use super::geometry::{point_in_oriented_rect, point_in_rect, Circle, OrientedRect, Rect};

/// Geometrische Ausdehnung einer Komponente in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingShape {
    /// Achsen-aligniertes Rechteck
    Rect(Rect),
    /// Rotiertes Rechteck (vier Eckpunkte)
    Oriented(OrientedRect),
    /// Kreis
    Circle(Circle),
    /// Punkt ohne Fläche, nicht per Fläche treffbar
    Point(Vec2),
}

impl BoundingShape {
    /// Liegt der Punkt in der Fläche der Shape? Punkte haben keine Fläche.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            BoundingShape::Rect(rect) => point_in_rect(point, *rect),
            BoundingShape::Oriented(obb) => point_in_oriented_rect(point, obb),
            BoundingShape::Circle(circle) => circle.contains(point),
            BoundingShape::Point(_) => false,
        }
    }

    /// Achsen-alignierte Hülle.
    pub fn aabb(&self) -> Rect {
        match self {
            BoundingShape::Rect(rect) => rect.normalized(),
            BoundingShape::Oriented(obb) => obb.aabb(),
            BoundingShape::Circle(circle) => Rect::new(
                circle.center.x - circle.radius,
                circle.center.y - circle.radius,
                circle.radius * 2.0,
                circle.radius * 2.0,
            ),
            BoundingShape::Point(point) => Rect::from_point(*point),
        }
    }
}

/// Komponenten-Arten mit Geometrie, in Präzedenz-Reihenfolge (hoch → niedrig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Renderer,
    Rigidbody,
    AudioSource,
    Camera,
    Button,
    Transform,
}

/// Pick-Kette für Einzelklicks. Collider sind standardmäßig ausgenommen.
const PICK_CHAIN: [ComponentKind; 3] = [
    ComponentKind::Renderer,
    ComponentKind::AudioSource,
    ComponentKind::Button,
];

/// Pick-Kette mit Collidern (zwischen Renderer und Audio-Quelle).
const PICK_CHAIN_WITH_COLLIDERS: [ComponentKind; 4] = [
    ComponentKind::Renderer,
    ComponentKind::Rigidbody,
    ComponentKind::AudioSource,
    ComponentKind::Button,
];

/// Adapter: bildet eine Komponente der Entität auf ihre Bounding-Shape ab.
///
/// `None`, wenn die Entität diese Komponente nicht besitzt.
pub fn component_shape(entity: &Entity, kind: ComponentKind) -> Option<BoundingShape> {
    match kind {
        ComponentKind::Renderer => {
            let renderer = entity.renderer?;
            if renderer.rotation_deg == 0.0 {
                entity.renderer_world_rect().map(BoundingShape::Rect)
            } else {
                entity.renderer_world_obb().map(BoundingShape::Oriented)
            }
        }
        ComponentKind::Rigidbody => {
            let rigidbody = entity.rigidbody?;
            let origin = entity.rigidbody_world_origin()?;
            Some(match rigidbody.shape {
                ColliderShape::Rectangle { width, height } => {
                    BoundingShape::Rect(Rect::new(origin.x, origin.y, width, height))
                }
                ColliderShape::Circle { radius } => {
                    BoundingShape::Circle(Circle::new(origin, radius))
                }
            })
        }
        ComponentKind::AudioSource => entity
            .audio_world_circles()
            .map(|(outer, _)| BoundingShape::Circle(outer)),
        ComponentKind::Camera => entity.camera_world_viewport().map(BoundingShape::Oriented),
        ComponentKind::Button => entity.button_world_rect().map(BoundingShape::Rect),
        ComponentKind::Transform => entity.transform.map(|t| BoundingShape::Point(t.position)),
    }
}

/// Shape, gegen die ein Einzelklick getestet wird: die höchstrangige vorhandene
/// Komponente der Pick-Kette. `None` = Entität ist per Klick nicht treffbar.
pub fn pick_shape(entity: &Entity, pick_colliders: bool) -> Option<BoundingShape> {
    let chain: &[ComponentKind] = if pick_colliders {
        &PICK_CHAIN_WITH_COLLIDERS
    } else {
        &PICK_CHAIN
    };
    chain
        .iter()
        .find_map(|&kind| component_shape(entity, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{
        AudioSourceComponent, ButtonComponent, RendererComponent, RigidbodyComponent,
    };

    fn audio(range: f32) -> AudioSourceComponent {
        AudioSourceComponent {
            offset: Vec2::ZERO,
            max_range: range,
            falloff_start: range / 2.0,
        }
    }

    #[test]
    fn renderer_takes_precedence_over_button() {
        let entity = Entity::new("both")
            .with_transform(Vec2::ZERO)
            .with_renderer(RendererComponent::new(Rect::new(0.0, 0.0, 10.0, 10.0)))
            .with_button(ButtonComponent {
                rect: Rect::new(100.0, 100.0, 10.0, 10.0),
            });

        let shape = pick_shape(&entity, false).expect("Shape erwartet");
        assert!(shape.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!shape.contains_point(Vec2::new(105.0, 105.0)));
    }

    #[test]
    fn rotated_renderer_yields_oriented_shape() {
        let mut renderer = RendererComponent::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        renderer.rotation_deg = 30.0;
        let entity = Entity::new("rotated").with_renderer(renderer);
        assert!(matches!(
            component_shape(&entity, ComponentKind::Renderer),
            Some(BoundingShape::Oriented(_))
        ));
    }

    #[test]
    fn collider_only_pickable_when_enabled() {
        let entity = Entity::new("body")
            .with_transform(Vec2::new(10.0, 10.0))
            .with_rigidbody(RigidbodyComponent {
                offset: Vec2::ZERO,
                shape: ColliderShape::Circle { radius: 5.0 },
            });

        assert!(pick_shape(&entity, false).is_none());
        let shape = pick_shape(&entity, true).expect("Collider-Shape erwartet");
        assert!(shape.contains_point(Vec2::new(12.0, 12.0)));
    }

    #[test]
    fn audio_source_picks_by_outer_range() {
        let entity = Entity::new("speaker")
            .with_transform(Vec2::new(0.0, 0.0))
            .with_audio_source(audio(20.0));
        let shape = pick_shape(&entity, false).expect("Audio-Shape erwartet");
        assert!(shape.contains_point(Vec2::new(0.0, 19.0)));
        assert!(!shape.contains_point(Vec2::new(15.0, 15.0)));
    }

    #[test]
    fn bare_transform_is_not_area_pickable() {
        let entity = Entity::new("marker").with_transform(Vec2::new(5.0, 5.0));
        assert!(pick_shape(&entity, true).is_none());

        let point = component_shape(&entity, ComponentKind::Transform).expect("Punkt erwartet");
        assert!(!point.contains_point(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn circle_aabb_spans_diameter() {
        let shape = BoundingShape::Circle(Circle::new(Vec2::new(10.0, 10.0), 4.0));
        let aabb = shape.aabb();
        assert_eq!(aabb, Rect::new(6.0, 6.0, 8.0, 8.0));
    }
}
