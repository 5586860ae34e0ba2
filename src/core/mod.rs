//! Core-Domänentypen: Geometrie, Bounding-Shapes, Entitäten, Szene, Kamera.

pub mod bounds;
pub mod camera;
pub mod entity;
pub mod geometry;
pub mod scene;

pub use bounds::{component_shape, pick_shape, BoundingShape, ComponentKind};
pub use camera::{screen_to_world, screen_to_world_below_bar, world_to_screen, Camera2D};
pub use entity::{
    AudioSourceComponent, ButtonComponent, CameraComponent, ColliderShape, Entity, EntityId,
    RendererComponent, RigidbodyComponent, Transform,
};
pub use geometry::{
    oriented_rect_intersects, point_in_oriented_rect, point_in_rect, rect_contains_rect, Circle,
    OrientedRect, Rect,
};
pub use scene::Scene;
