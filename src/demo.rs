//! Mitgelieferte Demo-Szene mit je einer Entität pro Komponenten-Art.

use glam::Vec2;

use crate::core::{
    AudioSourceComponent, ButtonComponent, CameraComponent, ColliderShape, Entity,
    RendererComponent, Rect, RigidbodyComponent, Scene,
};

/// Baut die Demo-Szene.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new("demo");

    scene.insert(
        Entity::new("crate")
            .with_transform(Vec2::new(120.0, 120.0))
            .with_renderer(RendererComponent::new(Rect::new(0.0, 0.0, 64.0, 64.0))),
    );
    scene.insert(
        Entity::new("tilted sign")
            .with_transform(Vec2::new(300.0, 140.0))
            .with_renderer(RendererComponent {
                rect: Rect::new(0.0, 0.0, 96.0, 32.0),
                rotation_deg: 30.0,
                z_index: 1,
            }),
    );
    scene.insert(
        Entity::new("ball")
            .with_transform(Vec2::new(480.0, 120.0))
            .with_renderer(RendererComponent::new(Rect::new(-16.0, -16.0, 32.0, 32.0)))
            .with_rigidbody(RigidbodyComponent {
                offset: Vec2::ZERO,
                shape: ColliderShape::Circle { radius: 16.0 },
            }),
    );
    scene.insert(
        Entity::new("speaker")
            .with_transform(Vec2::new(200.0, 320.0))
            .with_audio_source(AudioSourceComponent {
                offset: Vec2::ZERO,
                max_range: 80.0,
                falloff_start: 40.0,
            }),
    );
    scene.insert(
        Entity::new("cutscene camera")
            .with_transform(Vec2::new(420.0, 280.0))
            .with_camera(CameraComponent {
                view_field: Rect::new(0.0, 0.0, 160.0, 90.0),
                rotation_deg: 0.0,
            }),
    );
    scene.insert(
        Entity::new("start button")
            .with_transform(Vec2::new(620.0, 300.0))
            .with_button(ButtonComponent {
                rect: Rect::new(0.0, 0.0, 120.0, 40.0),
            }),
    );
    scene.insert(Entity::new("spawn point").with_transform(Vec2::new(60.0, 420.0)));

    scene
}

#[cfg(test)]
mod tests {
    use super::demo_scene;

    #[test]
    fn demo_scene_has_one_entity_per_kind() {
        let scene = demo_scene();
        assert_eq!(scene.len(), 2 + 7);
        assert!(scene
            .iter()
            .any(|e| e.name == "spawn point" && e.is_bare_transform()));
    }
}
