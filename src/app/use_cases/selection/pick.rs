//! Use-Case: Entität per Klick selektieren (Punkt-Hit-Test).

use glam::Vec2;

use crate::core::{pick_shape, EntityId, Scene};
use crate::AppState;

use super::helpers::selectable_entities;

/// Sucht die Entität, deren Pick-Shape den Weltpunkt enthält.
///
/// Bei Überlappung gewinnt der höchste Renderer-Z-Index; bei Gleichstand die in
/// Szenenreihenfolge letzte Entität (sie wird zuletzt gezeichnet).
pub fn pick_entity(scene: &Scene, world_pos: Vec2, pick_colliders: bool) -> Option<EntityId> {
    let mut best: Option<(i32, EntityId)> = None;

    for entity in selectable_entities(scene) {
        let Some(shape) = pick_shape(entity, pick_colliders) else {
            continue;
        };
        if !shape.contains_point(world_pos) {
            continue;
        }
        let layer = entity.pick_layer();
        if best.is_none_or(|(best_layer, _)| layer >= best_layer) {
            best = Some((layer, entity.id));
        }
    }

    best.map(|(_, id)| id)
}

/// Einzelklick-Selektion.
///
/// Ohne `extend` wird die Selektion vorher geleert. Mit `extend` wird eine bereits
/// selektierte getroffene Entität wieder entfernt (Ctrl-Klick-Toggle).
pub fn select_at_point(state: &mut AppState, world_pos: Vec2, extend: bool) {
    if !extend {
        state.selection.set.clear();
    }

    let Some(hit) = pick_entity(&state.scene, world_pos, state.options.pick_colliders) else {
        return;
    };

    if extend && state.selection.set.contains(hit) {
        state.selection.set.remove(hit);
    } else {
        state.selection.set.add(hit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        ButtonComponent, ColliderShape, Entity, Rect, RendererComponent, RigidbodyComponent,
    };

    fn sprite(name: &str, pos: Vec2, z_index: i32) -> Entity {
        let mut renderer = RendererComponent::new(Rect::new(0.0, 0.0, 20.0, 20.0));
        renderer.z_index = z_index;
        Entity::new(name).with_transform(pos).with_renderer(renderer)
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let mut state = AppState::new();
        let a = state.scene.insert(sprite("a", Vec2::ZERO, 0));
        state.selection.set.add(a);

        select_at_point(&mut state, Vec2::new(500.0, 500.0), false);

        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn topmost_z_index_wins_over_scene_order() {
        let mut state = AppState::new();
        let high = state.scene.insert(sprite("high", Vec2::ZERO, 5));
        state.scene.insert(sprite("low", Vec2::ZERO, 1));

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);

        assert_eq!(state.current_selection(), Some(high));
    }

    #[test]
    fn equal_layers_resolve_to_last_in_scene_order() {
        let mut state = AppState::new();
        state.scene.insert(sprite("first", Vec2::ZERO, 0));
        let last = state.scene.insert(sprite("last", Vec2::new(5.0, 5.0), 0));

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);

        assert_eq!(state.current_selection(), Some(last));
    }

    #[test]
    fn ctrl_click_toggles_membership() {
        let mut state = AppState::new();
        let a = state.scene.insert(sprite("a", Vec2::ZERO, 0));
        let b = state.scene.insert(sprite("b", Vec2::new(100.0, 0.0), 0));

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);
        select_at_point(&mut state, Vec2::new(110.0, 10.0), true);
        assert!(state.is_selected(a) && state.is_selected(b));

        select_at_point(&mut state, Vec2::new(10.0, 10.0), true);
        assert!(!state.is_selected(a));
        assert!(state.is_selected(b));

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);
        assert_eq!(state.current_selection(), Some(a));
    }

    #[test]
    fn inactive_entities_are_not_pickable() {
        let mut state = AppState::new();
        state.scene.insert(sprite("hidden", Vec2::ZERO, 0).inactive());

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);

        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn button_is_pickable_without_renderer() {
        let mut state = AppState::new();
        let button = state.scene.insert(
            Entity::new("play")
                .with_transform(Vec2::new(50.0, 50.0))
                .with_button(ButtonComponent {
                    rect: Rect::new(0.0, 0.0, 40.0, 10.0),
                }),
        );

        select_at_point(&mut state, Vec2::new(90.0, 60.0), false);

        assert_eq!(state.current_selection(), Some(button));
    }

    #[test]
    fn colliders_need_opt_in() {
        let mut state = AppState::new();
        let body = state.scene.insert(
            Entity::new("body")
                .with_transform(Vec2::ZERO)
                .with_rigidbody(RigidbodyComponent {
                    offset: Vec2::ZERO,
                    shape: ColliderShape::Rectangle {
                        width: 30.0,
                        height: 30.0,
                    },
                }),
        );

        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);
        assert_eq!(state.selection_count(), 0);

        state.options.pick_colliders = true;
        select_at_point(&mut state, Vec2::new(10.0, 10.0), false);
        assert_eq!(state.current_selection(), Some(body));
    }

    #[test]
    fn pick_on_rect_edge_hits() {
        let mut state = AppState::new();
        let a = state.scene.insert(sprite("a", Vec2::ZERO, 0));

        select_at_point(&mut state, Vec2::new(20.0, 10.0), false);

        assert_eq!(state.current_selection(), Some(a));
    }
}
