//! Use-Case: Rechteck-Selektion (Drag).

use crate::core::{oriented_rect_intersects, rect_contains_rect, Entity, EntityId, Rect, Scene};
use crate::AppState;

use super::helpers::selectable_entities;

/// Trifft die Drag-Zone die Entität?
///
/// Ein Transform muss echt enthalten sein; andernfalls genügt bei Entitäten mit
/// Renderer eine Überlappung der (rotierten) Renderer-Bounds mit der Zone.
fn hit_by_zone(entity: &Entity, zone: Rect) -> bool {
    let Some(transform_rect) = entity.transform_rect() else {
        return false;
    };
    if rect_contains_rect(zone, transform_rect) {
        return true;
    }
    entity
        .renderer_world_obb()
        .is_some_and(|obb| oriented_rect_intersects(&zone.to_oriented(), &obb))
}

/// Alle Entitäten, die die Zone trifft, in Szenenreihenfolge.
pub fn entities_within(scene: &Scene, zone: Rect) -> Vec<EntityId> {
    let zone = zone.normalized();
    selectable_entities(scene)
        .filter(|entity| hit_by_zone(entity, zone))
        .map(|entity| entity.id)
        .collect()
}

/// Fügt alle von der Drag-Zone getroffenen Entitäten zur Selektion hinzu.
///
/// Die Zone darf negative Breite/Höhe haben; sie wird hier normalisiert.
pub fn select_within(state: &mut AppState, zone: Rect) {
    let hits = entities_within(&state.scene, zone);
    let added = hits
        .into_iter()
        .filter(|&id| state.selection.set.add(id))
        .count();
    log::debug!("Rechteck-Selektion: {} Entitäten hinzugefügt", added);
}
