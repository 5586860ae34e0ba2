//! Szene: geordnete Entitäten inklusive der zwei Editor-Sentinels.
//!
//! Die Iterationsreihenfolge ist die Einfügereihenfolge (Szenenreihenfolge).

use glam::Vec2;
use indexmap::IndexMap;

use super::entity::{CameraComponent, Entity, EntityId};
use super::geometry::Rect;

/// Container für alle Entitäten einer geladenen Szene.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Anzeigename der Szene
    pub name: String,
    entities: IndexMap<EntityId, Entity>,
    next_id: u64,
    editor_camera: EntityId,
    origin: EntityId,
}

impl Scene {
    /// Erstellt eine leere Szene mit Editor-Kamera und Ursprungs-Marker.
    pub fn new(name: impl Into<String>) -> Self {
        let mut scene = Self {
            name: name.into(),
            entities: IndexMap::new(),
            next_id: 1,
            editor_camera: EntityId(0),
            origin: EntityId(0),
        };

        scene.editor_camera = scene.insert(
            Entity::new("editor camera")
                .with_transform(Vec2::ZERO)
                .with_camera(CameraComponent {
                    view_field: Rect::new(0.0, 0.0, 1280.0, 720.0),
                    rotation_deg: 0.0,
                }),
        );
        scene.origin = scene.insert(Entity::new("origin").with_transform(Vec2::ZERO));
        scene
    }

    /// Fügt eine Entität am Ende der Szenenreihenfolge ein und vergibt ihre ID.
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.id = id;
        self.entities.insert(id, entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Alle Entitäten in Szenenreihenfolge (inklusive Sentinels).
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Anzahl aller Entitäten inklusive Sentinels.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Gibt `true` zurück, wenn die Szene außer den Sentinels nichts enthält.
    pub fn is_empty(&self) -> bool {
        self.entities.len() <= 2
    }

    /// Entfernt eine Entität. Die Szenenreihenfolge der übrigen bleibt erhalten.
    ///
    /// Sentinels lassen sich nicht entfernen.
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        if self.is_sentinel(id) {
            log::debug!("Sentinel {} kann nicht entfernt werden", id);
            return None;
        }
        self.entities.shift_remove(&id)
    }

    /// Kopiert eine Entität unter neuer ID ans Ende der Szene.
    pub fn duplicate(&mut self, id: EntityId) -> Option<EntityId> {
        if self.is_sentinel(id) {
            return None;
        }
        let mut copy = self.entities.get(&id)?.clone();
        copy.name = format!("{} (copy)", copy.name);
        Some(self.insert(copy))
    }

    /// ID der Editor-Kamera.
    pub fn editor_camera(&self) -> EntityId {
        self.editor_camera
    }

    /// ID des Ursprungs-Markers.
    pub fn origin(&self) -> EntityId {
        self.origin
    }

    /// Beide Editor-Sentinels.
    pub fn sentinels(&self) -> [EntityId; 2] {
        [self.editor_camera, self.origin]
    }

    pub fn is_sentinel(&self, id: EntityId) -> bool {
        id == self.editor_camera || id == self.origin
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_contains_only_sentinels() {
        let scene = Scene::new("test");
        assert_eq!(scene.len(), 2);
        assert!(scene.is_empty());
        assert!(scene.is_sentinel(scene.editor_camera()));
        assert!(scene.is_sentinel(scene.origin()));
    }

    #[test]
    fn insert_assigns_ids_in_scene_order() {
        let mut scene = Scene::new("test");
        let a = scene.insert(Entity::new("a"));
        let b = scene.insert(Entity::new("b"));
        assert_ne!(a, b);

        let names: Vec<_> = scene.iter().skip(2).map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(scene.get(a).map(|e| e.id), Some(a));
    }

    #[test]
    fn destroy_keeps_order_and_protects_sentinels() {
        let mut scene = Scene::new("test");
        let a = scene.insert(Entity::new("a"));
        let b = scene.insert(Entity::new("b"));
        let c = scene.insert(Entity::new("c"));

        assert!(scene.destroy(b).is_some());
        assert!(scene.destroy(scene.origin()).is_none());

        let ids: Vec<_> = scene.iter().skip(2).map(|e| e.id).collect();
        assert_eq!(ids, [a, c]);
    }

    #[test]
    fn duplicate_creates_new_entity() {
        let mut scene = Scene::new("test");
        let a = scene.insert(Entity::new("a").with_transform(Vec2::new(1.0, 2.0)));
        let copy = scene.duplicate(a).expect("Kopie erwartet");

        assert_ne!(copy, a);
        let entity = scene.get(copy).expect("Kopie in Szene");
        assert_eq!(entity.name, "a (copy)");
        assert_eq!(entity.origin(), Vec2::new(1.0, 2.0));
        assert!(scene.duplicate(scene.editor_camera()).is_none());
    }
}
