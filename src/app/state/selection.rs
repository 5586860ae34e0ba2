//! Selektionsmenge: eingefügte Reihenfolge, keine Duplikate, keine Sentinels.

use indexmap::IndexSet;

use super::GroupTransform;
use crate::core::{EntityId, Scene};

/// Art einer Mitgliedschafts-Änderung, wird an den Selektions-Hook gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Entität wurde hinzugefügt
    Added(EntityId),
    /// Entität wurde entfernt
    Removed(EntityId),
    /// Selektion wurde vollständig geleert
    Cleared,
}

/// Callback, der bei jeder Mitgliedschafts-Änderung aufgerufen wird.
pub type SelectionHook = Box<dyn FnMut(SelectionChange)>;

/// Menge der aktuell selektierten Entitäten.
///
/// Die Reihenfolge entspricht der Einfügereihenfolge; das zuletzt hinzugefügte
/// Mitglied steht am Ende. Jede Änderung erhöht die Generation und ruft den
/// Hook auf, über den abhängige Caches (Gruppen-Offset) invalidiert werden.
pub struct SelectionSet {
    ids: IndexSet<EntityId>,
    excluded: Vec<EntityId>,
    generation: u64,
    hook: Option<SelectionHook>,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion, die die gegebenen Sentinels nie aufnimmt.
    pub fn new(excluded: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            ids: IndexSet::new(),
            excluded: excluded.into_iter().collect(),
            generation: 0,
            hook: None,
        }
    }

    /// Ersetzt die Liste der ausgeschlossenen Sentinels (z.B. nach Szenenwechsel).
    pub fn set_excluded(&mut self, excluded: impl IntoIterator<Item = EntityId>) {
        self.excluded = excluded.into_iter().collect();
        let sentinels: Vec<EntityId> = self
            .ids
            .iter()
            .copied()
            .filter(|id| self.excluded.contains(id))
            .collect();
        for id in sentinels {
            self.remove(id);
        }
    }

    /// Registriert den Hook für Mitgliedschafts-Änderungen.
    pub fn set_hook(&mut self, hook: SelectionHook) {
        self.hook = Some(hook);
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// Fügt eine Entität hinzu. Keine Wirkung bei Duplikaten oder Sentinels.
    ///
    /// Gibt `true` zurück, wenn sich die Mitgliedschaft geändert hat.
    pub fn add(&mut self, id: EntityId) -> bool {
        if self.excluded.contains(&id) {
            log::debug!("Sentinel {} ist nicht selektierbar", id);
            return false;
        }
        if !self.ids.insert(id) {
            return false;
        }
        self.notify(SelectionChange::Added(id));
        true
    }

    /// Entfernt eine Entität. Nicht-Mitglieder werden ignoriert.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if !self.ids.shift_remove(&id) {
            log::debug!("{} ist nicht selektiert, nichts zu entfernen", id);
            return false;
        }
        self.notify(SelectionChange::Removed(id));
        true
    }

    /// Leert die Selektion vollständig.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.notify(SelectionChange::Cleared);
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Die einzige selektierte Entität; `None` bei leerer oder Mehrfach-Selektion.
    pub fn current(&self) -> Option<EntityId> {
        match self.ids.len() {
            1 => self.ids.first().copied(),
            _ => None,
        }
    }

    /// Mitglieder in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    /// Zähler, der bei jeder Änderung der Mitgliedschaft steigt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn notify(&mut self, change: SelectionChange) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(hook) = self.hook.as_mut() {
            hook(change);
        }
    }
}

impl std::fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSet")
            .field("ids", &self.ids)
            .field("excluded", &self.excluded)
            .field("generation", &self.generation)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

/// Selektion plus der davon abhängige Gruppen-Transform-Cache.
#[derive(Debug)]
pub struct SelectionState {
    /// Selektierte Entitäten
    pub set: SelectionSet,
    /// Gruppen-Versatz für Mehrfach-Selektionen
    pub group: GroupTransform,
}

impl SelectionState {
    /// Erstellt eine leere Selektion für die Sentinels der Szene.
    pub fn for_scene(scene: &Scene) -> Self {
        let group = GroupTransform::new();
        let mut set = SelectionSet::new(scene.sentinels());
        set.set_hook(group.invalidation_hook());
        Self { set, group }
    }

    /// Bringt den Gruppen-Cache auf den Stand der Selektion.
    pub fn sync_group(&mut self) {
        if self.group.sync() {
            log::debug!("Gruppen-Offset nach Selektionsänderung zurückgesetzt");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const CAMERA: EntityId = EntityId(1);
    const ORIGIN: EntityId = EntityId(2);

    fn set() -> SelectionSet {
        SelectionSet::new([CAMERA, ORIGIN])
    }

    #[test]
    fn repeated_adds_count_distinct_entities() {
        let mut selection = set();
        for raw in [3, 4, 3, 5, 4, 3] {
            selection.add(EntityId(raw));
        }
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn sentinels_are_never_added() {
        let mut selection = set();
        selection.add(EntityId(7));
        assert!(!selection.add(CAMERA));
        assert!(!selection.add(ORIGIN));
        assert_eq!(selection.len(), 1);
        assert!(!selection.contains(CAMERA));
    }

    #[test]
    fn add_then_remove_restores_previous_state() {
        let mut selection = set();
        selection.add(EntityId(3));
        selection.add(EntityId(4));
        let before: Vec<_> = selection.iter().collect();

        selection.add(EntityId(9));
        selection.remove(EntityId(9));

        assert_eq!(selection.iter().collect::<Vec<_>>(), before);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let mut selection = set();
        selection.add(EntityId(3));
        selection.add(EntityId(4));
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains(EntityId(3)));
        assert!(!selection.contains(EntityId(4)));
    }

    #[test]
    fn removing_non_member_is_noop() {
        let mut selection = set();
        selection.add(EntityId(3));
        let generation = selection.generation();
        assert!(!selection.remove(EntityId(4)));
        assert_eq!(selection.generation(), generation);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn current_only_defined_for_single_member() {
        let mut selection = set();
        assert_eq!(selection.current(), None);
        selection.add(EntityId(3));
        assert_eq!(selection.current(), Some(EntityId(3)));
        selection.add(EntityId(4));
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn insertion_order_is_preserved_after_removal() {
        let mut selection = set();
        for raw in [5, 3, 8] {
            selection.add(EntityId(raw));
        }
        selection.remove(EntityId(3));
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            [EntityId(5), EntityId(8)]
        );
    }

    #[test]
    fn hook_sees_every_membership_change() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);

        let mut selection = set();
        selection.set_hook(Box::new(move |change| sink.borrow_mut().push(change)));

        selection.add(EntityId(3));
        selection.add(EntityId(3));
        selection.add(CAMERA);
        selection.remove(EntityId(3));
        selection.clear();

        assert_eq!(
            *changes.borrow(),
            [
                SelectionChange::Added(EntityId(3)),
                SelectionChange::Removed(EntityId(3)),
                SelectionChange::Cleared,
            ]
        );
    }

    #[test]
    fn membership_change_resets_group_offset_via_hook() {
        let mut scene = Scene::new("group");
        let a = scene.insert(crate::core::Entity::new("a"));
        let b = scene.insert(crate::core::Entity::new("b"));
        let mut state = SelectionState::for_scene(&scene);
        state.set.add(a);
        state.sync_group();
        state.group.take_delta(glam::Vec2::new(8.0, 2.0));

        state.set.add(a);
        state.sync_group();
        assert_eq!(state.group.last_applied, glam::Vec2::new(8.0, 2.0));

        state.set.add(b);
        state.sync_group();
        assert_eq!(state.group.last_applied, glam::Vec2::ZERO);
        assert_eq!(state.group.offset, glam::Vec2::ZERO);
    }

    #[test]
    fn new_exclusions_evict_members() {
        let mut selection = SelectionSet::new([]);
        selection.add(EntityId(1));
        selection.add(EntityId(5));
        selection.set_excluded([EntityId(1), EntityId(2)]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), [EntityId(5)]);
    }
}
