use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::SelectionHook;

/// Gruppen-Transform für Mehrfach-Selektionen.
///
/// `offset` ist der im Inspector eingestellte Gruppen-Versatz, `last_applied`
/// der zuletzt auf die Entitäten angewendete Wert. Beide werden auf Null
/// zurückgesetzt, sobald sich die Selektion ändert; die Selektion meldet das
/// über den Hook aus [`GroupTransform::invalidation_hook`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTransform {
    /// Eingestellter Gruppen-Versatz
    pub offset: Vec2,
    /// Zuletzt angewendeter Versatz
    pub last_applied: Vec2,
    stale: Rc<Cell<bool>>,
}

impl GroupTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook für die Selektionsmenge: markiert den Cache bei jeder Änderung als veraltet.
    pub fn invalidation_hook(&self) -> SelectionHook {
        let stale = Rc::clone(&self.stale);
        Box::new(move |_| stale.set(true))
    }

    /// Setzt den Cache zurück, falls die Selektion sich seit dem letzten Abgleich geändert hat.
    ///
    /// Gibt `true` zurück, wenn zurückgesetzt wurde.
    pub fn sync(&mut self) -> bool {
        if !self.stale.replace(false) {
            return false;
        }
        self.offset = Vec2::ZERO;
        self.last_applied = Vec2::ZERO;
        true
    }

    /// Differenz zwischen neuem und zuletzt angewendetem Versatz; merkt sich den neuen Wert.
    pub fn take_delta(&mut self, offset: Vec2) -> Vec2 {
        let delta = offset - self.last_applied;
        self.offset = offset;
        self.last_applied = offset;
        delta
    }
}
