//! Viewport-Input-Handling: rohe Zeiger-/Tastatur-Events → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule, in dieser Reihenfolge ausgewertet:
//! - `selection` — Selektions-Zustandsmaschine (Klick, Ctrl-Toggle, Drag-Rechteck)
//! - `camera` — Mittelmaus-Pan, Scroll-Zoom, Fenster-Resize
//! - `shortcuts` — Tastenkombinationen (Konsole, Szene neu laden)
//!
//! Die Selektion läuft zuerst, damit spätere Phasen im selben Frame den
//! aktuellen Selektionszustand sehen.

mod camera;
mod selection;
mod shortcuts;

use crate::app::{AppIntent, AppState, InputEvent};

/// Übersetzt ein rohes Event in AppIntents und schreibt den Zeigerzustand fort.
pub fn translate(state: &mut AppState, event: &InputEvent) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    selection::handle(state, event, &mut intents);
    camera::handle(state, event, &mut intents);
    shortcuts::handle(event, &mut intents);
    intents
}
