//! Zeigerzustand der Selektions-Zustandsmaschine (Idle → Dragging → Idle).

use glam::Vec2;

use crate::core::Rect;

/// Phase der primären Maustaste im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerPhase {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Drag-Rechteck wird aufgezogen (Bildschirm-Koordinaten)
    Dragging { start: Vec2, current: Vec2 },
}

/// Flüchtiger Eingabezustand des Viewports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Aktuelle Phase
    pub phase: PointerPhase,
    /// Position des letzten primären Button-Down im Viewport
    pub press_origin: Option<Vec2>,
    /// UI-Hinweis: Drag-Rechteck zeichnen
    pub show_drag_rect: bool,
    /// Letzte Position während eines Mittelmaus-Pans
    pub pan_anchor: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PointerPhase::Dragging { .. })
    }

    /// Merkt sich den Startpunkt eines möglichen Drags.
    pub fn press(&mut self, pos: Vec2) {
        self.phase = PointerPhase::Idle;
        self.press_origin = Some(pos);
        self.show_drag_rect = false;
    }

    /// Bewegung mit gehaltener Primärtaste: startet oder aktualisiert den Drag.
    pub fn drag_to(&mut self, pos: Vec2, min_select_px: i32) {
        match self.phase {
            PointerPhase::Idle => {
                let Some(start) = self.press_origin else {
                    return;
                };
                self.phase = PointerPhase::Dragging {
                    start,
                    current: pos,
                };
            }
            PointerPhase::Dragging { ref mut current, .. } => *current = pos,
        }
        self.show_drag_rect = self.drag_exceeds(min_select_px);
    }

    /// Beendet einen Drag und liefert Start/Ende, wenn die Mindestgröße erreicht ist.
    pub fn release(&mut self, pos: Vec2, min_select_px: i32) -> Option<(Vec2, Vec2)> {
        let result = match self.phase {
            PointerPhase::Dragging { start, .. } if drag_meets_threshold(start, pos, min_select_px) => {
                Some((start, pos))
            }
            _ => None,
        };
        self.phase = PointerPhase::Idle;
        self.press_origin = None;
        self.show_drag_rect = false;
        result
    }

    /// Erzwingt Idle, z.B. wenn der Zeiger den Viewport verlässt.
    pub fn cancel(&mut self) {
        self.phase = PointerPhase::Idle;
        self.press_origin = None;
        self.show_drag_rect = false;
    }

    /// Sichtbares Drag-Rechteck in Bildschirm-Koordinaten (nur wenn der Hinweis aktiv ist).
    pub fn visible_drag_rect(&self) -> Option<Rect> {
        match self.phase {
            PointerPhase::Dragging { start, current } if self.show_drag_rect => {
                Some(Rect::from_drag(start, current).normalized())
            }
            _ => None,
        }
    }

    fn drag_exceeds(&self, min_select_px: i32) -> bool {
        match self.phase {
            PointerPhase::Dragging { start, current } => {
                drag_meets_threshold(start, current, min_select_px)
            }
            PointerPhase::Idle => false,
        }
    }
}

/// Breite und Höhe des Drags erreichen beide `min_select_px`.
pub fn drag_meets_threshold(start: Vec2, end: Vec2, min_select_px: i32) -> bool {
    let extent = (end - start).abs();
    let min = min_select_px as f32;
    extent.x >= min && extent.y >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_without_press_stays_idle() {
        let mut pointer = PointerState::new();
        pointer.drag_to(Vec2::new(50.0, 50.0), 10);
        assert_eq!(pointer.phase, PointerPhase::Idle);
        assert!(!pointer.show_drag_rect);
    }

    #[test]
    fn hint_only_after_threshold_on_both_axes() {
        let mut pointer = PointerState::new();
        pointer.press(Vec2::new(100.0, 100.0));

        pointer.drag_to(Vec2::new(130.0, 105.0), 10);
        assert!(pointer.is_dragging());
        assert!(!pointer.show_drag_rect);
        assert!(pointer.visible_drag_rect().is_none());

        pointer.drag_to(Vec2::new(130.0, 115.0), 10);
        assert!(pointer.show_drag_rect);
        let rect = pointer.visible_drag_rect().expect("Rechteck sichtbar");
        assert_eq!(rect, Rect::new(100.0, 100.0, 30.0, 15.0));
    }

    #[test]
    fn small_release_yields_nothing() {
        let mut pointer = PointerState::new();
        pointer.press(Vec2::new(10.0, 10.0));
        pointer.drag_to(Vec2::new(15.0, 14.0), 10);
        assert!(pointer.release(Vec2::new(15.0, 14.0), 10).is_none());
        assert_eq!(pointer.phase, PointerPhase::Idle);
    }

    #[test]
    fn release_reports_drag_corners() {
        let mut pointer = PointerState::new();
        pointer.press(Vec2::new(60.0, 60.0));
        pointer.drag_to(Vec2::new(20.0, 30.0), 10);
        let corners = pointer.release(Vec2::new(10.0, 20.0), 10);
        assert_eq!(corners, Some((Vec2::new(60.0, 60.0), Vec2::new(10.0, 20.0))));
        assert!(!pointer.show_drag_rect);
    }

    #[test]
    fn release_without_drag_is_click() {
        let mut pointer = PointerState::new();
        pointer.press(Vec2::new(10.0, 10.0));
        assert!(pointer.release(Vec2::new(40.0, 40.0), 10).is_none());
    }

    #[test]
    fn cancel_forces_idle() {
        let mut pointer = PointerState::new();
        pointer.press(Vec2::ZERO);
        pointer.drag_to(Vec2::new(50.0, 50.0), 10);
        pointer.cancel();
        assert_eq!(pointer.phase, PointerPhase::Idle);
        assert!(!pointer.show_drag_rect);
        assert!(pointer.press_origin.is_none());
    }
}
