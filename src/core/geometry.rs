//! Geometrie-Primitive und Hit-Tests (Rect, orientiertes Rechteck, Kreis).
//!
//! Alle Koordinaten sind Welt-Koordinaten mit Y nach unten.

use glam::Vec2;

/// Achsen-aligniertes Rechteck (Ursprung oben links, Breite/Höhe).
///
/// Breite und Höhe dürfen negativ sein (z.B. ein Drag nach links oben);
/// `normalized()` klappt sie in positive Werte um.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Erstellt ein Rechteck aus Ursprung und Ausdehnung.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rechteck mit Größe 0 an einem Punkt.
    pub fn from_point(point: Vec2) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Spannt ein Rechteck von `start` nach `end` auf (Vorzeichen bleiben erhalten).
    pub fn from_drag(start: Vec2, end: Vec2) -> Self {
        Self::new(start.x, start.y, end.x - start.x, end.y - start.y)
    }

    /// Gibt ein Rechteck mit nicht-negativer Breite/Höhe und angepasstem Ursprung zurück.
    pub fn normalized(self) -> Self {
        let mut rect = self;
        if rect.w < 0.0 {
            rect.x += rect.w;
            rect.w = -rect.w;
        }
        if rect.h < 0.0 {
            rect.y += rect.h;
            rect.h = -rect.h;
        }
        rect
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Eckpunkte im Uhrzeigersinn (Bildschirm-Sicht): oben links, oben rechts, unten rechts, unten links.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x, self.y + self.h),
        ]
    }

    /// Verschiebt das Rechteck um `delta`.
    pub fn translated(self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// Das Rechteck als (unrotiertes) orientiertes Rechteck.
    pub fn to_oriented(self) -> OrientedRect {
        OrientedRect::new(self.corners())
    }
}

/// Rechteck mit beliebiger Rotation, beschrieben durch vier Welt-Eckpunkte in Umlaufreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub verts: [Vec2; 4],
}

impl OrientedRect {
    pub const fn new(verts: [Vec2; 4]) -> Self {
        Self { verts }
    }

    /// Rotiert `rect` um seinen Mittelpunkt (Grad, im Uhrzeigersinn bei Y nach unten).
    pub fn from_rotated_rect(rect: Rect, rotation_deg: f32) -> Self {
        Self::from_rotated_rect_about(rect, rotation_deg, rect.center())
    }

    /// Rotiert `rect` um einen beliebigen Pivot.
    pub fn from_rotated_rect_about(rect: Rect, rotation_deg: f32, pivot: Vec2) -> Self {
        let rotation = Vec2::from_angle(rotation_deg.to_radians());
        let verts = rect.corners().map(|corner| pivot + rotation.rotate(corner - pivot));
        Self { verts }
    }

    /// Mittelpunkt (Schwerpunkt der Eckpunkte).
    pub fn center(&self) -> Vec2 {
        self.verts.iter().copied().sum::<Vec2>() * 0.25
    }

    /// Achsen-alignierte Hülle.
    pub fn aabb(&self) -> Rect {
        let (mut min, mut max) = (self.verts[0], self.verts[0]);
        for &vert in &self.verts[1..] {
            min = min.min(vert);
            max = max.max(vert);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Kanten als Paare aufeinanderfolgender Eckpunkte.
    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..4).map(move |i| (self.verts[i], self.verts[(i + 1) % 4]))
    }
}

/// Kreis in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Punkt liegt im Kreis (Rand inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Punkt-in-Rechteck, alle vier Kanten inklusive.
///
/// Ein Punkt genau auf dem Rand zählt als innen (`{0,0,100,100}` enthält `(100,50)`).
pub fn point_in_rect(point: Vec2, rect: Rect) -> bool {
    let rect = rect.normalized();
    point.x >= rect.x && point.x <= rect.x + rect.w && point.y >= rect.y && point.y <= rect.y + rect.h
}

/// Punkt-in-konvexem-Viereck über die vier bereits transformierten Eckpunkte.
///
/// Funktioniert für beide Umlaufrichtungen; Punkte auf einer Kante zählen als innen.
pub fn point_in_oriented_rect(point: Vec2, obb: &OrientedRect) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;

    for (a, b) in obb.edges() {
        let cross = (b - a).perp_dot(point - a);
        if cross > 0.0 {
            has_pos = true;
        } else if cross < 0.0 {
            has_neg = true;
        }
        if has_pos && has_neg {
            return false;
        }
    }

    if !has_pos && !has_neg {
        // Degeneriertes Viereck (Linie oder Punkt): nur die Hülle selbst trifft
        return point_in_rect(point, obb.aabb());
    }

    true
}

/// Projiziert alle Eckpunkte auf `axis` und liefert (min, max).
fn project(obb: &OrientedRect, axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for vert in obb.verts {
        let p = vert.dot(axis);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

/// Separating-Axis-Test zweier orientierter Rechtecke.
///
/// Berührende Kanten zählen als Überlappung. Degenerierte Rechtecke liefern
/// keine Trennachsen, daher müssen sich zusätzlich die Hüllrechtecke berühren.
pub fn oriented_rect_intersects(a: &OrientedRect, b: &OrientedRect) -> bool {
    let (a_box, b_box) = (a.aabb(), b.aabb());
    if a_box.max().cmplt(b_box.min()).any() || b_box.max().cmplt(a_box.min()).any() {
        return false;
    }
    for obb in [a, b] {
        for (start, end) in obb.edges() {
            let axis = (end - start).perp();
            if axis.length_squared() <= f32::EPSILON {
                // Degenerierte Kante (Rechteck ohne Ausdehnung) liefert keine Achse
                continue;
            }
            let (a_min, a_max) = project(a, axis);
            let (b_min, b_max) = project(b, axis);
            if a_max < b_min || b_max < a_min {
                return false;
            }
        }
    }
    true
}

/// Strikte Enthaltenseins-Prüfung: alle vier Ecken von `inner` liegen echt innerhalb von `outer`.
///
/// Ein Rechteck der Größe 0 (Punkt) wird wie ein Punkt geprüft.
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    let outer = outer.normalized();
    let inner = inner.normalized();
    inner.x > outer.x
        && inner.y > outer.y
        && inner.x + inner.w < outer.x + outer.w
        && inner.y + inner.h < outer.y + outer.h
}
