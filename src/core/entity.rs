//! Entitäten und ihre Komponenten.
//!
//! Alle Komponenten-Geometrien sind lokal zur Transform-Position angegeben;
//! Welt-Geometrie entsteht erst über die Methoden von `Entity`.
//! Entitäten ohne Transform verwenden den Welt-Ursprung als Bezug.

use glam::Vec2;

use super::geometry::{Circle, OrientedRect, Rect};

/// Stabiler Handle einer Entität in der Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position der Entität in der Welt
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec2,
}

/// Sichtbare Darstellung (Sprite, Text, …)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererComponent {
    /// Unrotiertes Rechteck relativ zur Transform-Position
    pub rect: Rect,
    /// Rotation um den Rechteck-Mittelpunkt in Grad
    pub rotation_deg: f32,
    /// Zeichenreihenfolge, größer = weiter oben
    pub z_index: i32,
}

impl RendererComponent {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            rotation_deg: 0.0,
            z_index: 0,
        }
    }
}

/// Kollisionsform eines Rigidbodys
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Rechteck mit Ursprung am Körper-Ursprung
    Rectangle { width: f32, height: f32 },
    /// Kreis um den Körper-Ursprung
    Circle { radius: f32 },
}

/// Physik-Körper mit Kollisionsform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidbodyComponent {
    /// Versatz des Körper-Ursprungs relativ zur Transform-Position
    pub offset: Vec2,
    pub shape: ColliderShape,
}

/// Audio-Quelle mit Reichweite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSourceComponent {
    /// Versatz des Emitters relativ zur Transform-Position
    pub offset: Vec2,
    /// Maximale Reichweite (äußerer Kreis)
    pub max_range: f32,
    /// Beginn des Abklingens (innerer Kreis)
    pub falloff_start: f32,
}

/// Kamera mit Viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraComponent {
    /// View-Field relativ zur Transform-Position
    pub view_field: Rect,
    /// Rotation des Viewports in Grad
    pub rotation_deg: f32,
}

/// UI-Button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonComponent {
    /// Klickfläche relativ zur Transform-Position
    pub rect: Rect,
}

/// Platziertes Objekt einer Szene mit optionalen Komponenten.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Wird beim Einfügen in die Szene vergeben
    pub id: EntityId,
    pub name: String,
    pub active: bool,
    pub transform: Option<Transform>,
    pub renderer: Option<RendererComponent>,
    pub rigidbody: Option<RigidbodyComponent>,
    pub audio_source: Option<AudioSourceComponent>,
    pub camera: Option<CameraComponent>,
    pub button: Option<ButtonComponent>,
}

impl Entity {
    /// Erstellt eine aktive Entität ohne Komponenten.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId(0),
            name: name.into(),
            active: true,
            transform: None,
            renderer: None,
            rigidbody: None,
            audio_source: None,
            camera: None,
            button: None,
        }
    }

    pub fn with_transform(mut self, position: Vec2) -> Self {
        self.transform = Some(Transform { position });
        self
    }

    pub fn with_renderer(mut self, renderer: RendererComponent) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_rigidbody(mut self, rigidbody: RigidbodyComponent) -> Self {
        self.rigidbody = Some(rigidbody);
        self
    }

    pub fn with_audio_source(mut self, audio_source: AudioSourceComponent) -> Self {
        self.audio_source = Some(audio_source);
        self
    }

    pub fn with_camera(mut self, camera: CameraComponent) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_button(mut self, button: ButtonComponent) -> Self {
        self.button = Some(button);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Bezugspunkt aller lokalen Geometrien.
    pub fn origin(&self) -> Vec2 {
        self.transform.map_or(Vec2::ZERO, |t| t.position)
    }

    /// Transform als Rechteck der Größe 0 (für die Enthaltenseins-Prüfung).
    pub fn transform_rect(&self) -> Option<Rect> {
        self.transform.map(|t| Rect::from_point(t.position))
    }

    /// Achsen-aligniertes, unrotiertes Renderer-Rechteck in Welt-Koordinaten.
    pub fn renderer_world_rect(&self) -> Option<Rect> {
        self.renderer.map(|r| r.rect.translated(self.origin()))
    }

    /// Renderer-Bounds inklusive Rotation in Welt-Koordinaten.
    pub fn renderer_world_obb(&self) -> Option<OrientedRect> {
        self.renderer.map(|r| {
            OrientedRect::from_rotated_rect(r.rect.translated(self.origin()), r.rotation_deg)
        })
    }

    /// Welt-Mittelpunkt der Renderer-Bounds.
    pub fn renderer_world_center(&self) -> Option<Vec2> {
        self.renderer_world_rect().map(|rect| rect.center())
    }

    /// Welt-Ursprung des Rigidbodys.
    pub fn rigidbody_world_origin(&self) -> Option<Vec2> {
        self.rigidbody.map(|rb| self.origin() + rb.offset)
    }

    /// Äußerer (Reichweite) und innerer (Abklingen) Kreis der Audio-Quelle.
    pub fn audio_world_circles(&self) -> Option<(Circle, Circle)> {
        self.audio_source.map(|audio| {
            let center = self.origin() + audio.offset;
            (
                Circle::new(center, audio.max_range),
                Circle::new(center, audio.falloff_start),
            )
        })
    }

    /// Kamera-Viewport als orientiertes Rechteck in Welt-Koordinaten.
    pub fn camera_world_viewport(&self) -> Option<OrientedRect> {
        self.camera.map(|cam| {
            OrientedRect::from_rotated_rect(
                cam.view_field.translated(self.origin()),
                cam.rotation_deg,
            )
        })
    }

    /// Button-Fläche in Welt-Koordinaten.
    pub fn button_world_rect(&self) -> Option<Rect> {
        self.button.map(|b| b.rect.translated(self.origin()))
    }

    /// Z-Index für die Pick-Reihenfolge (ohne Renderer: 0).
    pub fn pick_layer(&self) -> i32 {
        self.renderer.map_or(0, |r| r.z_index)
    }

    /// Hat die Entität nur einen Transform und keine flächige Komponente?
    pub fn is_bare_transform(&self) -> bool {
        self.transform.is_some()
            && self.renderer.is_none()
            && self.rigidbody.is_none()
            && self.audio_source.is_none()
            && self.camera.is_none()
            && self.button.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn component_geometry_follows_transform() {
        let entity = Entity::new("sprite")
            .with_transform(Vec2::new(100.0, 50.0))
            .with_renderer(RendererComponent::new(Rect::new(0.0, 0.0, 20.0, 10.0)))
            .with_button(ButtonComponent {
                rect: Rect::new(-5.0, -5.0, 10.0, 10.0),
            });

        let rect = entity.renderer_world_rect().expect("Renderer vorhanden");
        assert_relative_eq!(rect.x, 100.0);
        assert_relative_eq!(rect.y, 50.0);

        let center = entity.renderer_world_center().expect("Renderer vorhanden");
        assert_relative_eq!(center.x, 110.0);
        assert_relative_eq!(center.y, 55.0);

        let button = entity.button_world_rect().expect("Button vorhanden");
        assert_relative_eq!(button.x, 95.0);
        assert_relative_eq!(button.y, 45.0);
    }

    #[test]
    fn entity_without_transform_uses_world_origin() {
        let entity = Entity::new("sound").with_audio_source(AudioSourceComponent {
            offset: Vec2::new(3.0, 4.0),
            max_range: 50.0,
            falloff_start: 10.0,
        });

        let (outer, inner) = entity.audio_world_circles().expect("Audio vorhanden");
        assert_relative_eq!(outer.center.x, 3.0);
        assert_relative_eq!(outer.radius, 50.0);
        assert_relative_eq!(inner.radius, 10.0);
        assert!(entity.transform_rect().is_none());
    }

    #[test]
    fn bare_transform_detection() {
        let bare = Entity::new("marker").with_transform(Vec2::ZERO);
        assert!(bare.is_bare_transform());

        let with_button = bare.clone().with_button(ButtonComponent {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        });
        assert!(!with_button.is_bare_transform());
        assert!(!Entity::new("empty").is_bare_transform());
    }
}
