//! Zentrale Konfiguration für den Szenen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::Camera2D;

// ── Selektion ───────────────────────────────────────────────────────

/// Mindestgröße (Pixel je Achse), ab der ein Drag als Rechteck-Selektion gilt.
pub const MIN_SELECT_PX: i32 = 10;
/// Collider nehmen standardmäßig nicht am Einzelklick-Pick teil.
pub const PICK_COLLIDERS: bool = false;

// ── Viewport-Layout ────────────────────────────────────────────────

/// Höhe der Menüleiste über dem Viewport in Pixeln.
pub const TOP_BAR_PX: f32 = 35.0;
/// Anteil der Fensterbreite, den der Viewport einnimmt.
pub const VIEWPORT_WIDTH_FRACTION: f32 = 1.0 / 1.5;
/// Anteil der Fensterhöhe, den der Viewport einnimmt.
pub const VIEWPORT_HEIGHT_FRACTION: f32 = 1.0 / 1.5;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = Camera2D::ZOOM_MIN;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = Camera2D::ZOOM_MAX;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Overlay-Rendering ──────────────────────────────────────────────

/// Renderer-Bounds, achsen-aligniert (RGBA: Grün).
pub const OVERLAY_COLOR_RENDERER: [f32; 4] = [0.0, 1.0, 0.0, 0.88];
/// Renderer-Bounds inklusive Rotation (RGBA: Pink).
pub const OVERLAY_COLOR_RENDERER_ROTATED: [f32; 4] = [1.0, 0.41, 0.71, 0.88];
/// Mittelpunkt der Renderer-Bounds (RGBA: Cyan).
pub const OVERLAY_COLOR_RENDERER_CENTER: [f32; 4] = [0.0, 1.0, 1.0, 0.88];
/// Rigidbody-Umriss (RGBA: Rot).
pub const OVERLAY_COLOR_RIGIDBODY: [f32; 4] = [1.0, 0.0, 0.0, 0.88];
/// Audio-Reichweite (RGBA: Gelb).
pub const OVERLAY_COLOR_AUDIO_RANGE: [f32; 4] = [1.0, 1.0, 0.0, 0.88];
/// Audio-Abklingbeginn (RGBA: blasses Gelb).
pub const OVERLAY_COLOR_AUDIO_FALLOFF: [f32; 4] = [1.0, 1.0, 0.0, 0.39];
/// Kamera-Viewport (RGBA: Lila).
pub const OVERLAY_COLOR_CAMERA: [f32; 4] = [1.0, 0.0, 1.0, 0.88];
/// Button-Fläche (RGBA: Blau).
pub const OVERLAY_COLOR_BUTTON: [f32; 4] = [0.0, 0.0, 1.0, 0.88];
/// Marker für reine Transforms (RGBA: Orange).
pub const OVERLAY_COLOR_TRANSFORM: [f32; 4] = [1.0, 0.65, 0.0, 0.88];
/// Kantenlänge der Punkt-Marker in Welteinheiten.
pub const MARKER_SIZE_WORLD: f32 = 10.0;
/// Linienstärke der Overlays in Pixeln.
pub const OVERLAY_LINE_WIDTH_PX: f32 = 2.0;

/// Verhalten der Kamera beim Scroll-Zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomStyle {
    /// Zoomt auf die obere linke Ecke des View-Fields
    TopLeft,
    /// Hält die Bildschirmmitte fest
    Center,
    /// Hält den Weltpunkt unter der Maus fest
    #[default]
    Mouse,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Mindestgröße eines Selektions-Drags in Pixeln (beide Achsen)
    pub min_select_px: i32,
    /// Collider beim Einzelklick berücksichtigen
    pub pick_colliders: bool,

    // ── Viewport ────────────────────────────────────────────────
    /// Höhe der Menüleiste über dem Viewport
    pub top_bar_px: f32,
    /// Viewport-Breite als Anteil der Fensterbreite
    pub viewport_width_fraction: f32,
    /// Viewport-Höhe als Anteil der Fensterhöhe
    pub viewport_height_fraction: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Verhalten beim Mausrad
    pub zoom_style: ZoomStyle,
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Overlays ────────────────────────────────────────────────
    pub overlay_color_renderer: [f32; 4],
    pub overlay_color_renderer_rotated: [f32; 4],
    pub overlay_color_renderer_center: [f32; 4],
    pub overlay_color_rigidbody: [f32; 4],
    pub overlay_color_audio_range: [f32; 4],
    pub overlay_color_audio_falloff: [f32; 4],
    pub overlay_color_camera: [f32; 4],
    pub overlay_color_button: [f32; 4],
    pub overlay_color_transform: [f32; 4],
    /// Kantenlänge der Punkt-Marker in Welteinheiten
    pub marker_size_world: f32,
    /// Linienstärke der Overlays in Pixeln
    pub overlay_line_width_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            min_select_px: MIN_SELECT_PX,
            pick_colliders: PICK_COLLIDERS,

            top_bar_px: TOP_BAR_PX,
            viewport_width_fraction: VIEWPORT_WIDTH_FRACTION,
            viewport_height_fraction: VIEWPORT_HEIGHT_FRACTION,

            zoom_style: ZoomStyle::default(),
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            overlay_color_renderer: OVERLAY_COLOR_RENDERER,
            overlay_color_renderer_rotated: OVERLAY_COLOR_RENDERER_ROTATED,
            overlay_color_renderer_center: OVERLAY_COLOR_RENDERER_CENTER,
            overlay_color_rigidbody: OVERLAY_COLOR_RIGIDBODY,
            overlay_color_audio_range: OVERLAY_COLOR_AUDIO_RANGE,
            overlay_color_audio_falloff: OVERLAY_COLOR_AUDIO_FALLOFF,
            overlay_color_camera: OVERLAY_COLOR_CAMERA,
            overlay_color_button: OVERLAY_COLOR_BUTTON,
            overlay_color_transform: OVERLAY_COLOR_TRANSFORM,
            marker_size_world: MARKER_SIZE_WORLD,
            overlay_line_width_px: OVERLAY_LINE_WIDTH_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scene_editor.toml")
    }
}
