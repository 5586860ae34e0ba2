use glam::Vec2;

/// Maustaste eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Links: Selektion
    Primary,
    /// Mitte: Kamera-Pan
    Middle,
    /// Rechts: derzeit ohne Funktion im Viewport
    Secondary,
}

/// Gehaltene Modifier-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl (bzw. Cmd): erweitert die Selektion statt sie zu ersetzen
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
    };
}

/// Vom Editor ausgewertete Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Gravis/Backtick: Entwickler-Konsole
    Grave,
    /// R: mit Ctrl+Shift Szene neu laden
    R,
}

/// Rohes Eingabe-Event in Fenster-Koordinaten (Pixel, Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Maustaste gedrückt
    PointerDown {
        button: PointerButton,
        pos: Vec2,
        modifiers: Modifiers,
    },
    /// Maustaste losgelassen
    PointerUp {
        button: PointerButton,
        pos: Vec2,
        modifiers: Modifiers,
    },
    /// Zeiger bewegt
    PointerMotion { pos: Vec2, primary_held: bool },
    /// Zeiger hat das Fenster verlassen
    PointerLeft,
    /// Mausrad (positiv = vom Benutzer weg = hineinzoomen)
    Wheel { delta: f32, pos: Vec2 },
    /// Taste gedrückt
    KeyDown { key: Key, modifiers: Modifiers },
    /// Fenstergröße hat sich geändert
    WindowResized { size: Vec2 },
}
