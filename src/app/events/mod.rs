//! Event-Typen für den Datenfluss Input → Intent → Command.
//!
//! - `InputEvent` — rohe Zeiger-/Tastatur-Events aus dem Fenster-Layer
//! - `AppIntent` — Absichten aus UI/System ohne Mutationslogik
//! - `AppCommand` — mutierende Schritte, zentral im Controller ausgeführt

mod command;
mod input;
mod intent;

pub use command::AppCommand;
pub use input::{InputEvent, Key, Modifiers, PointerButton};
pub use intent::AppIntent;
