//! TUI message types (Elm Messages).

use vitrine_core::locale::Locale;
use vitrine_core::position::{AnimationDirection, Position};

use crate::keymap::{KeyAction, PointerAction};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Card positions pushed by the carousel.
    Positions {
        positions: Vec<Position>,
        cursor: usize,
    },
    /// Track animation tag pushed by the carousel.
    Animation(Option<AnimationDirection>),
    /// Active language changed.
    Locale(Locale),
    /// Status line text.
    Status(String),
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Mouse press or release forwarded from the event loop.
    Pointer(PointerAction),
    /// Tick event for deferred work and redraws.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
