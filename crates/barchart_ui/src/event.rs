//! Input and frame events delivered to the widget tree.

use web_time::Instant;

/// Events that widgets can respond to. Positions are logical pixels.
#[derive(Debug, Clone)]
pub enum Event {
    /// Cursor moved.
    MouseMove {
        position: (f32, f32),
        modifiers: Modifiers,
    },
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: Modifiers,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: Modifiers,
    },
    /// Wheel or touchpad scroll, in logical pixels (x, y).
    MouseScroll {
        delta: (f32, f32),
        position: (f32, f32),
        modifiers: Modifiers,
    },
    /// Cursor left the window.
    CursorLeft,
    /// Frame clock tick, delivered to every widget once per frame before drawing.
    Tick { now: Instant },
}

impl Event {
    /// Pointer position for positional events.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Event::MouseMove { position, .. }
            | Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseScroll { position, .. } => Some(*position),
            Event::CursorLeft | Event::Tick { .. } => None,
        }
    }

    /// Events every widget must see regardless of where the cursor is.
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Event::CursorLeft | Event::Tick { .. })
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
