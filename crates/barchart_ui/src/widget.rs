//! Widget trait and event results

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Outcome of delivering an event to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// Event ignored, nothing changed
    None,
    /// Visual state changed, another frame is needed
    Redraw,
    /// The widget produced an application message
    Message(M),
}

impl<M> EventResult<M> {
    pub fn is_none(&self) -> bool {
        matches!(self, EventResult::None)
    }

    /// Combine two results. A message beats a redraw request, which beats nothing;
    /// between two messages the first one is kept.
    pub fn or(self, other: EventResult<M>) -> EventResult<M> {
        match (self, other) {
            (EventResult::Message(m), _) => EventResult::Message(m),
            (_, EventResult::Message(m)) => EventResult::Message(m),
            (EventResult::Redraw, _) | (_, EventResult::Redraw) => EventResult::Redraw,
            _ => EventResult::None,
        }
    }

    /// Extract the message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(m) => Some(m),
            _ => None,
        }
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(message: Option<M>) -> Self {
        message.map_or(EventResult::None, EventResult::Message)
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget into the frame's draw list
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }

    /// Whether the widget is mid-drag and needs pointer events outside its bounds
    fn has_active_drag(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wins_over_redraw() {
        let r: EventResult<u8> = EventResult::Redraw.or(EventResult::Message(3));
        assert_eq!(r, EventResult::Message(3));
    }

    #[test]
    fn test_first_message_kept() {
        let r = EventResult::Message(1).or(EventResult::Message(2));
        assert_eq!(r, EventResult::Message(1));
    }

    #[test]
    fn test_none_or_none() {
        let r: EventResult<u8> = EventResult::None.or(EventResult::None);
        assert!(r.is_none());
    }
}
