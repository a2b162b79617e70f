//! Helper functions for container layout widgets (Row, Column)

use crate::element::Element;
use crate::event::Event;
use crate::layout::Bounds;
use crate::renderer::Renderer;
use crate::widget::EventResult;

/// Dispatch an event to child elements.
///
/// Broadcast events (`Tick`, `CursorLeft`) reach every child and their results
/// are merged. Positional events are dropped when they fall outside the
/// container, except for releases and for moves while a child is dragging; they
/// stop at the first child that produces a message.
pub fn dispatch_event_to_children<M>(
    children: &mut [Element<M>],
    child_bounds: &[Bounds],
    event: &Event,
    container_bounds: Bounds,
) -> EventResult<M> {
    if event.is_broadcast() {
        let mut result = EventResult::None;
        for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
            let child_result = child.on_event(event, container_bounds.offset(*bounds));
            if matches!(result, EventResult::Message(_))
                && matches!(child_result, EventResult::Message(_))
            {
                log::warn!("Dropping a second message produced by the same broadcast event");
            }
            result = result.or(child_result);
        }
        return result;
    }

    let has_drag = children.iter().any(|c| c.has_active_drag());
    let should_filter = !matches!(event, Event::MouseRelease { .. })
        && !(matches!(event, Event::MouseMove { .. }) && has_drag);

    if should_filter {
        if let Some(pos) = event.position() {
            if !container_bounds.contains(pos.0, pos.1) && !has_drag {
                return EventResult::None;
            }
        }
    }

    let mut result = EventResult::None;
    for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
        match child.on_event(event, container_bounds.offset(*bounds)) {
            EventResult::Message(m) => return EventResult::Message(m),
            other => result = result.or(other),
        }
    }
    result
}

/// Draw children at their cached bounds positions.
pub fn draw_children<M>(
    children: &[Element<M>],
    child_bounds: &[Bounds],
    renderer: &mut Renderer,
    container_bounds: Bounds,
) {
    for (child, bounds) in children.iter().zip(child_bounds.iter()) {
        child.draw(renderer, container_bounds.offset(*bounds));
    }
}

#[cfg(test)]
mod tests {
    use web_time::Instant;

    use super::*;
    use crate::event::{Modifiers, MouseButton};
    use crate::layout::Size;
    use crate::widget::Widget;

    /// Answers every event with its own id, or a redraw on ticks.
    struct Echo {
        id: u8,
        redraw_on_tick: bool,
    }

    impl Widget<u8> for Echo {
        fn layout(&mut self, _available: Size) -> Size {
            Size::new(10.0, 10.0)
        }

        fn draw(&self, _renderer: &mut Renderer, _bounds: Bounds) {}

        fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<u8> {
            match event {
                Event::Tick { .. } if self.redraw_on_tick => EventResult::Redraw,
                Event::Tick { .. } => EventResult::None,
                _ => match event.position() {
                    Some((x, y)) if bounds.contains(x, y) => EventResult::Message(self.id),
                    _ => EventResult::None,
                },
            }
        }
    }

    fn echo_pair() -> (Vec<Element<u8>>, Vec<Bounds>) {
        (
            vec![
                Element::new(Echo {
                    id: 1,
                    redraw_on_tick: false,
                }),
                Element::new(Echo {
                    id: 2,
                    redraw_on_tick: true,
                }),
            ],
            vec![
                Bounds::new(0.0, 0.0, 10.0, 10.0),
                Bounds::new(10.0, 0.0, 10.0, 10.0),
            ],
        )
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_tick_reaches_every_child() {
        let (mut children, bounds) = echo_pair();
        let tick = Event::Tick {
            now: Instant::now(),
        };
        let result =
            dispatch_event_to_children(&mut children, &bounds, &tick, Bounds::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(result, EventResult::Redraw);
    }

    #[test]
    fn test_press_routed_by_position() {
        let (mut children, bounds) = echo_pair();
        let container = Bounds::new(100.0, 100.0, 20.0, 10.0);
        let result = dispatch_event_to_children(&mut children, &bounds, &press(115.0, 105.0), container);
        assert_eq!(result, EventResult::Message(2));
    }

    #[test]
    fn test_press_outside_container_dropped() {
        let (mut children, bounds) = echo_pair();
        let container = Bounds::new(0.0, 0.0, 20.0, 10.0);
        let result = dispatch_event_to_children(&mut children, &bounds, &press(50.0, 5.0), container);
        assert!(result.is_none());
    }
}
