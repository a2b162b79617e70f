//! A slider widget for selecting values within a range.

use crate::callback::Callback;
use crate::constants::{
    SLIDER_DEFAULT_WIDTH, SLIDER_HEIGHT, SLIDER_THUMB_SIZE, SLIDER_TRACK_HEIGHT,
};
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::state::{SliderDragState, SliderState};
use crate::widget::{EventResult, Widget};

/// A horizontal slider driven by a host-owned [`SliderState`].
///
/// Every interaction reports the complete next state through `on_change`; the
/// slider itself keeps nothing between frames.
pub struct Slider<M> {
    min: f32,
    max: f32,
    step: f32,
    state: SliderState,
    width: Length,
    on_change: Callback<SliderState, M>,
    track_color: Color,
    fill_color: Color,
    thumb_color: Color,
}

impl<M> Slider<M> {
    pub fn new(min: f32, max: f32, state: &SliderState) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: 0.0,
            state: SliderState {
                value: state.value.clamp(min, max),
                drag: state.drag,
            },
            width: Length::Fixed(SLIDER_DEFAULT_WIDTH),
            on_change: Callback::none(),
            track_color: Color::SLIDER_TRACK,
            fill_color: Color::SLIDER_FILL,
            thumb_color: Color::SLIDER_THUMB,
        }
    }

    /// Step size (0 for continuous).
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(SliderState) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Convert an x position to a (stepped) value.
    fn x_to_value(&self, x: f32, bounds: Bounds) -> f32 {
        let track_start = bounds.x + SLIDER_THUMB_SIZE / 2.0;
        let track_width = (bounds.width - SLIDER_THUMB_SIZE).max(1.0);
        let ratio = ((x - track_start) / track_width).clamp(0.0, 1.0);
        let value = self.min + ratio * (self.max - self.min);

        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            (self.min + steps * self.step).clamp(self.min, self.max)
        } else {
            value
        }
    }

    fn value_ratio(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            (self.state.value - self.min) / (self.max - self.min)
        }
    }

    fn emit(&self, value: f32, drag: SliderDragState) -> EventResult<M> {
        self.on_change
            .call(SliderState { value, drag })
            .map_or(EventResult::Redraw, EventResult::Message)
    }
}

impl<M> Widget<M> for Slider<M> {
    fn layout(&mut self, available: Size) -> Size {
        let width = self.width.resolve(available.width, SLIDER_DEFAULT_WIDTH);
        Size::new(width, SLIDER_HEIGHT)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let ratio = self.value_ratio();
        let track_width = (bounds.width - SLIDER_THUMB_SIZE).max(0.0);

        let track_y = bounds.y + (bounds.height - SLIDER_TRACK_HEIGHT) / 2.0;
        let track_x = bounds.x + SLIDER_THUMB_SIZE / 2.0;
        renderer.fill_rect(
            Bounds::new(track_x, track_y, track_width, SLIDER_TRACK_HEIGHT),
            self.track_color,
        );
        renderer.fill_rect(
            Bounds::new(track_x, track_y, track_width * ratio, SLIDER_TRACK_HEIGHT),
            self.fill_color,
        );

        let thumb_color = if self.state.drag.is_dragging() {
            Color::SLIDER_THUMB_ACTIVE
        } else {
            self.thumb_color
        };
        let thumb = Bounds::new(
            bounds.x + ratio * track_width,
            bounds.y + (bounds.height - SLIDER_THUMB_SIZE) / 2.0,
            SLIDER_THUMB_SIZE,
            SLIDER_THUMB_SIZE,
        );
        renderer.fill_rect(thumb, thumb_color);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(position.0, position.1) => {
                let value = self.x_to_value(position.0, bounds);
                self.emit(value, SliderDragState::Dragging)
            }
            Event::MouseMove { position, .. } if self.state.drag.is_dragging() => {
                let value = self.x_to_value(position.0, bounds);
                if (value - self.state.value).abs() < f32::EPSILON {
                    return EventResult::None;
                }
                self.emit(value, SliderDragState::Dragging)
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } if self.state.drag.is_dragging() => {
                self.emit(self.state.value, SliderDragState::Idle)
            }
            _ => EventResult::None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.state.drag.is_dragging()
    }
}

/// Create a slider over `min..=max` showing `state`.
pub fn slider<M>(min: f32, max: f32, state: &SliderState) -> Slider<M> {
    Slider::new(min, max, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }

    // Track spans x in [7, 107] for a 114 px wide slider at the origin.
    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0 + SLIDER_THUMB_SIZE, SLIDER_HEIGHT)
    }

    #[test]
    fn test_press_starts_drag_with_stepped_value() {
        let mut s: Slider<SliderState> = slider(1.0, 21.0, &SliderState::new(8.0))
            .step(1.0)
            .on_change(|st| st);
        let result = s.on_event(&press(7.0 + 51.0, 10.0), bounds());
        let st = result.into_message().unwrap();
        assert_eq!(st.value, 11.0);
        assert!(st.drag.is_dragging());
    }

    #[test]
    fn test_press_outside_ignored() {
        let mut s: Slider<SliderState> = slider(0.0, 100.0, &SliderState::new(0.0)).on_change(|st| st);
        assert!(s.on_event(&press(500.0, 10.0), bounds()).is_none());
    }

    #[test]
    fn test_drag_move_outside_bounds_clamps() {
        let state = SliderState {
            value: 50.0,
            drag: SliderDragState::Dragging,
        };
        let mut s: Slider<SliderState> = slider(0.0, 100.0, &state).on_change(|st| st);
        assert!(s.has_active_drag());
        let moved = Event::MouseMove {
            position: (1000.0, 300.0),
            modifiers: Modifiers::default(),
        };
        let st = s.on_event(&moved, bounds()).into_message().unwrap();
        assert_eq!(st.value, 100.0);
    }

    #[test]
    fn test_release_ends_drag() {
        let state = SliderState {
            value: 30.0,
            drag: SliderDragState::Dragging,
        };
        let mut s: Slider<SliderState> = slider(0.0, 100.0, &state).on_change(|st| st);
        let release = Event::MouseRelease {
            button: MouseButton::Left,
            position: (0.0, 0.0),
            modifiers: Modifiers::default(),
        };
        let st = s.on_event(&release, bounds()).into_message().unwrap();
        assert_eq!(st, SliderState::new(30.0));
    }

    #[test]
    fn test_initial_value_clamped() {
        let s: Slider<()> = slider(0.0, 10.0, &SliderState::new(50.0));
        assert_eq!(s.value_ratio(), 1.0);
    }
}
