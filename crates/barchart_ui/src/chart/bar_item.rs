//! The stock bar visual: a background column, a fill rising from the bottom,
//! the value and the label.

use web_time::Instant;

use super::colors::BarColors;
use crate::animation::FillAnimation;
use crate::constants::{
    BAR_FONT_SIZE, BAR_ITEM_HEIGHT, BAR_ITEM_WIDTH, BAR_PADDING_MEDIUM, BAR_PADDING_SMALL,
    FILL_LABEL_THRESHOLD,
};
use crate::event::Event;
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::{EventResult, Widget};

/// Something a bar chart can draw in a slot.
///
/// The chart animates the fill itself: it reads [`fill_target`](BarVisual::fill_target)
/// every frame and hands the current animated fill to [`draw`](BarVisual::draw).
pub trait BarVisual {
    /// Fill fraction the bar should settle at, in `0.0..=1.0`.
    fn fill_target(&self) -> f32;

    /// Draw into `bounds` with the given (possibly mid-animation) fill.
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds, fill: f32);
}

/// Where the value text goes for a given fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueLabel {
    /// Inside the top of the fill, in the background color
    InsideFill { y: f32 },
    /// Just above the fill, in the primary color
    AboveFill { y: f32 },
    /// No room above the fill
    Hidden,
}

/// Resolved rectangles and text positions of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub area: Bounds,
    pub fill: Bounds,
    pub value_label: ValueLabel,
    pub label_y: f32,
}

impl BarGeometry {
    pub fn compute(bounds: Bounds, fill: f32) -> BarGeometry {
        let line_height = TextMetrics::new(BAR_FONT_SIZE).line_height();
        let fill = fill.clamp(0.0, 1.0);

        let area_height = (bounds.height - line_height - BAR_PADDING_SMALL).max(0.0);
        let area = Bounds::new(
            bounds.x + BAR_PADDING_MEDIUM,
            bounds.y,
            (bounds.width - 2.0 * BAR_PADDING_MEDIUM).max(0.0),
            area_height,
        );

        let fill_height = area.height * fill;
        let fill_rect = Bounds::new(area.x, area.bottom() - fill_height, area.width, fill_height);

        let value_label = if fill >= FILL_LABEL_THRESHOLD {
            ValueLabel::InsideFill {
                y: fill_rect.y + BAR_PADDING_SMALL,
            }
        } else {
            let y = fill_rect.y - BAR_PADDING_SMALL - line_height;
            if y < area.y {
                ValueLabel::Hidden
            } else {
                ValueLabel::AboveFill { y }
            }
        };

        BarGeometry {
            area,
            fill: fill_rect,
            value_label,
            label_y: area.bottom() + BAR_PADDING_SMALL,
        }
    }
}

/// A bar showing `value` against `max_value`.
pub struct BarItem {
    value: u64,
    label: String,
    max_value: u64,
    colors: BarColors,
    width: Length,
    height: Length,
    animation: Option<FillAnimation>,
}

impl BarItem {
    pub fn new(value: u64, label: impl Into<String>, max_value: u64, colors: BarColors) -> Self {
        Self {
            value,
            label: label.into(),
            max_value,
            colors,
            width: Length::Fixed(BAR_ITEM_WIDTH),
            height: Length::Fixed(BAR_ITEM_HEIGHT),
            animation: None,
        }
    }

    /// Animate the fill through a host-owned handle when used as a standalone widget.
    pub fn animated(mut self, animation: &FillAnimation) -> Self {
        self.animation = Some(animation.clone());
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    fn centered_text(
        &self,
        renderer: &mut Renderer,
        content: &str,
        bounds: Bounds,
        y: f32,
        color: Color,
    ) {
        let width = TextMetrics::new(BAR_FONT_SIZE).line_width(content);
        let x = bounds.x + (bounds.width - width) / 2.0;
        renderer.text(content, x, y, BAR_FONT_SIZE, color);
    }
}

impl BarVisual for BarItem {
    fn fill_target(&self) -> f32 {
        if self.max_value == 0 {
            return 0.0;
        }
        (self.value as f64 / self.max_value as f64).clamp(0.0, 1.0) as f32
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds, fill: f32) {
        let geometry = BarGeometry::compute(bounds, fill);
        let value = self.value.to_string();

        renderer.push_clip(bounds);
        renderer.fill_rect(geometry.area, self.colors.background);
        renderer.fill_rect(geometry.fill, self.colors.primary);

        match geometry.value_label {
            ValueLabel::InsideFill { y } => {
                self.centered_text(renderer, &value, bounds, y, self.colors.background)
            }
            ValueLabel::AboveFill { y } => {
                self.centered_text(renderer, &value, bounds, y, self.colors.primary)
            }
            ValueLabel::Hidden => {}
        }
        self.centered_text(renderer, &self.label, bounds, geometry.label_y, self.colors.primary);
        renderer.pop_clip();
    }
}

impl<M> Widget<M> for BarItem {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, BAR_ITEM_WIDTH),
            self.height.resolve(available.height, BAR_ITEM_HEIGHT),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let fill = self
            .animation
            .as_ref()
            .map_or_else(|| self.fill_target(), FillAnimation::value);
        BarVisual::draw(self, renderer, bounds, fill);
    }

    fn on_event(&mut self, event: &Event, _bounds: Bounds) -> EventResult<M> {
        match (event, &self.animation) {
            (Event::Tick { now }, Some(animation)) => {
                if drive(animation, self.fill_target(), *now) {
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }
            _ => EventResult::None,
        }
    }
}

fn drive(animation: &FillAnimation, target: f32, now: Instant) -> bool {
    let moving = animation.drive(target, now);
    if moving {
        log::trace!("Bar fill at {:.3} heading to {:.3}", animation.value(), target);
    }
    moving
}

/// Create a bar item. Chart renderers return these; standalone use adds
/// [`animated`](BarItem::animated).
pub fn bar_item(value: u64, label: impl Into<String>, max_value: u64, colors: BarColors) -> BarItem {
    BarItem::new(value, label, max_value, colors)
}
