//! Row layout widget

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

use super::container_helpers;

/// A horizontal row layout widget
pub struct Row<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    align_y: Alignment,
    /// Cached child bounds from layout
    child_bounds: Vec<Bounds>,
}

impl<M> Row<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_y: Alignment::Start,
            child_bounds: Vec::new(),
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
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

    /// Vertical alignment of children
    pub fn align_y(mut self, align: Alignment) -> Self {
        self.align_y = align;
        self
    }
}

impl<M> Widget<M> for Row<M> {
    fn has_active_drag(&self) -> bool {
        self.children.iter().any(|c| c.has_active_drag())
    }

    fn layout(&mut self, available: Size) -> Size {
        log::debug!("Row layout: available={:?}", available);

        let inner = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );

        // A child that takes the whole width it is offered is a fill child; it
        // shares whatever the fixed children leave over.
        let mut fixed_width = 0.0;
        let mut max_height: f32 = 0.0;
        let mut child_widths: Vec<f32> = Vec::with_capacity(self.children.len());
        let mut fill_indices: Vec<usize> = Vec::new();

        for (i, child) in self.children.iter_mut().enumerate() {
            let child_size = child.layout(inner);
            max_height = max_height.max(child_size.height);
            if inner.width > 0.0 && child_size.width >= inner.width - 1.0 {
                fill_indices.push(i);
                child_widths.push(0.0);
            } else {
                fixed_width += child_size.width;
                child_widths.push(child_size.width);
            }
        }

        if !self.children.is_empty() {
            fixed_width += self.spacing * (self.children.len() - 1) as f32;
        }

        if !fill_indices.is_empty() {
            let share = (inner.width - fixed_width).max(0.0) / fill_indices.len() as f32;
            for &idx in &fill_indices {
                child_widths[idx] = share;
                let child_size = self.children[idx].layout(Size::new(share, inner.height));
                max_height = max_height.max(child_size.height);
                log::debug!("  Row child {} FILL allocated: width={}", idx, share);
            }
        }

        self.child_bounds.clear();
        let mut x = self.padding.left;
        for (child, width) in self.children.iter().zip(child_widths.iter()) {
            let child_height = child.cached_size().height;
            let y_offset = self.align_y.align(max_height, child_height);
            self.child_bounds.push(Bounds::new(
                x,
                self.padding.top + y_offset,
                *width,
                child_height,
            ));
            x += width + self.spacing;
        }

        let content_width = child_widths.iter().sum::<f32>()
            + self.spacing * self.children.len().saturating_sub(1) as f32
            + self.padding.horizontal();
        let content_height = max_height + self.padding.vertical();

        Size::new(
            self.width.resolve(available.width, content_width),
            self.height.resolve(available.height, content_height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        container_helpers::draw_children(&self.children, &self.child_bounds, renderer, bounds);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        container_helpers::dispatch_event_to_children(
            &mut self.children,
            &self.child_bounds,
            event,
            bounds,
        )
    }
}

/// Create a row from child elements.
pub fn row<M>(children: Vec<Element<M>>) -> Row<M> {
    Row::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SliderState;
    use crate::widgets::slider::slider;
    use crate::widgets::text::text;

    #[test]
    fn test_fill_child_takes_remaining_width() {
        let mut r: Row<()> = row(vec![
            Element::new(slider(0.0, 1.0, &SliderState::default()).width(Length::Fill)),
            Element::new(text("20").width(20.0)),
        ])
        .spacing(8.0)
        .width(Length::Fill);

        let size = r.layout(Size::new(300.0, 100.0));
        assert_eq!(size.width, 300.0);
        assert_eq!(r.child_bounds[0].width, 272.0);
        assert_eq!(r.child_bounds[1].x, 280.0);
    }

    #[test]
    fn test_shrink_row_sums_children() {
        let mut r: Row<()> = row(vec![
            Element::new(text("ab").size(10.0)),
            Element::new(text("abcd").size(10.0)),
        ])
        .spacing(5.0);
        let size = r.layout(Size::new(300.0, 100.0));
        assert!((size.width - (12.0 + 5.0 + 24.0)).abs() < 1e-4);
    }

    #[test]
    fn test_center_alignment_offsets_short_child() {
        let mut r: Row<()> = row(vec![
            Element::new(slider(0.0, 1.0, &SliderState::default())),
            Element::new(text("x").size(10.0)),
        ])
        .align_y(Alignment::Center);
        r.layout(Size::new(400.0, 100.0));
        // Slider is 20 high, text 12
        assert!((r.child_bounds[1].y - 4.0).abs() < 1e-4);
    }
}
