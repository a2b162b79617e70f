//! Column layout widget

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

use super::container_helpers;

/// A vertical column layout widget
pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    align_x: Alignment,
    /// Cached child bounds from layout
    child_bounds: Vec<Bounds>,
}

impl<M> Column<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_x: Alignment::Start,
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

    /// Horizontal alignment of children
    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }
}

impl<M> Widget<M> for Column<M> {
    fn has_active_drag(&self) -> bool {
        self.children.iter().any(|c| c.has_active_drag())
    }

    fn layout(&mut self, available: Size) -> Size {
        log::debug!("Column layout: available={:?}", available);

        let inner_width = (available.width - self.padding.horizontal()).max(0.0);
        let mut remaining_height = (available.height - self.padding.vertical()).max(0.0);

        let mut max_width: f32 = 0.0;
        let mut sizes: Vec<Size> = Vec::with_capacity(self.children.len());
        for child in self.children.iter_mut() {
            let size = child.layout(Size::new(inner_width, remaining_height));
            remaining_height = (remaining_height - size.height - self.spacing).max(0.0);
            max_width = max_width.max(size.width);
            sizes.push(size);
        }

        let cross = match self.width {
            Length::Shrink => max_width,
            _ => self.width.resolve(available.width, max_width) - self.padding.horizontal(),
        };

        self.child_bounds.clear();
        let mut y = self.padding.top;
        for size in &sizes {
            let x_offset = self.align_x.align(cross, size.width);
            self.child_bounds.push(Bounds::new(
                self.padding.left + x_offset,
                y,
                size.width,
                size.height,
            ));
            y += size.height + self.spacing;
        }

        let content_height = sizes.iter().map(|s| s.height).sum::<f32>()
            + self.spacing * sizes.len().saturating_sub(1) as f32
            + self.padding.vertical();

        Size::new(
            self.width
                .resolve(available.width, max_width + self.padding.horizontal()),
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

/// Create a column from child elements.
pub fn column<M>(children: Vec<Element<M>>) -> Column<M> {
    Column::new(children)
}
