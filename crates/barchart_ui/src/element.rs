//! Boxed widgets as they sit in the view tree.
//!
//! `view()` rebuilds the tree every frame, so an [`Element`] only remembers the
//! size its widget asked for in the current layout pass. Parents read it back
//! with [`Element::cached_size`] when placing children.

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// A widget of any concrete type producing messages of type `M`.
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
    size: Size,
}

impl<M> Element<M> {
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
            size: Size::ZERO,
        }
    }

    /// Lay the widget out and remember the size it reported.
    pub fn layout(&mut self, available: Size) -> Size {
        self.size = self.widget.layout(available);
        self.size
    }

    pub fn cached_size(&self) -> Size {
        self.size
    }

    /// Draw into `bounds`. Zero-area slots (a collapsed fill child, an
    /// unmeasured chart) record nothing.
    pub fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        self.widget.draw(renderer, bounds);
    }

    pub fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        self.widget.on_event(event, bounds)
    }

    pub fn has_active_drag(&self) -> bool {
        self.widget.has_active_drag()
    }
}

impl<M, W: Widget<M> + 'static> From<W> for Element<M> {
    fn from(widget: W) -> Self {
        Element::new(widget)
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
