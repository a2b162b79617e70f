//! Text widget

use crate::constants::DEFAULT_FONT_SIZE;
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;

/// A text display widget. Multi-line content is drawn one line at a time.
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    width: Length,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::TEXT_PRIMARY,
            width: Length::Shrink,
        }
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let (width, height) = TextMetrics::new(self.size).measure(&self.content);
        Size::new(self.width.resolve(available.width, width), height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let line_height = TextMetrics::new(self.size).line_height();
        for (i, line) in self.content.lines().enumerate() {
            renderer.text(
                line,
                bounds.x,
                bounds.y + i as f32 * line_height,
                self.size,
                self.color,
            );
        }
    }
}

/// Create a text widget.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
