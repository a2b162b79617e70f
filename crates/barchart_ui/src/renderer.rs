//! Frame draw list.
//!
//! Widgets record rectangles and text into a [`Renderer`]; the GPU [`Surface`]
//! consumes the list once per frame. Recording is independent of the GPU so the
//! output of any widget can be inspected directly.
//!
//! [`Surface`]: crate::surface::Surface

use serde::{Deserialize, Serialize};

use crate::layout::Bounds;

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0x88 as f32 / 255.0, 0x88 as f32 / 255.0, 0x88 as f32 / 255.0);
    pub const LIGHT_GRAY: Color =
        Color::rgb(0xCC as f32 / 255.0, 0xCC as f32 / 255.0, 0xCC as f32 / 255.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    // UI palette
    pub const TEXT_PRIMARY: Color = Color::rgb(0.9, 0.9, 0.9);
    pub const SLIDER_TRACK: Color = Color::rgb(0.25, 0.25, 0.3);
    pub const SLIDER_FILL: Color = Color::rgb(0.4, 0.6, 1.0);
    pub const SLIDER_THUMB: Color = Color::rgb(0.85, 0.85, 0.9);
    pub const SLIDER_THUMB_ACTIVE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const SCROLLBAR_THUMB: Color = Color::new(0.6, 0.6, 0.65, 0.6);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit channels, rounded and clamped.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle, already clipped to the active clip region.
    FillRect { bounds: Bounds, color: Color },
    /// A run of text with its top-left corner at `(x, y)`.
    Text {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        clip: Option<Bounds>,
    },
}

/// Records draw commands for one frame.
#[derive(Debug, Default)]
pub struct Renderer {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Bounds>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clip region, if any. Nested clips are already intersected.
    pub fn clip(&self) -> Option<Bounds> {
        self.clip_stack.last().copied()
    }

    /// Restrict subsequent drawing to `bounds` (intersected with the current clip).
    pub fn push_clip(&mut self, bounds: Bounds) {
        let clip = match self.clip() {
            Some(current) => current
                .intersect(&bounds)
                .unwrap_or(Bounds::new(bounds.x, bounds.y, 0.0, 0.0)),
            None => bounds,
        };
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::warn!("pop_clip called with an empty clip stack");
        }
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let visible = match self.clip() {
            Some(clip) => match bounds.intersect(&clip) {
                Some(visible) => visible,
                None => return,
            },
            None => bounds,
        };
        self.commands.push(DrawCommand::FillRect {
            bounds: visible,
            color,
        });
    }

    pub fn text(&mut self, content: &str, x: f32, y: f32, size: f32, color: Color) {
        if content.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
            size,
            color,
            clip: self.clip(),
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Filled rectangles in recording order.
    pub fn rects(&self) -> impl Iterator<Item = (&Bounds, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { bounds, color } => Some((bounds, color)),
            _ => None,
        })
    }

    /// Text runs in recording order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clipped() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 50.0, 50.0));
        r.fill_rect(Bounds::new(40.0, 40.0, 20.0, 20.0), Color::WHITE);
        r.fill_rect(Bounds::new(60.0, 60.0, 10.0, 10.0), Color::WHITE);
        r.pop_clip();

        let rects: Vec<_> = r.rects().collect();
        assert_eq!(rects.len(), 1);
        assert_eq!(*rects[0].0, Bounds::new(40.0, 40.0, 10.0, 10.0));
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 100.0, 100.0));
        r.push_clip(Bounds::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(r.clip(), Some(Bounds::new(50.0, 50.0, 50.0, 50.0)));
        r.pop_clip();
        assert_eq!(r.clip(), Some(Bounds::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn test_degenerate_rect_skipped() {
        let mut r = Renderer::new();
        r.fill_rect(Bounds::new(0.0, 0.0, 0.0, 10.0), Color::BLACK);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_text_carries_clip() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 10.0, 10.0));
        r.text("hi", 1.0, 1.0, 10.0, Color::WHITE);
        match &r.commands()[0] {
            DrawCommand::Text { clip, .. } => {
                assert_eq!(*clip, Some(Bounds::new(0.0, 0.0, 10.0, 10.0)))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_every_command_respects_clip() {
        let clip = Bounds::new(10.0, 10.0, 40.0, 40.0);
        let mut r = Renderer::new();
        r.push_clip(clip);
        r.fill_rect(Bounds::new(0.0, 0.0, 100.0, 20.0), Color::WHITE);
        r.fill_rect(Bounds::new(30.0, 30.0, 5.0, 5.0), Color::WHITE);
        r.text("label", 0.0, 0.0, 10.0, Color::WHITE);
        r.pop_clip();

        assert_eq!(r.commands().len(), 3);
        for command in r.commands() {
            match command {
                DrawCommand::FillRect { bounds, .. } => {
                    assert_eq!(bounds.intersect(&clip), Some(*bounds));
                }
                DrawCommand::Text { clip: text_clip, .. } => {
                    assert_eq!(*text_clip, Some(clip));
                }
            }
        }
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::MAGENTA.to_rgba8(), [255, 0, 255, 255]);
        assert_eq!(Color::GRAY.to_rgba8(), [0x88, 0x88, 0x88, 255]);
    }
}
