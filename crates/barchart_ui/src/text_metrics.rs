//! Text measurement utilities.
//!
//! Estimates used during layout; the GPU backend shapes text for real at draw time.

use crate::constants::{CHAR_WIDTH_FACTOR, LINE_HEIGHT_FACTOR};

/// Metrics for a specific font size.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: CHAR_WIDTH_FACTOR,
            line_height_ratio: LINE_HEIGHT_FACTOR,
        }
    }

    /// Estimate the width of a single line of text.
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.char_width_ratio
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }

    /// Estimate dimensions for multi-line text.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        // An empty string still occupies one line
        let line_count = text.lines().count().max(1);
        let width = text
            .lines()
            .map(|line| self.line_width(line))
            .fold(0.0, f32::max);
        (width, line_count as f32 * self.line_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_line() {
        let m = TextMetrics::new(10.0);
        let (w, h) = m.measure("abcd");
        assert!((w - 24.0).abs() < 1e-4);
        assert!((h - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_measure_multi_line_uses_widest() {
        let m = TextMetrics::new(10.0);
        let (w, h) = m.measure("ab\nabcdef\nx");
        assert!((w - 36.0).abs() < 1e-4);
        assert!((h - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_measure_empty_is_one_line() {
        let m = TextMetrics::new(10.0);
        assert_eq!(m.measure("").0, 0.0);
        assert!((m.measure("").1 - 12.0).abs() < 1e-4);
    }
}
