//! Slot geometry for the bar chart.
//!
//! Pure functions of the measured width, the number of bars and the chart
//! options. No widget state lives here.

use std::ops::Range;

use crate::constants::{COLUMN_MAX_WIDTH, SLOT_OVERSCAN};

/// Horizontal placement of bar slots inside a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    /// Number of slots sized to fit the measured width
    pub visible_count: usize,
    /// Width of every slot
    pub slot_width: f32,
    /// Total number of slots
    pub len: usize,
}

impl SlotLayout {
    /// Compute slot geometry, or `None` when there is nothing to lay out.
    ///
    /// `measured_width` is divided between `min(max_visible, len)` slots. The
    /// result is capped at [`COLUMN_MAX_WIDTH`] unless `fill_width` is set and
    /// the data has at least `max_visible` bars.
    pub fn compute(
        measured_width: f32,
        len: usize,
        max_visible: usize,
        fill_width: bool,
    ) -> Option<SlotLayout> {
        if len == 0 || max_visible == 0 {
            return None;
        }

        let visible_count = max_visible.min(len);
        let candidate = measured_width.max(0.0) / visible_count as f32;
        let slot_width = if fill_width && len >= max_visible {
            candidate
        } else {
            candidate.min(COLUMN_MAX_WIDTH)
        };

        Some(SlotLayout {
            visible_count,
            slot_width,
            len,
        })
    }

    pub fn content_width(&self) -> f32 {
        self.slot_width * self.len as f32
    }

    /// Offset that centers content narrower than the viewport.
    pub fn leading(&self, viewport_width: f32) -> f32 {
        ((viewport_width - self.content_width()) / 2.0).max(0.0)
    }

    pub fn max_scroll(&self, viewport_width: f32) -> f32 {
        (self.content_width() - viewport_width).max(0.0)
    }

    /// Left edge of slot `index` relative to the viewport.
    pub fn slot_x(&self, index: usize, viewport_width: f32, scroll: f32) -> f32 {
        self.leading(viewport_width) + index as f32 * self.slot_width - scroll
    }

    /// Slot under a viewport-relative x coordinate.
    pub fn slot_at(&self, x: f32, viewport_width: f32, scroll: f32) -> Option<usize> {
        if self.slot_width <= 0.0 {
            return None;
        }
        let content_x = x - self.leading(viewport_width) + scroll;
        if content_x < 0.0 {
            return None;
        }
        let index = (content_x / self.slot_width).floor() as usize;
        (index < self.len).then_some(index)
    }

    /// Slots intersecting the viewport, widened by the overscan on each side.
    pub fn visible_range(&self, viewport_width: f32, scroll: f32) -> Range<usize> {
        if self.slot_width <= 0.0 {
            return 0..0;
        }
        let leading = self.leading(viewport_width);
        let first = ((scroll - leading) / self.slot_width).floor().max(0.0) as usize;
        let last = ((scroll - leading + viewport_width) / self.slot_width)
            .ceil()
            .max(0.0) as usize;

        let start = first.saturating_sub(SLOT_OVERSCAN).min(self.len);
        let end = last.saturating_add(SLOT_OVERSCAN).min(self.len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_or_zero_max_is_none() {
        assert!(SlotLayout::compute(300.0, 0, 8, false).is_none());
        assert!(SlotLayout::compute(300.0, 5, 0, true).is_none());
    }

    #[test]
    fn test_three_bars_capped() {
        let l = SlotLayout::compute(240.0, 3, 8, false).unwrap();
        assert_eq!(l.visible_count, 3);
        assert_eq!(l.slot_width, 40.0);
        assert_eq!(l.content_width(), 120.0);
        assert_eq!(l.leading(240.0), 60.0);
    }

    #[test]
    fn test_fill_width_uncapped() {
        let l = SlotLayout::compute(400.0, 10, 8, true).unwrap();
        assert_eq!(l.visible_count, 8);
        assert_eq!(l.slot_width, 50.0);
        assert_eq!(l.max_scroll(400.0), 100.0);
    }

    #[test]
    fn test_cap_applies_without_fill_width() {
        let l = SlotLayout::compute(400.0, 10, 8, false).unwrap();
        assert_eq!(l.visible_count, 8);
        assert_eq!(l.slot_width, 40.0);
        assert_eq!(l.max_scroll(400.0), 0.0);
    }

    #[test]
    fn test_fill_width_ignored_below_max() {
        let l = SlotLayout::compute(400.0, 5, 8, true).unwrap();
        assert_eq!(l.slot_width, 40.0);
    }

    #[test]
    fn test_cap_holds_for_any_width_below_max() {
        for w in [10.0, 80.0, 240.0, 1000.0, 5000.0] {
            for len in 1..8 {
                let l = SlotLayout::compute(w, len, 8, true).unwrap();
                assert!(l.slot_width <= COLUMN_MAX_WIDTH, "w={w} len={len}");
            }
        }
    }

    #[test]
    fn test_slot_at_every_index() {
        let l = SlotLayout::compute(400.0, 10, 8, true).unwrap();
        for i in 0..8 {
            let x = i as f32 * 50.0 + 25.0;
            assert_eq!(l.slot_at(x, 400.0, 0.0), Some(i));
        }
        assert_eq!(l.slot_at(25.0, 400.0, 100.0), Some(2));
    }

    #[test]
    fn test_slot_at_outside_centered_content() {
        let l = SlotLayout::compute(240.0, 3, 8, false).unwrap();
        assert_eq!(l.slot_at(10.0, 240.0, 0.0), None);
        assert_eq!(l.slot_at(60.0, 240.0, 0.0), Some(0));
        assert_eq!(l.slot_at(179.0, 240.0, 0.0), Some(2));
        assert_eq!(l.slot_at(185.0, 240.0, 0.0), None);
    }

    #[test]
    fn test_visible_range_with_overscan() {
        let l = SlotLayout::compute(400.0, 100, 8, true).unwrap();
        assert_eq!(l.visible_range(400.0, 0.0), 0..9);
        assert_eq!(l.visible_range(400.0, 500.0), 9..19);
        assert_eq!(l.visible_range(400.0, l.max_scroll(400.0)), 91..100);
    }
}
