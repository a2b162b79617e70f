//! Chart memory that outlives a single frame.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::Instant;

use super::dataset::DatasetId;
use crate::animation::Tween;

#[derive(Debug, Default)]
struct ChartMemory {
    measured_width: Option<f32>,
    measured_for: Option<DatasetId>,
    checked_for: Option<DatasetId>,
    scroll_offset: f32,
    fills: Vec<Tween>,
}

/// Host-owned handle to a bar chart's persistent state.
///
/// Keep one per chart in the application model and pass a reference into
/// [`bar_chart`](super::bar_chart) on every view. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct BarChartState {
    inner: Rc<RefCell<ChartMemory>>,
}

impl BarChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width latched for the current dataset, `None` before the first layout.
    pub fn measured_width(&self) -> Option<f32> {
        self.inner.borrow().measured_width
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    /// Latch the chart width for `dataset`, returning the width to lay out with.
    ///
    /// The first call after a dataset change stores `width` and resets the
    /// scroll position; later calls return the stored width.
    pub(crate) fn latch_width(&self, dataset: DatasetId, width: f32) -> f32 {
        let mut mem = self.inner.borrow_mut();
        if mem.measured_for != Some(dataset) {
            mem.measured_for = Some(dataset);
            mem.measured_width = None;
            mem.scroll_offset = 0.0;
        }
        match mem.measured_width {
            Some(w) => w,
            None => {
                log::debug!("Chart width latched at {} for {:?}", width, dataset);
                mem.measured_width = Some(width);
                width
            }
        }
    }

    /// True exactly once per dataset identity.
    pub(crate) fn take_selection_check(&self, dataset: DatasetId) -> bool {
        let mut mem = self.inner.borrow_mut();
        if mem.checked_for == Some(dataset) {
            false
        } else {
            mem.checked_for = Some(dataset);
            true
        }
    }

    pub(crate) fn set_scroll_offset(&self, offset: f32) {
        self.inner.borrow_mut().scroll_offset = offset;
    }

    /// Current fill of slot `index`; slots never animated read as empty.
    pub(crate) fn fill(&self, index: usize) -> f32 {
        self.inner
            .borrow()
            .fills
            .get(index)
            .map_or(0.0, Tween::value)
    }

    /// Retarget and advance the fill of slot `index`. Returns `true` while moving.
    pub(crate) fn drive_fill(&self, index: usize, target: f32, now: Instant) -> bool {
        let mut mem = self.inner.borrow_mut();
        if mem.fills.len() <= index {
            mem.fills.resize_with(index + 1, Tween::default);
        }
        let tween = &mut mem.fills[index];
        tween.retarget(target, now);
        tween.advance(now)
    }

    /// Drop fill animations for slots past `len`.
    pub(crate) fn truncate_fills(&self, len: usize) {
        self.inner.borrow_mut().fills.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::dataset::{Bar, Dataset};

    #[test]
    fn test_latch_is_one_shot_per_dataset() {
        let state = BarChartState::new();
        let ds = Dataset::new([Bar::new(1, "a")]);
        assert_eq!(state.latch_width(ds.id(), 300.0), 300.0);
        assert_eq!(state.latch_width(ds.id(), 500.0), 300.0);

        let next = Dataset::new([Bar::new(1, "a")]);
        assert_eq!(state.latch_width(next.id(), 500.0), 500.0);
        assert_eq!(state.measured_width(), Some(500.0));
    }

    #[test]
    fn test_dataset_change_resets_scroll() {
        let state = BarChartState::new();
        let ds = Dataset::new([Bar::new(1, "a")]);
        state.latch_width(ds.id(), 100.0);
        state.set_scroll_offset(40.0);
        state.latch_width(ds.id(), 100.0);
        assert_eq!(state.scroll_offset(), 40.0);

        state.latch_width(Dataset::empty().id(), 100.0);
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn test_selection_check_once() {
        let state = BarChartState::new();
        let ds = Dataset::empty();
        assert!(state.take_selection_check(ds.id()));
        assert!(!state.take_selection_check(ds.id()));
    }

    #[test]
    fn test_new_slots_start_empty() {
        let state = BarChartState::new();
        assert_eq!(state.fill(3), 0.0);
        assert!(state.drive_fill(3, 1.0, Instant::now()));
        assert_eq!(state.fill(0), 0.0);
    }
}
