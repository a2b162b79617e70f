//! Horizontally scrolling bar chart.

use std::marker::PhantomData;

use super::bar_item::BarVisual;
use super::colors::{BarColors, ChartColors};
use super::dataset::{Bar, Dataset};
use super::slots::SlotLayout;
use super::state::BarChartState;
use crate::callback::Callback;
use crate::constants::{
    BAR_PADDING_SMALL, DEFAULT_CHART_HEIGHT, DEFAULT_MAX_VISIBLE_COLUMNS, SCROLLBAR_THICKNESS,
};
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::{EventResult, Widget};

/// Narrowest scrollbar thumb, so it stays grabbable by eye on long data.
const MIN_THUMB_WIDTH: f32 = 16.0;

/// Whether `selected` points past the data and must be reset to the first bar.
///
/// Index 0 is never corrected, so an empty dataset does not trigger a
/// pointless `0 -> 0` reselection.
pub fn selection_out_of_range(selected: usize, len: usize) -> bool {
    selected != 0 && selected >= len
}

/// A bar chart over a [`Dataset`].
///
/// Each visible slot is drawn by the caller's renderer, which receives the slot
/// index, the bar and the colors for that slot. Persistent state (measured
/// width, scroll position, fill animations) lives in the host's
/// [`BarChartState`].
pub struct BarChart<M, V, F> {
    dataset: Dataset,
    selected: usize,
    state: BarChartState,
    render_bar: F,
    on_select: Callback<usize, M>,
    colors: ChartColors,
    max_visible: usize,
    fill_width: bool,
    width: Length,
    height: Length,
    /// Slot geometry from the last layout
    slots: Option<SlotLayout>,
    _visual: PhantomData<fn() -> V>,
}

impl<M, V, F> BarChart<M, V, F>
where
    F: Fn(usize, &Bar, BarColors) -> V,
    V: BarVisual,
{
    pub fn new(dataset: &Dataset, selected: usize, state: &BarChartState, render_bar: F) -> Self {
        Self {
            dataset: dataset.clone(),
            selected,
            state: state.clone(),
            render_bar,
            on_select: Callback::none(),
            colors: ChartColors::default(),
            max_visible: DEFAULT_MAX_VISIBLE_COLUMNS,
            fill_width: false,
            width: Length::Fill,
            height: Length::Fixed(DEFAULT_CHART_HEIGHT),
            slots: None,
            _visual: PhantomData,
        }
    }

    /// Called with the index of a newly selected bar.
    pub fn on_select<G>(mut self, f: G) -> Self
    where
        G: Fn(usize) -> M + 'static,
    {
        self.on_select = Callback::new(f);
        self
    }

    pub fn colors(mut self, colors: ChartColors) -> Self {
        self.colors = colors;
        self
    }

    /// How many slots share the measured width.
    pub fn max_visible_columns(mut self, count: usize) -> Self {
        self.max_visible = count;
        self
    }

    /// Let slots grow past the usual cap once the data fills the chart.
    pub fn fill_width(mut self, fill: bool) -> Self {
        self.fill_width = fill;
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

    fn visual(&self, index: usize, bar: &Bar) -> V {
        (self.render_bar)(index, bar, self.colors.for_index(index, self.selected))
    }

    /// Stored scroll offset, clamped to what the current viewport allows.
    fn scroll(&self, slots: &SlotLayout, viewport_width: f32) -> f32 {
        self.state
            .scroll_offset()
            .clamp(0.0, slots.max_scroll(viewport_width))
    }

    fn select(&self, index: usize) -> EventResult<M> {
        self.on_select.call(index).into()
    }

    fn on_tick(&self, now: web_time::Instant, bounds: Bounds) -> EventResult<M> {
        let mut result = EventResult::None;

        let len = self.dataset.len();
        if self.state.take_selection_check(self.dataset.id())
            && selection_out_of_range(self.selected, len)
        {
            log::debug!(
                "Selection {} out of range for {} bars, resetting to 0",
                self.selected,
                len
            );
            result = self.select(0);
        }

        if let Some(slots) = self.slots {
            let scroll = self.scroll(&slots, bounds.width);
            let mut moving = false;
            for index in slots.visible_range(bounds.width, scroll) {
                if let Some(bar) = self.dataset.get(index) {
                    let target = self.visual(index, bar).fill_target();
                    moving |= self.state.drive_fill(index, target, now);
                }
            }
            if moving {
                log::trace!("Chart fills still animating");
                result = result.or(EventResult::Redraw);
            }
        }

        result
    }

    fn on_scroll(&self, delta: (f32, f32), bounds: Bounds) -> EventResult<M> {
        let Some(slots) = self.slots else {
            return EventResult::None;
        };
        let max = slots.max_scroll(bounds.width);
        if max <= 0.0 {
            return EventResult::None;
        }

        // Vertical wheels scroll the row too
        let amount = if delta.0.abs() > delta.1.abs() {
            delta.0
        } else {
            delta.1
        };
        let current = self.scroll(&slots, bounds.width);
        let next = (current - amount).clamp(0.0, max);
        if (next - current).abs() < f32::EPSILON {
            return EventResult::None;
        }
        self.state.set_scroll_offset(next);
        EventResult::Redraw
    }

    fn draw_scrollbar(&self, renderer: &mut Renderer, slots: &SlotLayout, bounds: Bounds) {
        let max = slots.max_scroll(bounds.width);
        if max <= 0.0 {
            return;
        }
        let thumb_width = (bounds.width * bounds.width / slots.content_width())
            .max(MIN_THUMB_WIDTH)
            .min(bounds.width);
        let progress = self.scroll(slots, bounds.width) / max;
        let thumb = Bounds::new(
            bounds.x + progress * (bounds.width - thumb_width),
            bounds.bottom() - SCROLLBAR_THICKNESS,
            thumb_width,
            SCROLLBAR_THICKNESS,
        );
        renderer.fill_rect(thumb, Color::SCROLLBAR_THUMB);
    }
}

impl<M, V, F> Widget<M> for BarChart<M, V, F>
where
    F: Fn(usize, &Bar, BarColors) -> V,
    V: BarVisual,
{
    fn layout(&mut self, available: Size) -> Size {
        let width = self.width.resolve(available.width, available.width);
        let height = self.height.resolve(available.height, DEFAULT_CHART_HEIGHT);

        let measured = self.state.latch_width(self.dataset.id(), width);
        self.state.truncate_fills(self.dataset.len());
        self.slots = SlotLayout::compute(
            measured,
            self.dataset.len(),
            self.max_visible,
            self.fill_width,
        );
        log::debug!(
            "BarChart layout: size={}x{}, measured={}, slots={:?}",
            width,
            height,
            measured,
            self.slots
        );

        Size::new(width, height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let Some(slots) = self.slots else {
            return;
        };

        let scroll = self.scroll(&slots, bounds.width);
        let overflows = slots.max_scroll(bounds.width) > 0.0;
        let slot_height = if overflows {
            (bounds.height - SCROLLBAR_THICKNESS - BAR_PADDING_SMALL).max(0.0)
        } else {
            bounds.height
        };

        renderer.push_clip(bounds);
        for index in slots.visible_range(bounds.width, scroll) {
            let Some(bar) = self.dataset.get(index) else {
                continue;
            };
            let slot = Bounds::new(
                bounds.x + slots.slot_x(index, bounds.width, scroll),
                bounds.y,
                slots.slot_width,
                slot_height,
            );
            self.visual(index, bar)
                .draw(renderer, slot, self.state.fill(index));
        }
        self.draw_scrollbar(renderer, &slots, bounds);
        renderer.pop_clip();
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        match event {
            Event::Tick { now } => self.on_tick(*now, bounds),
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(position.0, position.1) => {
                let Some(slots) = self.slots else {
                    return EventResult::None;
                };
                let scroll = self.scroll(&slots, bounds.width);
                match slots.slot_at(position.0 - bounds.x, bounds.width, scroll) {
                    Some(index) => {
                        log::debug!("BarChart press on slot {}", index);
                        self.select(index)
                    }
                    None => EventResult::None,
                }
            }
            Event::MouseScroll {
                delta, position, ..
            } if bounds.contains(position.0, position.1) => self.on_scroll(*delta, bounds),
            _ => EventResult::None,
        }
    }
}

/// Create a bar chart drawing each visible bar with `render_bar`.
pub fn bar_chart<M, V, F>(
    dataset: &Dataset,
    selected: usize,
    state: &BarChartState,
    render_bar: F,
) -> BarChart<M, V, F>
where
    F: Fn(usize, &Bar, BarColors) -> V,
    V: BarVisual,
{
    BarChart::new(dataset, selected, state, render_bar)
}
