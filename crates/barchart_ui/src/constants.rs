//! Centralized constants for barchart_ui
//!
//! Magic numbers shared between widgets live here.

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across most widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in Column/Row
pub const DEFAULT_SPACING: f32 = 8.0;

// =============================================================================
// Slider
// =============================================================================

/// Default slider width when the caller does not give one
pub const SLIDER_DEFAULT_WIDTH: f32 = 200.0;

/// Height of the whole slider hit area
pub const SLIDER_HEIGHT: f32 = 20.0;

/// Thickness of the slider track
pub const SLIDER_TRACK_HEIGHT: f32 = 4.0;

/// Side length of the square thumb
pub const SLIDER_THUMB_SIZE: f32 = 14.0;

// =============================================================================
// Bar chart
// =============================================================================

/// Upper bound on a slot's width unless the chart is told to fill
pub const COLUMN_MAX_WIDTH: f32 = 40.0;

/// How many slots fit in the measured width by default
pub const DEFAULT_MAX_VISIBLE_COLUMNS: usize = 8;

/// Default chart height
pub const DEFAULT_CHART_HEIGHT: f32 = 320.0;

/// Slots materialized beyond each edge of the viewport
pub const SLOT_OVERSCAN: usize = 1;

/// Pixels scrolled per wheel line
pub const SCROLL_LINE_PIXELS: f32 = 20.0;

/// Thickness of the horizontal scrollbar thumb
pub const SCROLLBAR_THICKNESS: f32 = 4.0;

/// Font size of bar value and label text
pub const BAR_FONT_SIZE: f32 = 10.0;

/// Fill fraction from which the value label moves inside the fill
pub const FILL_LABEL_THRESHOLD: f32 = 0.95;

/// Gap between a text line and the bar
pub const BAR_PADDING_SMALL: f32 = 2.0;

/// Horizontal inset of the bar inside its slot
pub const BAR_PADDING_MEDIUM: f32 = 4.0;

/// Width of a standalone bar item
pub const BAR_ITEM_WIDTH: f32 = 40.0;

/// Height of a standalone bar item
pub const BAR_ITEM_HEIGHT: f32 = 240.0;

/// Duration of a fill animation in milliseconds
pub const FILL_ANIMATION_MS: u64 = 600;
