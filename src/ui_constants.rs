//! UI constants for the demo window.

/// Text size constants.
pub mod text {
    /// Body text and labels
    pub const BODY: f32 = 14.0;
}

/// Spacing and padding.
pub mod padding {
    /// Gap between stacked sections
    pub const SECTION: f32 = 16.0;
    /// Outer padding of the window content (top, left and right)
    pub const OUTER: f32 = 16.0;
}

/// Window sizing.
pub mod window {
    /// Default window size in logical pixels
    pub const DEFAULT_SIZE: (u32, u32) = (800, 600);
    /// Minimum window size
    pub const MIN_SIZE: (u32, u32) = (320, 480);
    /// Window title
    pub const TITLE: &str = "Chart Compose Demo";
}

/// Column-count and progress controls.
pub mod controls {
    pub const MIN_COLUMNS: usize = 1;
    pub const MAX_COLUMNS: usize = 20;
    pub const DEFAULT_COLUMNS: usize = 8;
    /// Width of the label showing the current column count
    pub const COUNT_LABEL_WIDTH: f32 = 20.0;
    /// Upper end of the single-bar progress slider
    pub const PROGRESS_MAX: u64 = 100;
}

/// Chart presentation.
pub mod chart {
    pub const HEIGHT: f32 = 320.0;
    pub const SINGLE_BAR_WIDTH: f32 = 40.0;
    pub const SINGLE_BAR_HEIGHT: f32 = 240.0;
    pub const SINGLE_BAR_LABEL: &str = "Col 1";
}
