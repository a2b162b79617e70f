//! Application message types.

use barchart_ui::SliderState;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// Column-count slider moved
    ColumnCountChanged(SliderState),
    /// Single-bar progress slider moved
    ProgressChanged(SliderState),
    /// A bar was selected, or the chart reset an out-of-range selection
    BarSelected(usize),
}
