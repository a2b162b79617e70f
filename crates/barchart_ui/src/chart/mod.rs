//! Bar chart: data model, slot geometry, bar visuals and the chart widget.

mod bar_item;
mod colors;
mod dataset;
mod slots;
mod state;
mod widget;

pub use bar_item::{bar_item, BarGeometry, BarItem, BarVisual, ValueLabel};
pub use colors::{BarColors, ChartColors};
pub use dataset::{Bar, Dataset, DatasetId};
pub use slots::SlotLayout;
pub use state::BarChartState;
pub use widget::{bar_chart, selection_out_of_range, BarChart};
