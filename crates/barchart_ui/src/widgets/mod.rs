// Widget implementations

mod column;
pub(crate) mod container_helpers;
mod row;
mod slider;
mod text;

pub use column::{column, Column};
pub use row::{row, Row};
pub use slider::{slider, Slider};
pub use text::{text, Text};
