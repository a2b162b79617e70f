//! barchart - desktop demo of an animated, scrollable bar chart widget.

pub mod app;
pub mod config;
pub mod data;
pub mod message;
pub mod theme;
pub mod ui_constants;

pub use app::DemoApp;
pub use config::{ConfigError, DemoConfig};
pub use message::Message;
