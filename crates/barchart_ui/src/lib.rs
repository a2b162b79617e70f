//! barchart_ui - a small Elm-style UI toolkit on wgpu, with an animated bar chart.
//!
//! The host application owns all state and rebuilds its widget tree from it in
//! [`Application::view`]. Widgets report interaction as messages, which the
//! runner feeds back through [`Application::update`].

mod animation;
mod application;
mod callback;
pub mod chart;
pub mod constants;
mod element;
mod error;
mod event;
mod layout;
mod renderer;
mod state;
mod surface;
mod text_metrics;
mod widget;
mod widgets;

pub use animation::{FillAnimation, Tween};
pub use application::{Application, Settings};
pub use callback::Callback;
pub use element::Element;
pub use error::UiError;
pub use event::{Event, Modifiers, MouseButton};
pub use layout::{Alignment, Bounds, Length, Padding, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::{SliderDragState, SliderState};
pub use surface::Surface;
pub use text_metrics::TextMetrics;
pub use widget::{EventResult, Widget};
pub use widgets::{column, row, slider, text, Column, Row, Slider, Text};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Settings};
    pub use crate::chart::{
        bar_chart, bar_item, Bar, BarChartState, BarColors, BarItem, BarVisual, ChartColors,
        Dataset,
    };
    pub use crate::element::Element;
    pub use crate::layout::{Alignment, Bounds, Length, Padding, Size};
    pub use crate::renderer::Color;
    pub use crate::state::{SliderDragState, SliderState};
    pub use crate::widgets::{column, row, slider, text};
    pub use crate::FillAnimation;
}

/// Run an application until its window is closed.
pub fn run<A: Application + 'static>(app: A, settings: Settings) -> Result<(), UiError> {
    application::run(app, settings)
}
