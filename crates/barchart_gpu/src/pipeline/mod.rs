//! Render pipeline abstractions.

pub mod builder;
pub mod color;

pub use builder::PipelineBuilder;
pub use color::{ColorPipeline, ColorVertex, RectBatch};
