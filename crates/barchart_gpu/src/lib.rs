//! barchart_gpu - wgpu plumbing for the barchart UI toolkit
//!
//! Owns the device/surface pair and the solid-color pipeline that every
//! rectangle in the UI is drawn with.

pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;

pub use config::GpuConfig;
pub use context::GpuContext;
pub use error::{GpuError, Result};
pub use pipeline::{ColorPipeline, ColorVertex, PipelineBuilder, RectBatch};
