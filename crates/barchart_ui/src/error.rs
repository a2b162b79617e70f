use barchart_gpu::GpuError;
use thiserror::Error;

/// Failures while driving the window and presenting frames.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    #[error("Failed to prepare text: {0}")]
    TextPrepare(#[from] glyphon::PrepareError),

    #[error("Failed to render text: {0}")]
    TextRender(#[from] glyphon::RenderError),
}
