//! GPU presentation of a frame's draw list.
//!
//! Rectangles go through the solid-color pipeline in one batch; text is shaped
//! and rasterized by glyphon and drawn on top.

use std::sync::Arc;

use barchart_gpu::{ColorPipeline, GpuContext, GpuError, RectBatch};
use glyphon::{
    Attrs, Buffer, Cache, Color as GlyphColor, Family, FontSystem, Metrics, Resolution, Shaping,
    SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};
use winit::window::Window;

use crate::constants::LINE_HEIGHT_FACTOR;
use crate::error::UiError;
use crate::layout::Bounds;
use crate::renderer::{Color, DrawCommand, Renderer};

/// Glyph shaping and rasterization state.
struct TextLayer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
}

impl TextLayer {
    fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let renderer =
            TextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            viewport,
            atlas,
            renderer,
        }
    }
}

/// A shaped run waiting to be handed to the text renderer.
struct ShapedText {
    buffer: Buffer,
    left: f32,
    top: f32,
    bounds: TextBounds,
    color: GlyphColor,
}

/// Window surface that presents [`Renderer`] draw lists.
pub struct Surface {
    gpu: GpuContext,
    color_pipeline: ColorPipeline,
    text: TextLayer,
    clear_color: Color,
}

impl Surface {
    pub async fn new(window: Arc<Window>, clear_color: Color) -> Result<Self, GpuError> {
        let gpu = GpuContext::new(window).await?;
        let format = gpu.format();
        let color_pipeline = ColorPipeline::new(&gpu.device, format);
        let text = TextLayer::new(&gpu.device, &gpu.queue, format);
        log::info!(
            "Surface ready: {}x{} {:?}",
            gpu.width(),
            gpu.height(),
            format
        );

        Ok(Self {
            gpu,
            color_pipeline,
            text,
            clear_color,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Draw one frame. Coordinates in `renderer` are logical and are scaled by
    /// `scale_factor` to physical pixels.
    pub fn present(&mut self, renderer: &Renderer, scale_factor: f32) -> Result<(), UiError> {
        let width = self.gpu.width();
        let height = self.gpu.height();
        let screen = Bounds::new(0.0, 0.0, width as f32, height as f32);

        let mut batch = RectBatch::new(width as f32, height as f32);
        let mut shaped = Vec::new();
        for command in renderer.commands() {
            match command {
                DrawCommand::FillRect { bounds, color } => {
                    let b = scale(*bounds, scale_factor);
                    batch.push_rect(b.x, b.y, b.width, b.height, color.to_array());
                }
                DrawCommand::Text {
                    content,
                    x,
                    y,
                    size,
                    color,
                    clip,
                } => {
                    let clip = clip.map_or(screen, |c| scale(c, scale_factor));
                    let text = self.shape(content, (*x, *y), *size, *color, clip, scale_factor);
                    shaped.push(text);
                }
            }
        }
        log::trace!("Frame: {} quads, {} text runs", batch.quad_count(), shaped.len());

        self.text.viewport.update(&self.gpu.queue, Resolution { width, height });
        let areas = shaped.iter().map(|s| TextArea {
            buffer: &s.buffer,
            left: s.left,
            top: s.top,
            scale: 1.0,
            bounds: s.bounds,
            default_color: s.color,
            custom_glyphs: &[],
        });
        self.text.renderer.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &mut self.text.font_system,
            &mut self.text.atlas,
            &self.text.viewport,
            areas,
            &mut self.text.swash_cache,
        )?;

        let frame = match self.gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.resize(width, height);
                return Ok(());
            }
            Err(e) => return Err(GpuError::from(e).into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let c = self.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("UI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: c.r as f64,
                            g: c.g as f64,
                            b: c.b as f64,
                            a: c.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.color_pipeline
                .draw(&self.gpu.device, &mut render_pass, &batch);
            self.text
                .renderer
                .render(&self.text.atlas, &self.text.viewport, &mut render_pass)?;
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        self.text.atlas.trim();
        Ok(())
    }

    fn shape(
        &mut self,
        content: &str,
        (x, y): (f32, f32),
        size: f32,
        color: Color,
        clip: Bounds,
        scale_factor: f32,
    ) -> ShapedText {
        let font_size = size * scale_factor;
        let font_system = &mut self.text.font_system;
        let mut buffer = Buffer::new(
            font_system,
            Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR),
        );
        buffer.set_size(font_system, None, None);
        buffer.set_text(
            font_system,
            content,
            &Attrs::new().family(Family::SansSerif),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(font_system, false);

        let [r, g, b, a] = color.to_rgba8();
        ShapedText {
            buffer,
            left: x * scale_factor,
            top: y * scale_factor,
            bounds: TextBounds {
                left: clip.x.floor() as i32,
                top: clip.y.floor() as i32,
                right: clip.right().ceil() as i32,
                bottom: clip.bottom().ceil() as i32,
            },
            color: GlyphColor::rgba(r, g, b, a),
        }
    }
}

fn scale(bounds: Bounds, factor: f32) -> Bounds {
    Bounds::new(
        bounds.x * factor,
        bounds.y * factor,
        bounds.width * factor,
        bounds.height * factor,
    )
}
