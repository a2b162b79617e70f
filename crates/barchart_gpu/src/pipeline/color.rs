//! Solid-color rectangle pipeline.
//!
//! All rectangles of a frame are collected into one [`RectBatch`] and
//! submitted with a single draw call.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::PipelineBuilder;

/// Vertex for colored shapes (no texture), position in NDC.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ColorVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Pipeline for rendering solid color rectangles.
pub struct ColorPipeline {
    pub render_pipeline: wgpu::RenderPipeline,
}

impl ColorPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Color Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/color.wgsl").into()),
        });

        let render_pipeline = PipelineBuilder::new(device, format, &shader)
            .with_label("Color Render Pipeline")
            .with_vertex_buffer(ColorVertex::desc())
            .with_blend_state(wgpu::BlendState::ALPHA_BLENDING)
            .build();

        Self { render_pipeline }
    }

    /// Record the batch into `pass`. Empty batches draw nothing.
    pub fn draw(&self, device: &wgpu::Device, pass: &mut wgpu::RenderPass<'_>, batch: &RectBatch) {
        if batch.is_empty() {
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rect Batch Vertex Buffer"),
            contents: bytemuck::cast_slice(&batch.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rect Batch Index Buffer"),
            contents: bytemuck::cast_slice(&batch.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        pass.set_pipeline(&self.render_pipeline);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..batch.indices.len() as u32, 0, 0..1);
    }
}

/// Quads in screen pixels, converted to NDC on insertion.
#[derive(Debug, Clone)]
pub struct RectBatch {
    viewport_width: f32,
    viewport_height: f32,
    vertices: Vec<ColorVertex>,
    indices: Vec<u32>,
}

impl RectBatch {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width: viewport_width.max(1.0),
            viewport_height: viewport_height.max(1.0),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Add a filled rectangle. Degenerate rectangles are skipped.
    pub fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let x1 = (x / self.viewport_width) * 2.0 - 1.0;
        let y1 = 1.0 - (y / self.viewport_height) * 2.0;
        let x2 = ((x + width) / self.viewport_width) * 2.0 - 1.0;
        let y2 = 1.0 - ((y + height) / self.viewport_height) * 2.0;

        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            ColorVertex { position: [x1, y1], color },
            ColorVertex { position: [x2, y1], color },
            ColorVertex { position: [x2, y2], color },
            ColorVertex { position: [x1, y2], color },
        ]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of quads in the batch.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_viewport_rect_maps_to_ndc_corners() {
        let mut batch = RectBatch::new(200.0, 100.0);
        batch.push_rect(0.0, 0.0, 200.0, 100.0, [1.0; 4]);

        let v = &batch.vertices;
        assert_eq!(v[0].position, [-1.0, 1.0]);
        assert_eq!(v[2].position, [1.0, -1.0]);
    }

    #[test]
    fn test_degenerate_rect_skipped() {
        let mut batch = RectBatch::new(100.0, 100.0);
        batch.push_rect(10.0, 10.0, 0.0, 5.0, [1.0; 4]);
        batch.push_rect(10.0, 10.0, 5.0, -1.0, [1.0; 4]);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_rects_are_one_quad_each() {
        let mut batch = RectBatch::new(100.0, 100.0);
        batch.push_rect(10.0, 10.0, 50.0, 20.0, [0.0, 0.0, 0.0, 1.0]);
        batch.push_rect(10.0, 40.0, 50.0, 20.0, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.quad_count(), 2);
    }

    #[test]
    fn test_indices_offset_per_quad() {
        let mut batch = RectBatch::new(100.0, 100.0);
        batch.push_rect(0.0, 0.0, 10.0, 10.0, [1.0; 4]);
        batch.push_rect(20.0, 0.0, 10.0, 10.0, [1.0; 4]);
        assert_eq!(&batch.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }
}
