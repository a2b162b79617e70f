//! Fluent construction of 2D render pipelines.

/// Builder for wgpu render pipelines with 2D defaults
/// (triangle list, no culling, no depth, single sample).
///
/// # Example
/// ```ignore
/// let pipeline = PipelineBuilder::new(&device, format, &shader)
///     .with_label("Color Render Pipeline")
///     .with_vertex_buffer(ColorVertex::desc())
///     .with_blend_state(wgpu::BlendState::ALPHA_BLENDING)
///     .build();
/// ```
pub struct PipelineBuilder<'a> {
    device: &'a wgpu::Device,
    format: wgpu::TextureFormat,
    shader: &'a wgpu::ShaderModule,
    label: Option<&'a str>,
    vs_entry: &'a str,
    fs_entry: &'a str,
    vertex_buffers: Vec<wgpu::VertexBufferLayout<'a>>,
    blend_state: Option<wgpu::BlendState>,
}

impl<'a> PipelineBuilder<'a> {
    /// Start a pipeline for `shader` rendering into `format`.
    pub fn new(
        device: &'a wgpu::Device,
        format: wgpu::TextureFormat,
        shader: &'a wgpu::ShaderModule,
    ) -> Self {
        Self {
            device,
            format,
            shader,
            label: None,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            vertex_buffers: Vec::new(),
            blend_state: None,
        }
    }

    /// Set the pipeline label for debugging.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Override the shader entry points (default `vs_main` / `fs_main`).
    pub fn with_entry_points(mut self, vs_entry: &'a str, fs_entry: &'a str) -> Self {
        self.vs_entry = vs_entry;
        self.fs_entry = fs_entry;
        self
    }

    /// Add a vertex buffer layout.
    pub fn with_vertex_buffer(mut self, layout: wgpu::VertexBufferLayout<'a>) -> Self {
        self.vertex_buffers.push(layout);
        self
    }

    /// Set the blend state (default: REPLACE).
    pub fn with_blend_state(mut self, blend: wgpu::BlendState) -> Self {
        self.blend_state = Some(blend);
        self
    }

    /// Build the render pipeline.
    pub fn build(self) -> wgpu::RenderPipeline {
        let layout_label = self.label.map(|l| format!("{} Layout", l));
        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: layout_label.as_deref(),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        self.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: self.label,
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: self.shader,
                    entry_point: Some(self.vs_entry),
                    buffers: &self.vertex_buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: self.shader,
                    entry_point: Some(self.fs_entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.format,
                        blend: self.blend_state,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview_mask: None,
                cache: None,
            })
    }
}
