use std::num::NonZeroU64;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::coords::LogicalCanvas;
use crate::paint::Color;
use crate::tess::Vertex;

/// The single pipeline a scene renders with.
///
/// One fixed-size vertex buffer, one canvas uniform, one shader pair. GPU
/// objects are created lazily and rebuilt only when the surface format
/// changes.
pub struct ShapePipeline {
    canvas: LogicalCanvas,
    vbo_size: u64,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    canvas_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
}

impl ShapePipeline {
    /// `capacity_bytes` is rounded down to whole vertices.
    pub fn new(canvas: LogicalCanvas, capacity_bytes: usize) -> Self {
        let whole = capacity_bytes - capacity_bytes % Vertex::SIZE;
        Self {
            canvas,
            vbo_size: whole as u64,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            canvas_ubo: None,
            vbo: None,
        }
    }

    pub fn canvas(&self) -> LogicalCanvas {
        self.canvas
    }

    pub fn capacity_bytes(&self) -> usize {
        self.vbo_size as usize
    }

    /// Creates whatever GPU objects are missing for `format`.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) {
        self.ensure_pipeline(device, format);
        self.ensure_bindings(device, queue);
        self.ensure_vertex_buffer(device);
    }

    /// Writes packed vertices at offset 0.
    pub fn write_vertices(&self, queue: &wgpu::Queue, bytes: &[u8]) -> Result<()> {
        let Some(vbo) = self.vbo.as_ref() else {
            anyhow::bail!("vertex buffer not created; call prepare first");
        };
        anyhow::ensure!(
            bytes.len() as u64 <= self.vbo_size,
            "{} bytes do not fit the {} byte vertex buffer",
            bytes.len(),
            self.vbo_size
        );
        if !bytes.is_empty() {
            queue.write_buffer(vbo, 0, bytes);
        }
        Ok(())
    }

    /// Records the frame's only render pass: clear, then one draw over
    /// `vertex_count` vertices.
    pub fn record(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: Color,
        vertex_count: u32,
    ) -> Result<()> {
        let (Some(pipeline), Some(bind_group), Some(vbo)) =
            (self.pipeline.as_ref(), self.bind_group.as_ref(), self.vbo.as_ref())
        else {
            anyhow::bail!("shape pipeline not prepared");
        };

        let [r, g, b, a] = clear.to_unit();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trifan shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
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

        if vertex_count > 0 {
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.set_vertex_buffer(0, vbo.slice(..));
            rpass.draw(0..vertex_count, 0..1);
        }
        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, device: &wgpu::Device, format: wgpu::TextureFormat) {
        if self.pipeline_format == Some(format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building shape pipeline for {format:?}");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trifan shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shapes.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("trifan shape bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<CanvasUniform>() as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trifan shape pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trifan shape pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Triangles are emitted verbatim, so either winding must draw.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.canvas_ubo = None;
    }

    fn ensure_bindings(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.bind_group.is_some() && self.canvas_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let canvas_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trifan canvas ubo"),
            size: std::mem::size_of::<CanvasUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&canvas_ubo, 0, bytemuck::bytes_of(&CanvasUniform::new(self.canvas)));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("trifan shape bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: canvas_ubo.as_entire_binding(),
            }],
        });

        self.canvas_ubo = Some(canvas_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_buffer(&mut self, device: &wgpu::Device) {
        if self.vbo.is_some() {
            return;
        }
        self.vbo = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trifan shape vbo"),
            size: self.vbo_size.max(Vertex::SIZE as u64),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Canvas uniform (16 bytes): half extent, padded to a vec4.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CanvasUniform {
    half_extent: [f32; 2],
    _pad: [f32; 2],
}

impl CanvasUniform {
    fn new(canvas: LogicalCanvas) -> Self {
        let half = canvas.half_extent();
        Self {
            half_extent: [half.x, half.y],
            _pad: [0.0; 2],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x2, // pos
    1 => Unorm8x4   // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: Vertex::SIZE as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_uniform_is_half_extent() {
        let u = CanvasUniform::new(LogicalCanvas::default());
        assert_eq!(u.half_extent, [300.0, 200.0]);
        assert_eq!(std::mem::size_of::<CanvasUniform>(), 16);
    }

    #[test]
    fn vertex_layout_matches_record() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Unorm8x4);
    }

    #[test]
    fn capacity_rounds_to_whole_vertices() {
        let p = ShapePipeline::new(LogicalCanvas::default(), 65536);
        assert_eq!(p.capacity_bytes(), 65532);
    }
}
