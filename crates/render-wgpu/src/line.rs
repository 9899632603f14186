use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use wavegrid_common::{Rgba, ViewportSize};
use wavegrid_scene::Surface;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    position: [f32; 2],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    viewport: [f32; 2],
    _pad: [f32; 2],
}

/// Vertex capacity of the preallocated buffer. The default 22x16 lattice
/// strokes 742 edges (1484 vertices) per frame, so this leaves generous
/// headroom for custom grid geometry.
const MAX_VERTICES: usize = 16 * 1024;

/// CPU-side batch of one frame's strokes. This is the `Surface` the backdrop
/// paints into on the desktop host.
#[derive(Debug, Default)]
pub struct LineBatch {
    verts: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
}

impl Surface for LineBatch {
    fn clear(&mut self) {
        // The texture itself is wiped by the render pass clear; the batch
        // only needs to forget last frame's geometry.
        self.verts.clear();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        // Line-list topology is hairline; sub-pixel widths are approximated
        // as coverage folded into alpha.
        let coverage = width.clamp(0.0, 1.0);
        let color = [color.r, color.g, color.b, color.a * coverage];
        self.verts.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.verts.push(LineVertex {
            position: to.to_array(),
            color,
        });
    }
}

/// GPU half of the line backend: pipeline, viewport uniform, and the
/// per-frame vertex upload.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    clear_color: wgpu::Color,
}

impl LineRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line_uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                viewport: [1.0, 1.0],
                _pad: [0.0, 0.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("line_uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("line_uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("line_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("line_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::LINE_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_line"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x2,
                        1 => Float32x4,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_line"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vertex_buffer"),
            size: (MAX_VERTICES * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            // Dashboard body background, #04050a.
            clear_color: wgpu::Color {
                r: 4.0 / 255.0,
                g: 5.0 / 255.0,
                b: 10.0 / 255.0,
                a: 1.0,
            },
        }
    }

    /// Draw one frame: clear the target and stroke the batch.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        viewport: ViewportSize,
        batch: &LineBatch,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                viewport: [viewport.width as f32, viewport.height as f32],
                _pad: [0.0, 0.0],
            }),
        );

        let mut verts = &batch.verts[..];
        if verts.len() > MAX_VERTICES {
            tracing::warn!(
                vertices = verts.len(),
                capacity = MAX_VERTICES,
                "line batch exceeds buffer capacity, truncating"
            );
            // Keep a whole number of segments.
            verts = &verts[..MAX_VERTICES & !1];
        }
        if !verts.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(verts));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("line_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("line_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if !verts.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..verts.len() as u32, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_pushes_a_segment_pair() {
        let mut batch = LineBatch::new();
        batch.stroke_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Rgba::opaque(1.0, 0.0, 0.0),
            1.0,
        );
        assert_eq!(batch.vertex_count(), 2);
        assert_eq!(batch.verts[0].position, [0.0, 0.0]);
        assert_eq!(batch.verts[1].position, [10.0, 0.0]);
    }

    #[test]
    fn clear_empties_the_batch() {
        let mut batch = LineBatch::new();
        batch.stroke_line(Vec2::ZERO, Vec2::ONE, Rgba::opaque(1.0, 1.0, 1.0), 1.0);
        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn subpixel_width_folds_into_alpha() {
        let mut batch = LineBatch::new();
        batch.stroke_line(
            Vec2::ZERO,
            Vec2::ONE,
            Rgba::new(0.0, 1.0, 0.8, 0.15),
            0.5,
        );
        assert_eq!(batch.verts[0].color[3], 0.075);
    }

    #[test]
    fn full_width_leaves_alpha_untouched() {
        let mut batch = LineBatch::new();
        batch.stroke_line(Vec2::ZERO, Vec2::ONE, Rgba::new(0.5, 0.5, 0.5, 0.12), 2.0);
        assert_eq!(batch.verts[0].color[3], 0.12);
    }
}
