//! HUD overlay pass: a fixed center crosshair and a moving gaze marker,
//! drawn directly in clip space on top of the scene.

use wgpu::util::DeviceExt;

use crate::gaze::GazePoint;
use crate::gpu::render_context::RenderContext;

const CROSSHAIR_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const MARKER_COLOR: [f32; 3] = [1.0, 0.78, 0.0];
/// Crosshair arm half-length in NDC (horizontal; vertical is
/// aspect-corrected).
const CROSSHAIR_SIZE: f32 = 0.02;
/// Gaze marker diamond half-size in NDC.
const MARKER_SIZE: f32 = 0.015;

const CROSSHAIR_VERTEX_COUNT: u32 = 4;
const MARKER_VERTEX_COUNT: u32 = 8;

/// Clip-space vertex for HUD lines.
/// Must match the WGSL VertexInput struct layout exactly.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct HudVertex {
    position: [f32; 2],
    color: [f32; 3],
}

const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> =
    wgpu::VertexBufferLayout {
        array_stride: size_of::<HudVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x3,
        ],
    };

/// Renders the crosshair and gaze marker overlay.
pub struct HudRenderer {
    pipeline: wgpu::RenderPipeline,
    crosshair_buffer: wgpu::Buffer,
    marker_buffer: wgpu::Buffer,
    aspect: f32,
}

impl HudRenderer {
    /// Build the overlay pipeline and buffers.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let aspect = context.config.width as f32
            / context.config.height.max(1) as f32;

        let crosshair_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("HUD Crosshair Buffer"),
                contents: bytemuck::cast_slice(&crosshair_vertices(aspect)),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let marker_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("HUD Marker Buffer"),
                contents: bytemuck::cast_slice(&marker_vertices(
                    GazePoint::CENTER,
                )),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let pipeline = Self::create_pipeline(context);

        Self {
            pipeline,
            crosshair_buffer,
            marker_buffer,
            aspect,
        }
    }

    /// Re-derive aspect-corrected geometry after a window resize.
    pub fn resize(&mut self, queue: &wgpu::Queue, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
        queue.write_buffer(
            &self.crosshair_buffer,
            0,
            bytemuck::cast_slice(&crosshair_vertices(self.aspect)),
        );
    }

    /// Move the gaze marker to the given (smoothed) gaze position.
    pub fn update_marker(&self, queue: &wgpu::Queue, gaze: GazePoint) {
        queue.write_buffer(
            &self.marker_buffer,
            0,
            bytemuck::cast_slice(&marker_vertices(gaze)),
        );
    }

    /// Record the overlay draw into an open render pass.
    pub fn draw<'rp>(&'rp self, rp: &mut wgpu::RenderPass<'rp>) {
        rp.set_pipeline(&self.pipeline);
        rp.set_vertex_buffer(0, self.crosshair_buffer.slice(..));
        rp.draw(0..CROSSHAIR_VERTEX_COUNT, 0..1);
        rp.set_vertex_buffer(0, self.marker_buffer.slice(..));
        rp.draw(0..MARKER_VERTEX_COUNT, 0..1);
    }

    fn create_pipeline(context: &RenderContext) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(
            wgpu::include_wgsl!("../../assets/shaders/hud.wgsl"),
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("HUD Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            },
        );

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("HUD Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[VERTEX_LAYOUT],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )
    }
}

fn crosshair_vertices(aspect: f32) -> [HudVertex; 4] {
    let v = |x: f32, y: f32| HudVertex {
        position: [x, y],
        color: CROSSHAIR_COLOR,
    };
    let h = CROSSHAIR_SIZE;
    [
        v(-h, 0.0),
        v(h, 0.0),
        v(0.0, -h * aspect),
        v(0.0, h * aspect),
    ]
}

/// Gaze coordinates grow downward; NDC y grows upward.
fn gaze_to_ndc(gaze: GazePoint) -> (f32, f32) {
    (gaze.x, -gaze.y)
}

fn marker_vertices(gaze: GazePoint) -> [HudVertex; 8] {
    let (cx, cy) = gaze_to_ndc(gaze);
    let v = |x: f32, y: f32| HudVertex {
        position: [x, y],
        color: MARKER_COLOR,
    };
    let s = MARKER_SIZE;
    // Diamond outline around the gaze position.
    [
        v(cx - s, cy),
        v(cx, cy + s),
        v(cx, cy + s),
        v(cx + s, cy),
        v(cx + s, cy),
        v(cx, cy - s),
        v(cx, cy - s),
        v(cx - s, cy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_flips_the_vertical_axis() {
        // Gaze at the top of the screen sits in the upper half of NDC.
        let (x, y) = gaze_to_ndc(GazePoint::new(0.5, -1.0));
        assert_eq!(x, 0.5);
        assert_eq!(y, 1.0);
    }

    #[test]
    fn marker_geometry_is_centered_on_the_gaze() {
        let verts = marker_vertices(GazePoint::new(0.25, 0.5));
        let n = verts.len() as f32;
        let (sx, sy) = verts.iter().fold((0.0f32, 0.0f32), |(sx, sy), v| {
            (sx + v.position[0], sy + v.position[1])
        });
        assert!((sx / n - 0.25).abs() < 1e-6);
        assert!((sy / n + 0.5).abs() < 1e-6);
    }
}
