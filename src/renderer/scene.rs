//! Wireframe scene pass: a reference grid floor and a handful of colored
//! cubes, drawn as a single line-list vertex buffer.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;

/// Background clear color (dark blue-gray).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.043,
    g: 0.043,
    b: 0.067,
    a: 1.0,
};

/// Grid extent in world units (lines from -N to N on both axes).
const GRID_EXTENT: i32 = 10;
/// Grid plane height.
const GRID_Y: f32 = -2.0;
const GRID_COLOR: [f32; 3] = [0.3, 0.3, 0.3];

/// A wireframe cube in the scene.
pub struct Cube {
    /// Center position in world space.
    pub center: Vec3,
    /// Half-edge length.
    pub size: f32,
    /// Line color.
    pub color: [f32; 3],
}

/// The fixed demo scene: one large center cube ringed by smaller ones, so
/// every gaze direction has something to look at.
fn scene_cubes() -> Vec<Cube> {
    vec![
        Cube {
            center: Vec3::new(0.0, 0.0, 0.0),
            size: 1.0,
            color: [1.0, 0.0, 0.0],
        },
        Cube {
            center: Vec3::new(-3.0, 0.0, 0.0),
            size: 0.7,
            color: [0.0, 1.0, 0.0],
        },
        Cube {
            center: Vec3::new(3.0, 0.0, 0.0),
            size: 0.7,
            color: [0.0, 0.0, 1.0],
        },
        Cube {
            center: Vec3::new(0.0, 0.0, -3.0),
            size: 0.7,
            color: [1.0, 1.0, 0.0],
        },
        Cube {
            center: Vec3::new(0.0, 0.0, 3.0),
            size: 0.7,
            color: [1.0, 0.0, 1.0],
        },
        Cube {
            center: Vec3::new(0.0, 2.0, 0.0),
            size: 0.5,
            color: [0.0, 1.0, 1.0],
        },
    ]
}

/// Vertex format shared by all scene lines.
/// Must match the WGSL VertexInput struct layout exactly.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 3],
    color: [f32; 3],
    /// Object id for gaze-hover highlighting (0 = grid, cubes from 1).
    object: u32,
}

/// Line-list vertices per cube (12 edges).
const CUBE_VERTEX_COUNT: usize = 24;

/// Line-list vertices in the grid floor.
const fn grid_vertex_count() -> usize {
    4 * (2 * GRID_EXTENT as usize + 1)
}

/// Index of cube `index`'s first vertex in the shared buffer.
const fn cube_vertex_offset(index: usize) -> usize {
    grid_vertex_count() + index * CUBE_VERTEX_COUNT
}

const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> =
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
            2 => Uint32,
        ],
    };

/// Renders the static wireframe scene.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    cubes: Vec<Cube>,
}

impl SceneRenderer {
    /// Build the scene geometry and pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let cubes = scene_cubes();
        let vertices = build_vertices(&cubes);

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Scene Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let pipeline = Self::create_pipeline(context, camera_layout);

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            cubes,
        }
    }

    /// The scene cubes, in object-id order (cube `i` has object id
    /// `i + 1`; id 0 is the grid).
    #[must_use]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Move a cube to a new center and rewrite its block of the vertex
    /// buffer. Out-of-range indices are ignored.
    pub fn move_cube(
        &mut self,
        queue: &wgpu::Queue,
        index: usize,
        center: Vec3,
    ) {
        if index >= self.cubes.len() {
            return;
        }
        self.cubes[index].center = center;

        let mut verts = Vec::with_capacity(CUBE_VERTEX_COUNT);
        push_cube_edges(&mut verts, &self.cubes[index], index as u32 + 1);

        let offset = (cube_vertex_offset(index)
            * size_of::<LineVertex>())
            as u64;
        queue.write_buffer(
            &self.vertex_buffer,
            offset,
            bytemuck::cast_slice(&verts),
        );
    }

    /// Record the scene draw into an open render pass.
    pub fn draw<'rp>(
        &'rp self,
        rp: &mut wgpu::RenderPass<'rp>,
        camera_bind_group: &'rp wgpu::BindGroup,
    ) {
        rp.set_pipeline(&self.pipeline);
        rp.set_bind_group(0, camera_bind_group, &[]);
        rp.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rp.draw(0..self.vertex_count, 0..1);
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(
            wgpu::include_wgsl!("../../assets/shaders/scene.wgsl"),
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Scene Pipeline"),
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

/// Flatten the grid and cube edges into one line-list vertex array.
fn build_vertices(cubes: &[Cube]) -> Vec<LineVertex> {
    let mut vertices = Vec::new();

    for i in -GRID_EXTENT..=GRID_EXTENT {
        let i = i as f32;
        let n = GRID_EXTENT as f32;
        push_line(
            &mut vertices,
            Vec3::new(i, GRID_Y, -n),
            Vec3::new(i, GRID_Y, n),
            GRID_COLOR,
            0,
        );
        push_line(
            &mut vertices,
            Vec3::new(-n, GRID_Y, i),
            Vec3::new(n, GRID_Y, i),
            GRID_COLOR,
            0,
        );
    }

    for (idx, cube) in cubes.iter().enumerate() {
        push_cube_edges(&mut vertices, cube, idx as u32 + 1);
    }

    vertices
}

fn push_line(
    out: &mut Vec<LineVertex>,
    a: Vec3,
    b: Vec3,
    color: [f32; 3],
    object: u32,
) {
    out.push(LineVertex {
        position: a.to_array(),
        color,
        object,
    });
    out.push(LineVertex {
        position: b.to_array(),
        color,
        object,
    });
}

/// The 12 edges of an axis-aligned cube.
fn push_cube_edges(out: &mut Vec<LineVertex>, cube: &Cube, object: u32) {
    let s = cube.size;
    let corners: [Vec3; 8] = [
        Vec3::new(s, s, -s),
        Vec3::new(s, -s, -s),
        Vec3::new(-s, -s, -s),
        Vec3::new(-s, s, -s),
        Vec3::new(s, s, s),
        Vec3::new(s, -s, s),
        Vec3::new(-s, -s, s),
        Vec3::new(-s, s, s),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    for (a, b) in EDGES {
        push_line(
            out,
            cube.center + corners[a],
            cube.center + corners[b],
            cube.color,
            object,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_geometry_is_a_well_formed_line_list() {
        let cubes = scene_cubes();
        let vertices = build_vertices(&cubes);
        // Line list: pairs of vertices.
        assert_eq!(vertices.len() % 2, 0);
        // Grid: (2N+1) lines per axis; cubes: 12 edges each.
        let grid_lines = 2 * (2 * GRID_EXTENT as usize + 1);
        let expected = 2 * (grid_lines + 12 * cubes.len());
        assert_eq!(vertices.len(), expected);
    }

    #[test]
    fn cube_blocks_sit_at_their_computed_offsets() {
        let cubes = scene_cubes();
        let vertices = build_vertices(&cubes);
        for index in 0..cubes.len() {
            let start = cube_vertex_offset(index);
            let block = &vertices[start..start + CUBE_VERTEX_COUNT];
            assert!(block.iter().all(|v| v.object == index as u32 + 1));
        }
    }

    #[test]
    fn rebuilt_cube_block_tracks_a_new_center() {
        let mut cube = Cube {
            center: Vec3::ZERO,
            size: 0.5,
            color: [1.0, 0.0, 0.0],
        };
        let mut before = Vec::new();
        push_cube_edges(&mut before, &cube, 1);

        cube.center = Vec3::new(2.0, -1.0, 3.0);
        let mut after = Vec::new();
        push_cube_edges(&mut after, &cube, 1);

        assert_eq!(before.len(), CUBE_VERTEX_COUNT);
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(b.position[0], a.position[0] + 2.0);
            assert_eq!(b.position[1], a.position[1] - 1.0);
            assert_eq!(b.position[2], a.position[2] + 3.0);
            assert_eq!(b.object, 1);
        }
    }

    #[test]
    fn grid_and_cubes_use_distinct_object_ids() {
        let cubes = scene_cubes();
        let vertices = build_vertices(&cubes);
        let max_object =
            vertices.iter().map(|v| v.object).max().unwrap();
        assert_eq!(max_object, cubes.len() as u32);
        assert!(vertices.iter().any(|v| v.object == 0));
    }
}
