use glam::Vec3;
use wgpu::util::DeviceExt;

use super::core::{Camera, CameraUniform};
use super::rig::CameraRig;
use crate::gaze::GazePoint;
use crate::gpu::render_context::RenderContext;
use crate::options::{CameraOptions, GazeOptions};

/// Owns the gaze-driven [`CameraRig`], the [`Camera`], and their GPU
/// uniform, buffer, and bind group.
pub struct CameraController {
    rig: CameraRig,

    /// Current camera state; read-only for renderers.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout shared by all pipelines sampling the camera.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the controller and its GPU resources.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_opts: &CameraOptions,
        gaze_opts: &GazeOptions,
    ) -> Self {
        let rig = CameraRig::new(camera_opts, gaze_opts);
        let eye = Vec3::from_array(camera_opts.eye);

        let camera = Camera {
            eye,
            target: eye + rig.forward(),
            up: Vec3::Y,
            aspect: context.config.width as f32
                / context.config.height.max(1) as f32,
            fovy: camera_opts.fovy,
            znear: camera_opts.znear,
            zfar: camera_opts.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            rig,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Advance the rig one frame and refresh the camera's look-at target.
    /// Returns the smoothed gaze value.
    pub fn update_from_gaze(&mut self, gaze: GazePoint) -> GazePoint {
        let shaped = self.rig.update_from_gaze(gaze);
        self.camera.target = self.camera.eye + self.rig.forward();
        shaped
    }

    /// Set which scene object the gaze rests on (-1 = none).
    pub fn set_highlighted(&mut self, id: i32) {
        self.uniform.highlighted = id;
    }

    /// Upload the current camera state to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Update the projection aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Snap the camera back to center.
    pub fn recenter(&mut self) {
        self.rig.recenter();
        self.camera.target = self.camera.eye + self.rig.forward();
    }

    /// Nudge the gaze sensitivity at runtime.
    pub fn adjust_sensitivity(&mut self, delta: f32) {
        self.rig.adjust_sensitivity(delta);
    }

    /// Nudge the smoothing factor at runtime.
    pub fn adjust_smoothing(&mut self, delta: f32) {
        self.rig.adjust_smoothing(delta);
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.rig.yaw()
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.rig.pitch()
    }
}
