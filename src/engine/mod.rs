//! The per-frame heart of the demo.
//!
//! [`GazeEngine`] owns the GPU context, the gaze pipeline (source → filter →
//! camera rig), and the two renderers. Each frame it samples one gaze point,
//! eases the camera toward it, resolves which scene object the gaze rests
//! on, and draws the scene plus HUD overlay.

mod command;

use glam::{Mat4, Vec3};
use rand::Rng;

pub use self::command::GazeCommand;
use crate::camera::CameraController;
use crate::error::GazecamError;
use crate::gaze::{GazePoint, GazeSource, Mode};
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::{Cube, HudRenderer, SceneRenderer, CLEAR_COLOR};
use crate::util::FrameTiming;

/// How close (in NDC units) the gaze must be to a cube's projected center
/// to count as hovering it.
const HOVER_RADIUS: f32 = 0.15;

/// World-space bounds a shot cube respawns within.
const RESPAWN_XZ: f32 = 4.0;
const RESPAWN_Y_MIN: f32 = -1.0;
const RESPAWN_Y_MAX: f32 = 3.0;

/// Hit/shot counters for the gaze-aim shooting interaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    /// Shots that landed on a cube.
    pub score: u32,
    /// Total shots fired.
    pub shots: u32,
}

impl Scoreboard {
    /// Record one shot and whether it hit.
    pub fn record(&mut self, hit: bool) {
        self.shots += 1;
        if hit {
            self.score += 1;
        }
    }
}

/// A fresh position for a cube that was just shot.
fn respawn_center(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-RESPAWN_XZ..=RESPAWN_XZ),
        rng.random_range(RESPAWN_Y_MIN..=RESPAWN_Y_MAX),
        rng.random_range(-RESPAWN_XZ..=RESPAWN_XZ),
    )
}

/// The core engine: gaze sampling, camera easing, and rendering.
///
/// # Frame loop
///
/// Each frame, call [`render`](Self::render) to sample, update, draw, and
/// present. Call [`resize`](Self::resize) when the window size changes.
/// Raw input is forwarded via [`handle_event`](Self::handle_event); discrete
/// operations via [`execute`](Self::execute).
pub struct GazeEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Gaze-driven camera and its GPU uniform.
    pub camera_controller: CameraController,
    /// Frame pacing and FPS measurement.
    pub frame_timing: FrameTiming,

    gaze_source: GazeSource,
    input: InputProcessor,
    scene: SceneRenderer,
    hud: HudRenderer,
    options: Options,
    last_gaze: GazePoint,
    hovered: i32,
    scoreboard: Scoreboard,
}

impl GazeEngine {
    /// Build the engine: GPU context, gaze source probe, camera, renderers.
    ///
    /// # Errors
    ///
    /// Returns [`GazecamError`] if GPU initialization fails. A missing
    /// webcam is not an error — the engine starts in mouse fallback.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, GazecamError> {
        let context = RenderContext::new(window, size).await?;

        let gaze_source = GazeSource::detect(&options.gaze);
        log::info!("gaze source: {}", gaze_source.mode());

        let camera_controller =
            CameraController::new(&context, &options.camera, &options.gaze);
        let scene = SceneRenderer::new(&context, &camera_controller.layout);
        let hud = HudRenderer::new(&context);

        Ok(Self {
            camera_controller,
            frame_timing: FrameTiming::new(options.display.target_fps),
            gaze_source,
            input: InputProcessor::new(size.0, size.1),
            scene,
            hud,
            options,
            last_gaze: GazePoint::CENTER,
            hovered: -1,
            scoreboard: Scoreboard::default(),
            context,
        })
    }

    /// Forward a raw window event to the input state.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Perform a discrete engine operation.
    pub fn execute(&mut self, command: GazeCommand) {
        match command {
            GazeCommand::ToggleWebcam => {
                let _ = self.gaze_source.toggle();
            }
            GazeCommand::RecenterCamera => {
                self.camera_controller.recenter();
            }
            GazeCommand::Shoot => self.shoot(),
            GazeCommand::AdjustSensitivity { delta } => {
                self.camera_controller.adjust_sensitivity(delta);
            }
            GazeCommand::AdjustSmoothing { delta } => {
                self.camera_controller.adjust_smoothing(delta);
            }
        }
    }

    /// Fire at the hovered cube: a hit scores and respawns it elsewhere.
    fn shoot(&mut self) {
        let hit = self.hovered > 0;
        self.scoreboard.record(hit);
        if hit {
            let index = (self.hovered - 1) as usize;
            let center = respawn_center(&mut rand::rng());
            self.scene.move_cube(&self.context.queue, index, center);
            log::debug!("hit cube {index}, respawned at {center}");
        }
    }

    /// The active gaze sampling mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.gaze_source.mode()
    }

    /// The engine's current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The smoothed gaze point from the most recent frame.
    #[must_use]
    pub fn last_gaze(&self) -> GazePoint {
        self.last_gaze
    }

    /// Hit/shot counters.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Sample one gaze point, ease the camera, resolve the hovered object,
    /// and upload the frame's GPU state.
    fn advance_frame(&mut self) {
        let raw = self.gaze_source.sample(self.input.mouse_gaze());
        let shaped = self.camera_controller.update_from_gaze(raw);

        let view_proj = self.camera_controller.camera.build_matrix();
        self.hovered =
            hovered_object(view_proj, self.scene.cubes(), shaped);
        self.camera_controller.set_highlighted(self.hovered);

        self.camera_controller.update_gpu(&self.context.queue);
        self.hud.update_marker(&self.context.queue, shaped);
        self.last_gaze = shaped;
    }

    /// Execute one frame: sample gaze, update the camera, draw the scene
    /// and HUD, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        self.advance_frame();

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let mut rp =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.scene
                .draw(&mut rp, &self.camera_controller.bind_group);
        }

        if self.options.display.show_hud {
            let mut rp =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("HUD Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.hud.draw(&mut rp);
        }

        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();

        Ok(())
    }

    /// Resize the surface, camera projection, HUD geometry, and input
    /// normalization to match the new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera_controller.resize(width, height);
            self.hud.resize(&self.context.queue, width, height);
            self.input
                .handle_event(InputEvent::Resized { width, height });
        }
    }
}

/// The scene object the gaze currently rests on (-1 if none).
///
/// Cube centers are projected through the view-projection matrix and
/// compared against the gaze point in NDC; the nearest center within
/// [`HOVER_RADIUS`] wins. Cubes behind the camera are skipped.
fn hovered_object(
    view_proj: Mat4,
    cubes: &[Cube],
    gaze: GazePoint,
) -> i32 {
    // Gaze y grows downward; NDC y grows upward.
    let gx = gaze.x;
    let gy = -gaze.y;

    let mut best = -1;
    let mut best_dist = HOVER_RADIUS;
    for (idx, cube) in cubes.iter().enumerate() {
        let clip = view_proj * cube.center.extend(1.0);
        if clip.w <= f32::EPSILON {
            continue;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let dist = ((ndc_x - gx).powi(2) + (ndc_y - gy).powi(2)).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best = idx as i32 + 1;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::Camera;

    fn cube_at(center: Vec3) -> Cube {
        Cube {
            center,
            size: 1.0,
            color: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn centered_gaze_picks_the_centered_cube() {
        let cubes =
            vec![cube_at(Vec3::ZERO), cube_at(Vec3::new(0.8, 0.0, 0.0))];
        let id = hovered_object(Mat4::IDENTITY, &cubes, GazePoint::CENTER);
        assert_eq!(id, 1);
    }

    #[test]
    fn gaze_picks_the_nearest_projected_center() {
        let cubes =
            vec![cube_at(Vec3::ZERO), cube_at(Vec3::new(0.8, 0.0, 0.0))];
        let id = hovered_object(
            Mat4::IDENTITY,
            &cubes,
            GazePoint::new(0.75, 0.0),
        );
        assert_eq!(id, 2);
    }

    #[test]
    fn distant_gaze_picks_nothing() {
        let cubes = vec![cube_at(Vec3::ZERO)];
        let id = hovered_object(
            Mat4::IDENTITY,
            &cubes,
            GazePoint::new(-1.0, 1.0),
        );
        assert_eq!(id, -1);
    }

    #[test]
    fn scoreboard_counts_hits_and_misses() {
        let mut board = Scoreboard::default();
        board.record(true);
        board.record(false);
        board.record(true);
        assert_eq!(board.score, 2);
        assert_eq!(board.shots, 3);
    }

    #[test]
    fn respawned_cubes_stay_inside_the_scene_bounds() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = respawn_center(&mut rng);
            assert!(c.x.abs() <= RESPAWN_XZ);
            assert!(c.z.abs() <= RESPAWN_XZ);
            assert!(c.y >= RESPAWN_Y_MIN && c.y <= RESPAWN_Y_MAX);
        }
    }

    #[test]
    fn cubes_behind_the_camera_are_skipped() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        };
        let view_proj = camera.build_matrix();
        // One cube in front of the camera, one behind it.
        let cubes = vec![
            cube_at(Vec3::ZERO),
            cube_at(Vec3::new(0.0, 0.0, 20.0)),
        ];
        let id = hovered_object(view_proj, &cubes, GazePoint::CENTER);
        assert_eq!(id, 1);
    }
}
