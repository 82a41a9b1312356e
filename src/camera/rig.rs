//! The pure gaze-to-orientation mapping: no GPU resources, fully testable.

use glam::Vec3;

use crate::gaze::{GazeFilter, GazePoint};
use crate::options::{CameraOptions, GazeOptions};

/// Lower bound for runtime sensitivity tuning.
const SENSITIVITY_MIN: f32 = 5.0;

/// Per-frame camera orientation state driven by gaze.
///
/// Each update is a pure function of the previous state and the current
/// gaze point: the raw sample is smoothed through the [`GazeFilter`],
/// mapped linearly to target yaw/pitch (`sensitivity` degrees at the screen
/// edge, Y inverted so looking up pitches up), clamped to the configured
/// bounds, and eased toward with a second exponential response factor.
///
/// Invariant: yaw and pitch never leave their clamp bounds for any input
/// sequence — each step is a convex combination of the current angle and a
/// clamped target.
pub struct CameraRig {
    yaw: f32,
    pitch: f32,
    filter: GazeFilter,

    sensitivity: f32,
    yaw_limit: f32,
    pitch_limit: f32,
    response: f32,
}

impl CameraRig {
    /// Build a rig centered at yaw = pitch = 0.
    #[must_use]
    pub fn new(camera: &CameraOptions, gaze: &GazeOptions) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            filter: GazeFilter::new(gaze),
            sensitivity: camera.sensitivity,
            yaw_limit: camera.yaw_limit.abs(),
            pitch_limit: camera.pitch_limit.abs().min(89.0),
            response: camera.response.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Advance one frame. Returns the smoothed, shaped gaze value (used by
    /// the HUD marker and hover picking).
    pub fn update_from_gaze(&mut self, gaze: GazePoint) -> GazePoint {
        let shaped = self.filter.apply(gaze);

        let target_yaw = (shaped.x * self.sensitivity)
            .clamp(-self.yaw_limit, self.yaw_limit);
        // Invert Y: gaze above center (negative y) pitches the camera up.
        let target_pitch = (-shaped.y * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);

        self.yaw += (target_yaw - self.yaw) * self.response;
        self.pitch += (target_pitch - self.pitch) * self.response;

        shaped
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World-space view direction for the current yaw/pitch.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        // Yaw 0 / pitch 0 looks down -Z; positive yaw turns toward +X.
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }

    /// Snap orientation and smoothing state back to center.
    pub fn recenter(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.filter.reset();
    }

    /// Nudge the sensitivity at runtime; never below 5 degrees so the
    /// camera cannot be tuned into immobility.
    pub fn adjust_sensitivity(&mut self, delta: f32) {
        self.sensitivity = (self.sensitivity + delta).max(SENSITIVITY_MIN);
    }

    /// Nudge the smoothing factor at runtime.
    pub fn adjust_smoothing(&mut self, delta: f32) {
        self.filter.adjust_alpha(delta);
    }

    /// Current sensitivity in degrees at the screen edge.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default(), &GazeOptions::default())
    }

    #[test]
    fn angles_stay_within_clamp_bounds_for_any_sequence() {
        let mut r = rig();
        let opts = CameraOptions::default();
        // Adversarial sequence including far out-of-range inputs.
        let inputs = [
            (5.0, -5.0),
            (1.0, 1.0),
            (-1.0, -1.0),
            (0.3, 100.0),
            (-40.0, 0.0),
            (1.0, 1.0),
        ];
        for _ in 0..300 {
            for (x, y) in inputs {
                let _ = r.update_from_gaze(GazePoint::new(x, y));
                assert!(r.yaw().abs() <= opts.yaw_limit);
                assert!(r.pitch().abs() <= opts.pitch_limit);
            }
        }
    }

    #[test]
    fn centered_gaze_keeps_the_camera_centered() {
        let mut r = rig();
        for _ in 0..10 {
            let _ = r.update_from_gaze(GazePoint::CENTER);
        }
        assert_eq!(r.yaw(), 0.0);
        assert_eq!(r.pitch(), 0.0);
    }

    #[test]
    fn corner_gaze_approaches_clamp_monotonically_without_overshoot() {
        let mut r = rig();
        // Settle at center first, then jump the gaze to the corner.
        for _ in 0..10 {
            let _ = r.update_from_gaze(GazePoint::CENTER);
        }
        let mut prev_yaw = r.yaw();
        let mut prev_pitch = r.pitch();
        for _ in 0..500 {
            let _ = r.update_from_gaze(GazePoint::new(1.0, 1.0));
            // Yaw grows toward +limit; pitch sinks toward -limit (y is
            // inverted). Neither reverses or passes its bound.
            assert!(r.yaw() >= prev_yaw);
            assert!(r.yaw() <= 60.0);
            assert!(r.pitch() <= prev_pitch);
            assert!(r.pitch() >= -80.0);
            prev_yaw = r.yaw();
            prev_pitch = r.pitch();
        }
        // Converged to the mapped target: full-edge gaze at sensitivity 60
        // lands on the yaw limit exactly.
        assert!((r.yaw() - 60.0).abs() < 1e-2);
        assert!((r.pitch() + 60.0).abs() < 1e-2);
    }

    #[test]
    fn extreme_corner_reaches_bound_not_beyond() {
        let opts = CameraOptions {
            sensitivity: 120.0,
            yaw_limit: 45.0,
            pitch_limit: 30.0,
            ..CameraOptions::default()
        };
        let mut r = CameraRig::new(&opts, &GazeOptions::default());
        for _ in 0..2000 {
            let _ = r.update_from_gaze(GazePoint::new(1.0, 1.0));
        }
        assert!((r.yaw() - 45.0).abs() < 1e-2);
        assert!((r.pitch() + 30.0).abs() < 1e-2);
    }

    #[test]
    fn upward_gaze_pitches_up() {
        let mut r = rig();
        for _ in 0..50 {
            let _ = r.update_from_gaze(GazePoint::new(0.0, -1.0));
        }
        assert!(r.pitch() > 0.0);
        assert!(r.forward().y > 0.0);
    }

    #[test]
    fn forward_is_unit_length_and_centered_looks_down_negative_z() {
        let r = rig();
        let f = r.forward();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((f - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn sensitivity_tuning_shifts_the_converged_angle() {
        let mut r = rig();
        // Halve the reach: 60 - 8 * 5 = 20 degrees at the screen edge.
        for _ in 0..8 {
            r.adjust_sensitivity(-5.0);
        }
        assert_eq!(r.sensitivity(), 20.0);
        for _ in 0..2000 {
            let _ = r.update_from_gaze(GazePoint::new(1.0, 0.0));
        }
        assert!((r.yaw() - 20.0).abs() < 1e-2);
    }

    #[test]
    fn sensitivity_tuning_never_drops_below_its_floor() {
        let mut r = rig();
        for _ in 0..100 {
            r.adjust_sensitivity(-5.0);
        }
        assert_eq!(r.sensitivity(), 5.0);
    }

    #[test]
    fn recenter_snaps_back() {
        let mut r = rig();
        for _ in 0..100 {
            let _ = r.update_from_gaze(GazePoint::new(1.0, 1.0));
        }
        r.recenter();
        assert_eq!(r.yaw(), 0.0);
        assert_eq!(r.pitch(), 0.0);
        // And the filter history is gone too: the next centered sample
        // produces no movement.
        let _ = r.update_from_gaze(GazePoint::CENTER);
        assert_eq!(r.yaw(), 0.0);
    }
}
