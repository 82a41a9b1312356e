use glam::Vec2;

use super::point::GazePoint;
use crate::options::GazeOptions;

/// Upper bound on the configurable dead zone so the rescale below never
/// divides by zero.
const DEAD_ZONE_MAX: f32 = 0.95;

/// Range the smoothing factor may be tuned within at runtime.
const ALPHA_MIN: f32 = 0.05;
const ALPHA_MAX: f32 = 0.5;

/// Exponential smoothing and dead-zone shaping for raw gaze samples.
///
/// Raw per-frame gaze estimates are noisy; the filter applies
/// `smoothed += alpha * (raw - smoothed)` with a fixed `alpha` in `(0, 1]`,
/// then maps a region around the center to zero so small fixation jitter
/// does not move the camera. The filter holds exactly one frame of history
/// (the smoothed value) — no other state.
pub struct GazeFilter {
    smoothed: Vec2,
    alpha: f32,
    dead_zone: f32,
}

impl GazeFilter {
    /// Build a filter from the gaze options.
    #[must_use]
    pub fn new(options: &GazeOptions) -> Self {
        Self {
            smoothed: Vec2::ZERO,
            alpha: options.smoothing.clamp(f32::EPSILON, 1.0),
            dead_zone: options.dead_zone.clamp(0.0, DEAD_ZONE_MAX),
        }
    }

    /// Feed one raw sample and return the smoothed, dead-zone-shaped value.
    pub fn apply(&mut self, raw: GazePoint) -> GazePoint {
        let raw = raw.to_vec2();
        self.smoothed += (raw - self.smoothed) * self.alpha;
        GazePoint::new(
            self.shape_axis(self.smoothed.x),
            self.shape_axis(self.smoothed.y),
        )
    }

    /// Snap the smoothed state back to center.
    pub fn reset(&mut self) {
        self.smoothed = Vec2::ZERO;
    }

    /// Nudge the smoothing factor at runtime, keeping it inside
    /// `[0.05, 0.5]`.
    pub fn adjust_alpha(&mut self, delta: f32) {
        self.alpha = (self.alpha + delta).clamp(ALPHA_MIN, ALPHA_MAX);
    }

    /// The current smoothing factor.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The current smoothed value before dead-zone shaping.
    #[must_use]
    pub fn smoothed(&self) -> GazePoint {
        GazePoint::from(self.smoothed)
    }

    /// Zero the axis inside the dead zone, rescale outside it so the
    /// transition is continuous and the edges still map to ±1.
    fn shape_axis(&self, v: f32) -> f32 {
        if v.abs() < self.dead_zone {
            0.0
        } else {
            (v - v.signum() * self.dead_zone) / (1.0 - self.dead_zone)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(alpha: f32, dead_zone: f32) -> GazeFilter {
        GazeFilter::new(&GazeOptions {
            smoothing: alpha,
            dead_zone,
            ..GazeOptions::default()
        })
    }

    #[test]
    fn constant_input_converges() {
        let mut f = filter(0.15, 0.0);
        let target = GazePoint::new(0.8, -0.4);
        let mut out = GazePoint::CENTER;
        for _ in 0..200 {
            out = f.apply(target);
        }
        assert!((out.x - target.x).abs() < 1e-3);
        assert!((out.y - target.y).abs() < 1e-3);
    }

    #[test]
    fn steady_state_is_idempotent() {
        let mut f = filter(0.3, 0.0);
        for _ in 0..500 {
            let _ = f.apply(GazePoint::new(0.5, 0.5));
        }
        let before = f.smoothed();
        let after = f.apply(GazePoint::new(0.5, 0.5));
        assert!((after.x - before.x).abs() < 1e-5);
        assert!((after.y - before.y).abs() < 1e-5);
    }

    #[test]
    fn dead_zone_suppresses_small_motion() {
        let mut f = filter(1.0, 0.2);
        let out = f.apply(GazePoint::new(0.1, -0.15));
        assert_eq!(out, GazePoint::CENTER);
    }

    #[test]
    fn dead_zone_rescale_is_continuous_and_reaches_edges() {
        let mut f = filter(1.0, 0.2);
        // Just past the dead zone: barely non-zero.
        let near = f.apply(GazePoint::new(0.21, 0.0));
        assert!(near.x > 0.0 && near.x < 0.05);
        // Screen edge still maps to 1.
        f.reset();
        let edge = f.apply(GazePoint::new(1.0, 0.0));
        assert!((edge.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn monotonic_approach_without_overshoot() {
        let mut f = filter(0.15, 0.0);
        let mut prev = f.apply(GazePoint::new(1.0, 1.0));
        for _ in 0..100 {
            let next = f.apply(GazePoint::new(1.0, 1.0));
            assert!(next.x >= prev.x);
            assert!(next.x <= 1.0);
            prev = next;
        }
    }

    #[test]
    fn alpha_adjustment_clamps_to_its_range() {
        let mut f = filter(0.15, 0.0);
        for _ in 0..20 {
            f.adjust_alpha(0.05);
        }
        assert_eq!(f.alpha(), 0.5);
        for _ in 0..20 {
            f.adjust_alpha(-0.05);
        }
        assert_eq!(f.alpha(), 0.05);
    }

    #[test]
    fn reset_recenters() {
        let mut f = filter(1.0, 0.0);
        let _ = f.apply(GazePoint::new(0.9, 0.9));
        f.reset();
        assert_eq!(f.smoothed(), GazePoint::CENTER);
    }
}
