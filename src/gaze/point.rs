use glam::Vec2;

/// A 2D gaze estimate in normalized, center-origin screen coordinates.
///
/// Both axes lie in `[-1, 1]`: `(-1, -1)` is the top-left corner of the
/// view, `(0, 0)` the center, and `(1, 1)` the bottom-right corner (y grows
/// downward, matching window pixel coordinates). Values are clamped on
/// construction, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazePoint {
    /// Horizontal position, `-1` = left edge, `1` = right edge.
    pub x: f32,
    /// Vertical position, `-1` = top edge, `1` = bottom edge.
    pub y: f32,
}

impl GazePoint {
    /// The center of the view.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Build a gaze point, clamping each axis to `[-1, 1]`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Remap a point from `[0, 1]` texture-style coordinates (as produced by
    /// landmark detectors) to the center-origin range.
    #[must_use]
    pub fn from_unit(x: f32, y: f32) -> Self {
        Self::new((x - 0.5) * 2.0, (y - 0.5) * 2.0)
    }

    /// View as a `glam` vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Default for GazePoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<Vec2> for GazePoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_out_of_range_input() {
        let p = GazePoint::new(3.0, -7.5);
        assert_eq!(p, GazePoint { x: 1.0, y: -1.0 });
    }

    #[test]
    fn unit_coordinates_remap_to_center_origin() {
        assert_eq!(GazePoint::from_unit(0.5, 0.5), GazePoint::CENTER);
        assert_eq!(GazePoint::from_unit(0.0, 1.0), GazePoint::new(-1.0, 1.0));
        assert_eq!(GazePoint::from_unit(1.0, 0.0), GazePoint::new(1.0, -1.0));
    }
}
