use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Gaze sampling and smoothing parameters.
pub struct GazeOptions {
    /// Exponential smoothing factor in `(0, 1]`; lower = smoother but
    /// slower response.
    pub smoothing: f32,
    /// Center region with no camera movement, per axis, in normalized
    /// units.
    pub dead_zone: f32,
    /// Index of the capture device to open in webcam mode.
    pub camera_index: i32,
}

impl Default for GazeOptions {
    fn default() -> Self {
        Self {
            smoothing: 0.15,
            dead_zone: 0.2,
            camera_index: 0,
        }
    }
}
