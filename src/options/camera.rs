use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and gaze-mapping parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Camera eye position in world space.
    pub eye: [f32; 3],
    /// Degrees of rotation when the gaze reaches the screen edge.
    pub sensitivity: f32,
    /// Yaw clamp bound in degrees (symmetric around zero).
    pub yaw_limit: f32,
    /// Pitch clamp bound in degrees; below 90 to avoid gimbal lock.
    pub pitch_limit: f32,
    /// Per-frame easing factor toward the target angles, in `(0, 1]`.
    pub response: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            eye: [0.0, 0.0, 10.0],
            sensitivity: 60.0,
            yaw_limit: 60.0,
            pitch_limit: 80.0,
            response: 0.15,
        }
    }
}
