use serde::{Deserialize, Serialize};

/// Demo-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML options stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_webcam = "KeyT"
/// recenter_camera = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch between webcam gaze and mouse fallback.
    ToggleWebcam,
    /// Reset the camera to center (yaw = pitch = 0).
    RecenterCamera,
    /// Increase gaze sensitivity (degrees at the screen edge).
    SensitivityUp,
    /// Decrease gaze sensitivity.
    SensitivityDown,
    /// Increase the smoothing factor (snappier response).
    SmoothingUp,
    /// Decrease the smoothing factor (smoother response).
    SmoothingDown,
    /// Quit the demo.
    Exit,
}
