use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Window and frame-pacing options.
pub struct DisplayOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Frame rate cap (0 = unlimited).
    pub target_fps: u32,
    /// Draw the crosshair and gaze marker overlay.
    pub show_hud: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 60,
            show_hud: true,
        }
    }
}
