//! Centralized runtime options with TOML file support.
//!
//! All tweakable settings (gaze smoothing, camera mapping and clamps,
//! window/display toggles, keybindings) are consolidated here. Options
//! serialize to/from TOML; every sub-struct uses `#[serde(default)]` so a
//! partial file (e.g. only overriding `[gaze]`) works correctly.

mod camera;
mod display;
mod gaze;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use gaze::GazeOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::GazecamError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Gaze sampling and smoothing parameters.
    pub gaze: GazeOptions,
    /// Camera projection and gaze-mapping parameters.
    pub camera: CameraOptions,
    /// Window and frame-pacing options.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GazecamError::Io`] when the file cannot be read and
    /// [`GazecamError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, GazecamError> {
        let content =
            std::fs::read_to_string(path).map_err(GazecamError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| GazecamError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GazecamError::OptionsParse`] on serialization failure and
    /// [`GazecamError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GazecamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GazecamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GazecamError::Io)?;
        }
        std::fs::write(path, content).map_err(GazecamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[gaze]
smoothing = 0.3
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.gaze.smoothing, 0.3);
        // Everything else should be default
        assert_eq!(opts.gaze.dead_zone, 0.2);
        assert_eq!(opts.camera.sensitivity, 60.0);
        assert_eq!(opts.display.width, 1280);
    }

    #[test]
    fn save_then_load_round_trips_through_a_file() {
        let path = std::env::temp_dir().join(format!(
            "gazecam-options-{}.toml",
            std::process::id()
        ));
        let opts = Options {
            gaze: GazeOptions {
                smoothing: 0.25,
                ..GazeOptions::default()
            },
            ..Options::default()
        };
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, opts);
        // The reverse map is rebuilt on load, not stored in the file.
        use crate::input::KeyAction;
        assert_eq!(
            loaded.keybindings.lookup("KeyT"),
            Some(KeyAction::ToggleWebcam)
        );
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyT"),
            Some(KeyAction::ToggleWebcam)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_key_survives_a_load_cycle() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
toggle_webcam = "KeyW"
"#;
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::ToggleWebcam)
        );
        assert_eq!(opts.keybindings.lookup("KeyT"), None);
    }
}
