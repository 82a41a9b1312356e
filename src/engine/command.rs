//! The engine's interactive vocabulary.
//!
//! Every user-facing operation the engine can perform is represented as a
//! `GazeCommand`. Consumers construct commands and pass them to
//! [`GazeEngine::execute`](super::GazeEngine::execute); the engine never
//! cares *how* a command was triggered — keyboard, config rebinding, or
//! programmatic call all look identical.

use crate::input::KeyAction;

/// Sensitivity step per key press, in degrees.
const SENSITIVITY_STEP: f32 = 5.0;
/// Smoothing-factor step per key press.
const SMOOTHING_STEP: f32 = 0.05;

/// A discrete or parameterized operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GazeCommand {
    /// Switch between webcam gaze and the mouse fallback.
    ToggleWebcam,
    /// Snap the camera back to looking straight ahead.
    RecenterCamera,
    /// Fire at whatever the gaze currently rests on.
    Shoot,
    /// Tune the gaze sensitivity at runtime.
    AdjustSensitivity {
        /// Degrees to add (negative to reduce).
        delta: f32,
    },
    /// Tune the smoothing factor at runtime.
    AdjustSmoothing {
        /// Amount to add to the factor (negative to reduce).
        delta: f32,
    },
}

impl GazeCommand {
    /// The command a bound key action maps to. `Exit` is handled by the
    /// window loop and has no engine command.
    #[must_use]
    pub fn from_action(action: KeyAction) -> Option<Self> {
        match action {
            KeyAction::ToggleWebcam => Some(Self::ToggleWebcam),
            KeyAction::RecenterCamera => Some(Self::RecenterCamera),
            KeyAction::SensitivityUp => Some(Self::AdjustSensitivity {
                delta: SENSITIVITY_STEP,
            }),
            KeyAction::SensitivityDown => Some(Self::AdjustSensitivity {
                delta: -SENSITIVITY_STEP,
            }),
            KeyAction::SmoothingUp => Some(Self::AdjustSmoothing {
                delta: SMOOTHING_STEP,
            }),
            KeyAction::SmoothingDown => Some(Self::AdjustSmoothing {
                delta: -SMOOTHING_STEP,
            }),
            KeyAction::Exit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_has_no_engine_command() {
        assert_eq!(GazeCommand::from_action(KeyAction::Exit), None);
        assert_eq!(
            GazeCommand::from_action(KeyAction::ToggleWebcam),
            Some(GazeCommand::ToggleWebcam)
        );
        assert_eq!(
            GazeCommand::from_action(KeyAction::RecenterCamera),
            Some(GazeCommand::RecenterCamera)
        );
    }

    #[test]
    fn tuning_actions_map_to_signed_steps() {
        assert_eq!(
            GazeCommand::from_action(KeyAction::SensitivityUp),
            Some(GazeCommand::AdjustSensitivity { delta: 5.0 })
        );
        assert_eq!(
            GazeCommand::from_action(KeyAction::SensitivityDown),
            Some(GazeCommand::AdjustSensitivity { delta: -5.0 })
        );
        assert_eq!(
            GazeCommand::from_action(KeyAction::SmoothingUp),
            Some(GazeCommand::AdjustSmoothing { delta: 0.05 })
        );
        assert_eq!(
            GazeCommand::from_action(KeyAction::SmoothingDown),
            Some(GazeCommand::AdjustSmoothing { delta: -0.05 })
        );
    }
}
