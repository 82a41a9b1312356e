//! Converts raw window events into the gaze state the fallback mode reads.
//!
//! The `InputProcessor` owns the transient cursor state and the viewport
//! dimensions needed to normalize it. It is the only thing that sits
//! between raw window events and the engine's per-frame sampling.

use super::event::InputEvent;
use crate::gaze::GazePoint;

/// Tracks the cursor and normalizes it into gaze coordinates.
///
/// The cursor starts at the window center so the first frames before any
/// mouse motion map to a centered gaze.
pub struct InputProcessor {
    viewport: (f32, f32),
    cursor: (f32, f32),
}

impl InputProcessor {
    /// Create a processor for the given initial viewport size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = (width.max(1) as f32, height.max(1) as f32);
        Self {
            viewport,
            cursor: (viewport.0 / 2.0, viewport.1 / 2.0),
        }
    }

    /// Process a raw window event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
            }
            InputEvent::Resized { width, height } => {
                self.viewport =
                    (width.max(1) as f32, height.max(1) as f32);
            }
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor_pos(&self) -> (f32, f32) {
        self.cursor
    }

    /// The cursor normalized into gaze coordinates: window corners map to
    /// ±1, the center to 0. Positions outside the window clamp.
    #[must_use]
    pub fn mouse_gaze(&self) -> GazePoint {
        GazePoint::new(
            self.cursor.0 / self.viewport.0 * 2.0 - 1.0,
            self.cursor.1 / self.viewport.1 * 2.0 - 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let input = InputProcessor::new(1280, 720);
        assert_eq!(input.mouse_gaze(), GazePoint::CENTER);
    }

    #[test]
    fn corners_map_to_unit_extremes() {
        let mut input = InputProcessor::new(1280, 720);
        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(input.mouse_gaze(), GazePoint::new(-1.0, -1.0));

        input.handle_event(InputEvent::CursorMoved {
            x: 1280.0,
            y: 720.0,
        });
        assert_eq!(input.mouse_gaze(), GazePoint::new(1.0, 1.0));
    }

    #[test]
    fn out_of_window_positions_clamp() {
        let mut input = InputProcessor::new(100, 100);
        input.handle_event(InputEvent::CursorMoved { x: 250.0, y: -40.0 });
        assert_eq!(input.mouse_gaze(), GazePoint::new(1.0, -1.0));
    }

    #[test]
    fn resize_renormalizes() {
        let mut input = InputProcessor::new(100, 100);
        input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        assert_eq!(input.mouse_gaze(), GazePoint::new(1.0, 0.0));

        input.handle_event(InputEvent::Resized {
            width: 200,
            height: 100,
        });
        assert_eq!(input.mouse_gaze(), GazePoint::CENTER);
    }
}
