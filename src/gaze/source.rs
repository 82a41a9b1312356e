use super::point::GazePoint;
use super::tracker::{self, GazeTracker};
use crate::options::GazeOptions;

/// Where gaze samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mouse position substitutes for gaze (webcam or ML backend missing,
    /// or tracking toggled off).
    MouseFallback,
    /// Gaze comes from the webcam tracker.
    WebcamActive,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MouseFallback => write!(f, "mouse fallback"),
            Self::WebcamActive => write!(f, "webcam"),
        }
    }
}

/// Produces one [`GazePoint`] per frame, from the webcam tracker or the
/// mouse-position fallback.
///
/// Capability detection happens exactly once, at construction: if no tracker
/// could be opened, the mode is fixed at [`Mode::MouseFallback`] and
/// [`toggle`](Self::toggle) is a no-op. Per-frame detection failures (no
/// face, transient capture errors) hold the last known value rather than
/// jumping the camera.
pub struct GazeSource {
    mode: Mode,
    tracker: Option<Box<dyn GazeTracker>>,
    held: GazePoint,
}

impl GazeSource {
    /// Probe the webcam tracker once and pick the initial mode.
    #[must_use]
    pub fn detect(options: &GazeOptions) -> Self {
        match tracker::open_default(options.camera_index) {
            Ok(tracker) => Self::with_tracker(tracker),
            Err(e) => {
                log::warn!("webcam unavailable, using mouse fallback: {e}");
                Self::mouse_only()
            }
        }
    }

    /// Source backed by an already-opened tracker; starts in webcam mode.
    #[must_use]
    pub fn with_tracker(tracker: Box<dyn GazeTracker>) -> Self {
        Self {
            mode: Mode::WebcamActive,
            tracker: Some(tracker),
            held: GazePoint::CENTER,
        }
    }

    /// Source with no tracker; permanently in mouse fallback.
    #[must_use]
    pub fn mouse_only() -> Self {
        Self {
            mode: Mode::MouseFallback,
            tracker: None,
            held: GazePoint::CENTER,
        }
    }

    /// The active sampling mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a tracker was opened at startup.
    #[must_use]
    pub fn webcam_available(&self) -> bool {
        self.tracker.is_some()
    }

    /// Switch between webcam and mouse sampling.
    ///
    /// A no-op when no tracker was opened at startup; returns the mode in
    /// effect afterwards either way.
    pub fn toggle(&mut self) -> Mode {
        if self.tracker.is_some() {
            self.mode = match self.mode {
                Mode::WebcamActive => Mode::MouseFallback,
                Mode::MouseFallback => Mode::WebcamActive,
            };
            log::info!("gaze source switched to {}", self.mode);
        } else {
            log::debug!("toggle ignored: no webcam tracker");
        }
        self.mode
    }

    /// Produce this frame's gaze point.
    ///
    /// `mouse` is the cursor position already normalized to gaze
    /// coordinates; it is used directly in fallback mode and ignored while
    /// the webcam is active.
    pub fn sample(&mut self, mouse: GazePoint) -> GazePoint {
        match (self.mode, self.tracker.as_mut()) {
            (Mode::WebcamActive, Some(tracker)) => {
                match tracker.next_gaze() {
                    Ok(Some(point)) => self.held = point,
                    Ok(None) => {
                        log::debug!("no face detected, holding last gaze");
                    }
                    Err(e) => {
                        log::debug!("capture failure, holding last gaze: {e}");
                    }
                }
                self.held
            }
            _ => {
                self.held = mouse;
                self.held
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GazecamError;

    /// Tracker that replays a fixed script of results.
    struct ScriptedTracker {
        script: Vec<Result<Option<GazePoint>, GazecamError>>,
    }

    impl ScriptedTracker {
        fn boxed(
            script: Vec<Result<Option<GazePoint>, GazecamError>>,
        ) -> Box<dyn GazeTracker> {
            Box::new(Self { script })
        }
    }

    impl GazeTracker for ScriptedTracker {
        fn next_gaze(
            &mut self,
        ) -> Result<Option<GazePoint>, GazecamError> {
            if self.script.is_empty() {
                Ok(None)
            } else {
                self.script.remove(0)
            }
        }
    }

    #[test]
    fn starts_in_webcam_mode_when_tracker_opened() {
        let source = GazeSource::with_tracker(ScriptedTracker::boxed(vec![]));
        assert_eq!(source.mode(), Mode::WebcamActive);
        assert!(source.webcam_available());
    }

    #[test]
    fn starts_in_fallback_mode_without_tracker() {
        let source = GazeSource::mouse_only();
        assert_eq!(source.mode(), Mode::MouseFallback);
        assert!(!source.webcam_available());
    }

    #[test]
    fn toggle_is_noop_without_tracker() {
        let mut source = GazeSource::mouse_only();
        assert_eq!(source.toggle(), Mode::MouseFallback);
        assert_eq!(source.mode(), Mode::MouseFallback);
    }

    #[test]
    fn toggle_is_reversible_with_tracker() {
        let mut source =
            GazeSource::with_tracker(ScriptedTracker::boxed(vec![]));
        assert_eq!(source.toggle(), Mode::MouseFallback);
        assert_eq!(source.toggle(), Mode::WebcamActive);
    }

    #[test]
    fn no_face_frames_hold_last_value() {
        let p = GazePoint::new(0.4, -0.2);
        let mut source = GazeSource::with_tracker(ScriptedTracker::boxed(
            vec![Ok(Some(p)), Ok(None), Ok(None)],
        ));
        let mouse = GazePoint::new(-0.9, 0.9);
        assert_eq!(source.sample(mouse), p);
        assert_eq!(source.sample(mouse), p);
        assert_eq!(source.sample(mouse), p);
    }

    #[test]
    fn capture_errors_hold_last_value() {
        let p = GazePoint::new(0.1, 0.1);
        let mut source = GazeSource::with_tracker(ScriptedTracker::boxed(
            vec![
                Ok(Some(p)),
                Err(GazecamError::Capture("frame read failed".into())),
            ],
        ));
        let mouse = GazePoint::CENTER;
        assert_eq!(source.sample(mouse), p);
        assert_eq!(source.sample(mouse), p);
    }

    #[test]
    fn fallback_mode_tracks_the_mouse() {
        let mut source = GazeSource::mouse_only();
        let mouse = GazePoint::new(0.7, 0.3);
        assert_eq!(source.sample(mouse), mouse);
        // Toggling back to webcam resumes tracker sampling.
        let mut source = GazeSource::with_tracker(ScriptedTracker::boxed(
            vec![Ok(Some(GazePoint::new(-0.5, 0.5)))],
        ));
        let _ = source.toggle();
        assert_eq!(source.sample(mouse), mouse);
        let _ = source.toggle();
        assert_eq!(source.sample(mouse), GazePoint::new(-0.5, 0.5));
    }
}
