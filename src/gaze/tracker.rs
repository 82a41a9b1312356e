//! The seam to the webcam + face-landmark collaborator.
//!
//! The engine only ever talks to [`GazeTracker`]; the concrete
//! [`WebcamTracker`] (OpenCV capture + Haar cascades) lives behind the
//! `webcam` Cargo feature so the demo builds and runs without a native
//! OpenCV installation. Without the feature, [`open_default`] always fails
//! and the caller downgrades to mouse fallback.

use super::point::GazePoint;
use crate::error::GazecamError;

/// Per-frame gaze estimation from an external capture + detection backend.
pub trait GazeTracker {
    /// Capture one frame and derive a gaze estimate.
    ///
    /// `Ok(None)` means the frame was captured but no face was found (a
    /// transient condition the caller recovers from by holding the previous
    /// value).
    ///
    /// # Errors
    ///
    /// Returns [`GazecamError::Capture`] when the frame could not be read or
    /// the detector failed; the caller treats this the same as `Ok(None)`.
    fn next_gaze(&mut self) -> Result<Option<GazePoint>, GazecamError>;
}

/// Try to open the default webcam-backed tracker.
///
/// # Errors
///
/// Returns [`GazecamError::Capture`] when the camera cannot be opened, the
/// detector models cannot be loaded, or the crate was built without the
/// `webcam` feature.
#[cfg(feature = "webcam")]
pub fn open_default(
    camera_index: i32,
) -> Result<Box<dyn GazeTracker>, GazecamError> {
    webcam::WebcamTracker::open(camera_index)
        .map(|t| Box::new(t) as Box<dyn GazeTracker>)
}

/// Try to open the default webcam-backed tracker.
///
/// # Errors
///
/// Always fails: this build does not carry the `webcam` feature.
#[cfg(not(feature = "webcam"))]
pub fn open_default(
    _camera_index: i32,
) -> Result<Box<dyn GazeTracker>, GazecamError> {
    Err(GazecamError::Capture(
        "built without the `webcam` feature".into(),
    ))
}

#[cfg(feature = "webcam")]
mod webcam {
    use opencv::core::{Mat, Rect, Size, Vector};
    use opencv::prelude::{
        CascadeClassifierTrait, MatTraitConst, VideoCaptureTrait,
        VideoCaptureTraitConst,
    };
    use opencv::{imgproc, objdetect, videoio};

    use super::{GazePoint, GazeTracker, GazecamError};

    /// Default install locations for the OpenCV Haar cascade data files.
    const FACE_CASCADE: &str =
        "/usr/share/opencv4/haarcascades/haarcascade_frontalface_default.xml";
    const EYE_CASCADE: &str =
        "/usr/share/opencv4/haarcascades/haarcascade_eye.xml";

    fn capture_err(e: opencv::Error) -> GazecamError {
        GazecamError::Capture(e.to_string())
    }

    /// Haar-cascade gaze estimator over an OpenCV video capture.
    ///
    /// A face is located first, then eyes within the face region; the gaze
    /// estimate is the mean of the eye centers normalized to the frame.
    /// When no eyes are found the face center stands in as a coarse
    /// estimate.
    pub(super) struct WebcamTracker {
        capture: videoio::VideoCapture,
        face_cascade: objdetect::CascadeClassifier,
        eye_cascade: objdetect::CascadeClassifier,
        frame: Mat,
        gray: Mat,
    }

    impl WebcamTracker {
        /// Open the camera at `camera_index` and load the cascade models.
        pub(super) fn open(
            camera_index: i32,
        ) -> Result<Self, GazecamError> {
            let capture =
                videoio::VideoCapture::new(camera_index, videoio::CAP_ANY)
                    .map_err(capture_err)?;
            if !capture.is_opened().map_err(capture_err)? {
                return Err(GazecamError::Capture(format!(
                    "camera {camera_index} unavailable"
                )));
            }

            let face_cascade =
                objdetect::CascadeClassifier::new(FACE_CASCADE)
                    .map_err(capture_err)?;
            let eye_cascade = objdetect::CascadeClassifier::new(EYE_CASCADE)
                .map_err(capture_err)?;

            log::info!("webcam tracker opened on camera {camera_index}");
            Ok(Self {
                capture,
                face_cascade,
                eye_cascade,
                frame: Mat::default(),
                gray: Mat::default(),
            })
        }

        fn detect(
            cascade: &mut objdetect::CascadeClassifier,
            image: &Mat,
            min_size: i32,
        ) -> Result<Vector<Rect>, GazecamError> {
            let mut found = Vector::new();
            cascade
                .detect_multi_scale(
                    image,
                    &mut found,
                    1.1,
                    3,
                    0,
                    Size::new(min_size, min_size),
                    Size::new(0, 0),
                )
                .map_err(capture_err)?;
            Ok(found)
        }
    }

    impl GazeTracker for WebcamTracker {
        fn next_gaze(
            &mut self,
        ) -> Result<Option<GazePoint>, GazecamError> {
            if !self.capture.read(&mut self.frame).map_err(capture_err)? {
                return Err(GazecamError::Capture("frame read failed".into()));
            }

            imgproc::cvt_color(
                &self.frame,
                &mut self.gray,
                imgproc::COLOR_BGR2GRAY,
                0,
            )
            .map_err(capture_err)?;

            let faces = Self::detect(&mut self.face_cascade, &self.gray, 30)?;
            let Some(face) = faces.iter().next() else {
                return Ok(None);
            };

            let frame_w = self.gray.cols() as f32;
            let frame_h = self.gray.rows() as f32;

            let face_roi =
                Mat::roi(&self.gray, face).map_err(capture_err)?;
            let eyes = Self::detect(
                &mut self.eye_cascade,
                &face_roi.clone_pointee(),
                20,
            )?;

            // Mean of eye centers in frame coordinates; face center when no
            // eyes were found this frame.
            let (cx, cy) = if eyes.is_empty() {
                (
                    face.x as f32 + face.width as f32 / 2.0,
                    face.y as f32 + face.height as f32 / 2.0,
                )
            } else {
                let n = eyes.len() as f32;
                let (sx, sy) = eyes.iter().fold((0.0, 0.0), |(sx, sy), e| {
                    (
                        sx + (face.x + e.x) as f32 + e.width as f32 / 2.0,
                        sy + (face.y + e.y) as f32 + e.height as f32 / 2.0,
                    )
                });
                (sx / n, sy / n)
            };

            Ok(Some(GazePoint::from_unit(cx / frame_w, cy / frame_h)))
        }
    }
}
