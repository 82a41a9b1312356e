//! Gaze sampling: the per-frame pipeline from input device to a smoothed,
//! normalized 2D gaze estimate.

/// Exponential smoothing and dead-zone shaping.
pub mod filter;
/// Normalized 2D gaze coordinate type.
pub mod point;
/// Mode state machine and hold-last-value sampling.
pub mod source;
/// Webcam + landmark-detection tracker seam.
pub mod tracker;

pub use filter::GazeFilter;
pub use point::GazePoint;
pub use source::{GazeSource, Mode};
pub use tracker::GazeTracker;
