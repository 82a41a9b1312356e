//! Camera system for the gaze-controlled scene view.
//!
//! The pure gaze-to-orientation mapping lives in [`rig`]; [`controller`]
//! wraps it with the GPU uniform plumbing.

/// Camera controller owning the rig and GPU resources.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Pure gaze-to-yaw/pitch mapping with smoothing and clamping.
pub mod rig;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
pub use rig::CameraRig;
