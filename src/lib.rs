// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Gaze-driven camera control demo built on wgpu.
//!
//! Gazecam samples a gaze point each frame — from a webcam gaze tracker
//! when one is available, otherwise from the mouse position — smooths and
//! shapes it, and eases a 3D camera's yaw and pitch toward where the user
//! is looking. The scene is a wireframe grid and a handful of colored
//! cubes; the cube the gaze rests on is highlighted, and a HUD overlay
//! shows a center crosshair plus a marker at the smoothed gaze position.
//! Left-click shoots the highlighted cube, which respawns elsewhere in
//! the scene.
//!
//! # Key entry points
//!
//! - [`Viewer`] - standalone window running the demo (needs the `viewer`
//!   feature)
//! - [`engine::GazeEngine`] - the per-frame engine (sample → ease → draw)
//! - [`options::Options`] - runtime configuration (gaze, camera, display,
//!   keybindings)
//! - [`gaze::GazeSource`] - webcam / mouse-fallback sampling
//!
//! # Pipeline
//!
//! Raw gaze points pass through an exponential smoothing filter with a
//! center dead zone, map to target yaw/pitch angles clamped to configured
//! limits, and the camera eases toward those targets every frame. Webcam
//! capture sits behind the `webcam` feature (OpenCV); without it, or when
//! no camera opens, the demo runs entirely on the mouse fallback.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gaze;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::GazecamError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
