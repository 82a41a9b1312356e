//! Scene and overlay rendering for the demo.
//!
//! Two line-list passes: the wireframe world (grid + cubes) under the
//! camera transform, and a clip-space HUD (crosshair + gaze marker).

/// Crosshair and gaze marker overlay.
pub mod hud;
/// Wireframe grid-and-cubes scene.
pub mod scene;

pub use hud::HudRenderer;
pub use scene::{Cube, SceneRenderer, CLEAR_COLOR};
