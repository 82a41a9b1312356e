//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization for the demo's renderers.

/// wgpu device, surface, and queue initialization.
pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
