//! Input handling: event types, key actions, and the processor that turns
//! raw window events into the cursor-derived gaze state.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable demo actions.
pub mod keyboard;
/// Cursor tracking and normalization.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
