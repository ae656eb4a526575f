//! Input handling: platform-agnostic event types and the mouse and touch
//! gesture adapters that turn them into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Mouse gesture adapter.
pub mod mouse;
/// Touch gesture adapter.
pub mod touch;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use mouse::{MouseInput, CLICK_DRAG_LIMIT};
pub use touch::TouchInput;
