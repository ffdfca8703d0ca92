//! Platform-agnostic input events fed into the orbit controller by the
//! host's window or canvas layer.

/// Event, button, and touch-point types.
pub mod event;
/// Key-bindable pan directions.
pub mod keyboard;

pub use event::{InputEvent, PointerButton, TouchPoint};
pub use keyboard::PanDirection;
