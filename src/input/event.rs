use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into [`OrbitControl::handle_event`](crate::control::OrbitControl::handle_event),
/// which routes them through the gesture state machine and into the
/// pending-delta accumulators.
///
/// # Example
///
/// ```ignore
/// let consumed = control.handle_event(InputEvent::PointerMoved {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<'a> {
    /// Pointer button pressed at a screen position.
    PointerDown {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
        /// Which button went down.
        button: PointerButton,
    },
    /// Pointer moved to an absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button released.
    PointerUp,
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Touch gesture began; carries every currently active touch point in
    /// contact order.
    TouchStart {
        /// Active touch points.
        touches: &'a [TouchPoint],
    },
    /// Active touch points moved.
    TouchMoved {
        /// Active touch points.
        touches: &'a [TouchPoint],
    },
    /// All fingers lifted.
    TouchEnd,
    /// Keyboard key pressed.
    KeyDown {
        /// Physical key string in `winit::keyboard::KeyCode` debug format:
        /// `"ArrowLeft"`, `"ArrowUp"`, etc.
        key: &'a str,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (left) pointer button.
    Primary,
    /// Secondary (right) pointer button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// One active touch point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels.
    pub y: f32,
}

impl TouchPoint {
    /// Construct a touch point from screen coordinates.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}
