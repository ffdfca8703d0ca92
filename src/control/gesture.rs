use serde::{Deserialize, Serialize};

use crate::input::PointerButton;

/// The currently active interaction mode.
///
/// Exactly one is active at a time: the state is set when a gesture's
/// start condition is satisfied and cleared to `Idle` on release (or on an
/// unrecognized finger count). Making the states mutually exclusive is
/// what keeps concurrent gestures — rotate-while-zooming and the like —
/// impossible regardless of event ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No gesture in progress.
    Idle,
    /// Pointer-driven orbit rotation.
    Rotate,
    /// Pointer-driven dolly zoom (vertical drag).
    Zoom,
    /// Pointer-driven pan of the focus target.
    Pan,
    /// Single-finger orbit rotation.
    TouchRotate,
    /// Two-finger pinch zoom.
    TouchZoom,
    /// Multi-finger pan of the focus target.
    TouchPan,
}

/// Maps pointer buttons to gestures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MouseBindings {
    /// Button that starts an orbit rotation.
    pub rotate: PointerButton,
    /// Button that starts a drag zoom.
    pub zoom: PointerButton,
    /// Button that starts a pan.
    pub pan: PointerButton,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            rotate: PointerButton::Primary,
            zoom: PointerButton::Middle,
            pan: PointerButton::Secondary,
        }
    }
}

impl MouseBindings {
    /// Gesture bound to `button`, if any.
    #[must_use]
    pub fn gesture_for(&self, button: PointerButton) -> Option<Gesture> {
        if button == self.rotate {
            Some(Gesture::Rotate)
        } else if button == self.zoom {
            Some(Gesture::Zoom)
        } else if button == self.pan {
            Some(Gesture::Pan)
        } else {
            None
        }
    }
}

/// Maps active-finger counts to touch gestures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TouchBindings {
    /// Finger count that starts an orbit rotation.
    pub rotate: u8,
    /// Finger count that starts a pinch zoom.
    pub zoom: u8,
    /// Finger count that starts a pan.
    pub pan: u8,
}

impl Default for TouchBindings {
    fn default() -> Self {
        Self {
            rotate: 1,
            zoom: 2,
            pan: 3,
        }
    }
}

impl TouchBindings {
    /// Gesture bound to `fingers` active touch points, if any.
    #[must_use]
    pub fn gesture_for(&self, fingers: usize) -> Option<Gesture> {
        if fingers == usize::from(self.rotate) {
            Some(Gesture::TouchRotate)
        } else if fingers == usize::from(self.zoom) {
            Some(Gesture::TouchZoom)
        } else if fingers == usize::from(self.pan) {
            Some(Gesture::TouchPan)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mouse_bindings() {
        let bindings = MouseBindings::default();
        assert_eq!(
            bindings.gesture_for(PointerButton::Primary),
            Some(Gesture::Rotate)
        );
        assert_eq!(
            bindings.gesture_for(PointerButton::Middle),
            Some(Gesture::Zoom)
        );
        assert_eq!(
            bindings.gesture_for(PointerButton::Secondary),
            Some(Gesture::Pan)
        );
    }

    #[test]
    fn default_touch_bindings() {
        let bindings = TouchBindings::default();
        assert_eq!(bindings.gesture_for(1), Some(Gesture::TouchRotate));
        assert_eq!(bindings.gesture_for(2), Some(Gesture::TouchZoom));
        assert_eq!(bindings.gesture_for(3), Some(Gesture::TouchPan));
        assert_eq!(bindings.gesture_for(0), None);
        assert_eq!(bindings.gesture_for(4), None);
    }

    #[test]
    fn remapped_touch_bindings() {
        let bindings = TouchBindings {
            rotate: 2,
            zoom: 1,
            pan: 3,
        };
        assert_eq!(bindings.gesture_for(2), Some(Gesture::TouchRotate));
        assert_eq!(bindings.gesture_for(1), Some(Gesture::TouchZoom));
    }
}
