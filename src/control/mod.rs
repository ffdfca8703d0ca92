//! The orbit controller: gesture selection, input differencing, pending
//! deltas, and the once-per-frame kinematics update that drains them.

/// Pending-delta accumulators and the inertial decay recurrence.
pub mod damping;
/// Active-gesture states and device-to-gesture binding tables.
pub mod gesture;
/// The orbit controller and its per-frame update.
pub mod orbit;
/// Screen-space start/end differencing for drag gestures.
pub(crate) mod tracker;

pub use gesture::{Gesture, MouseBindings, TouchBindings};
pub use orbit::{OrbitControl, Viewport};
