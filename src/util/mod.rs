//! Small host-facing utilities.

/// Frame clock measuring elapsed milliseconds between render ticks.
pub mod frame_clock;

pub use frame_clock::FrameClock;
