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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera controls for real-time 3D viewers.
//!
//! Gimbal turns pointer, touch, and keyboard input into a smoothly damped
//! orbit/pan/zoom camera trajectory around a focus point. Input events
//! arrive asynchronously and accumulate into small pending deltas; once per
//! render tick the host calls [`control::OrbitControl::update`], which
//! drains the deltas through a spherical-coordinate camera model, clamps
//! angles and distance to the configured bounds, and rebuilds the camera
//! pose from scratch so floating-point error never compounds across frames.
//!
//! # Key entry points
//!
//! - [`control::OrbitControl`] - the orbit controller
//! - [`camera::CameraRig`] - camera pose (position, orientation, target)
//! - [`input::InputEvent`] - platform-agnostic event type fed by the host
//! - [`options::OrbitOptions`] - runtime configuration (bounds, speeds,
//!   damping, bindings)
//!
//! # Architecture
//!
//! Event handlers only mutate delta accumulators and the active-gesture
//! state; they never touch the camera pose. The per-frame update owns the
//! pose exclusively: host code reads it between updates and must not write
//! it mid-frame, or the orbit will drift. Everything runs on the host's
//! render thread — there is no internal locking or scheduling.

pub mod camera;
pub mod control;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
