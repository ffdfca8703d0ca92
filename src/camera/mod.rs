//! Camera pose and the spherical-coordinate model behind orbiting.

/// Camera pose: position, orientation, focus target, and projection fov.
pub mod rig;
/// Spherical (radius, polar, azimuth) coordinate conversions.
pub mod spherical;

pub use rig::CameraRig;
pub use spherical::Spherical;
