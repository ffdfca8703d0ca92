use glam::Vec3;

/// Margin keeping the polar angle off the poles, where the azimuth is
/// undefined and the look-at up-vector cross product degenerates.
const POLE_MARGIN: f32 = 1e-6;

/// Spherical coordinates of a camera offset from its target.
///
/// Rotation is naturally expressed as angle increments, so the orbit
/// update converts the Cartesian offset to this form, applies deltas and
/// clamps, and converts back. The value is rebuilt from the offset every
/// frame and never persisted, which keeps floating-point error from
/// compounding across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the target. Non-negative.
    pub radius: f32,
    /// Polar angle from the +Y axis, in `[0, π]`.
    pub phi: f32,
    /// Azimuth angle around the +Y axis, measured from +Z toward +X.
    pub theta: f32,
}

impl Spherical {
    /// Convert a Cartesian offset into spherical coordinates.
    ///
    /// A zero offset maps to zero radius with both angles zero.
    #[must_use]
    pub fn from_cartesian(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_cartesian(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Nudge the polar angle off the exact poles.
    pub fn make_safe(&mut self) {
        self.phi = self
            .phi
            .max(POLE_MARGIN)
            .min(std::f32::consts::PI - POLE_MARGIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn round_trips_cartesian_offset() {
        let offsets = [
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(3.0, -4.0, 5.0),
            Vec3::new(-1.5, 2.5, -0.5),
        ];
        for offset in offsets {
            let back = Spherical::from_cartesian(offset).to_cartesian();
            assert!(
                (back - offset).length() < 1e-4,
                "round trip of {offset:?} gave {back:?}"
            );
        }
    }

    #[test]
    fn axis_aligned_angles() {
        // Offset along +Z: azimuth 0, polar π/2.
        let s = Spherical::from_cartesian(Vec3::new(0.0, 0.0, 10.0));
        assert!((s.radius - 10.0).abs() < 1e-6);
        assert!((s.phi - FRAC_PI_2).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);

        // Offset along +X: azimuth π/2.
        let s = Spherical::from_cartesian(Vec3::new(10.0, 0.0, 0.0));
        assert!((s.theta - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn zero_offset_is_degenerate_but_finite() {
        let s = Spherical::from_cartesian(Vec3::ZERO);
        assert_eq!(s.radius, 0.0);
        assert_eq!(s.phi, 0.0);
        assert_eq!(s.theta, 0.0);
        assert_eq!(s.to_cartesian(), Vec3::ZERO);
    }

    #[test]
    fn make_safe_keeps_phi_off_the_poles() {
        let mut s = Spherical {
            radius: 1.0,
            phi: 0.0,
            theta: 0.0,
        };
        s.make_safe();
        assert!(s.phi > 0.0);

        s.phi = PI;
        s.make_safe();
        assert!(s.phi < PI);
    }
}
