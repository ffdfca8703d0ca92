use glam::Vec3;

/// Deltas accumulated by gesture handlers since the previous frame.
///
/// Mutated as events arrive, consumed exactly once by the per-frame
/// update, then reset to neutral. Neutral is rotation 0, scale 1, pan 0 —
/// a frame with a neutral delta leaves the camera untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDelta {
    /// Pending azimuth increment in radians.
    pub theta: f32,
    /// Pending polar increment in radians.
    pub phi: f32,
    /// Pending multiplicative zoom scale. Compounds across events within
    /// a frame; applied once as a single radius delta.
    pub scale: f32,
    /// Pending world-space offset for the focus target.
    pub pan: Vec3,
}

impl Default for PendingDelta {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            scale: 1.0,
            pan: Vec3::ZERO,
        }
    }
}

impl PendingDelta {
    /// Zero the rotation components.
    pub fn clear_rotation(&mut self) {
        self.theta = 0.0;
        self.phi = 0.0;
    }
}

/// The most recently applied rotation and zoom deltas, kept so damping can
/// seed the next frame's motion after input release.
///
/// `rotate_left`/`rotate_up` overwrite the rotation components on every
/// call — only the last input before release carries into the glide. The
/// zoom component holds the last radius delta and keeps decaying whether
/// or not a gesture is active, producing a gradual zoom settle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DampingMemory {
    /// Last applied azimuth delta in radians.
    pub theta: f32,
    /// Last applied polar delta in radians.
    pub phi: f32,
    /// Last applied radius delta in world units.
    pub zoom_frag: f32,
}

impl DampingMemory {
    /// Decay the remembered deltas and carry them into `delta` for the
    /// next frame.
    ///
    /// Rotation is seeded only when input has been `released`; while a
    /// gesture is still active the residual rotation is discarded so
    /// manual input fully overrides inertia. The zoom component is left in
    /// place either way and is re-applied by the update until it decays
    /// away.
    pub fn settle(
        &mut self,
        delta: &mut PendingDelta,
        damping_factor: f32,
        zoom_factor: f32,
        released: bool,
    ) {
        self.theta *= 1.0 - damping_factor;
        self.phi *= 1.0 - damping_factor;
        self.zoom_frag *= 1.0 - zoom_factor;

        if released {
            delta.theta = self.theta;
            delta.phi = self.phi;
        } else {
            delta.clear_rotation();
        }
    }
}
