use glam::{Mat3, Mat4, Quat, Vec3};

/// Camera pose owned by the orbit controller.
///
/// `position` and `rotation` are derived state: the per-frame update
/// rewrites both from the spherical model, so external code should read
/// them but never write them between updates. `target` is the focus point
/// the pan gesture (and the host) may move; `up` is the reference up axis,
/// constant for the session.
pub struct CameraRig {
    /// Camera position in world space. Rewritten every update.
    pub position: Vec3,
    /// Camera orientation in world space. Rewritten every update.
    pub rotation: Quat,
    /// Look-at target position.
    pub target: Vec3,
    /// Reference up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees. Read by perspective-correct pan.
    pub fovy: f32,
}

impl CameraRig {
    /// Create a rig looking from `position` toward `target`, with +Y up
    /// and a 45° vertical field of view.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut rig = Self {
            position,
            rotation: Quat::IDENTITY,
            target,
            up: Vec3::Y,
            fovy: 45.0,
        };
        rig.look_at_target();
        rig
    }

    /// Rebuild `rotation` so the camera faces `target` with `up` as the
    /// reference up vector.
    ///
    /// Degenerate when the view direction is parallel to `up`; the orbit
    /// update's polar-angle margin keeps callers away from that pose, and
    /// the fallback axes below keep the result finite regardless.
    pub fn look_at_target(&mut self) {
        let back = (self.position - self.target).normalize_or(Vec3::Z);
        let right = self.up.cross(back).normalize_or(Vec3::X);
        let up = back.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, back));
    }

    /// World-space right axis (first basis column of the world transform).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World-space up axis (second basis column of the world transform).
    #[must_use]
    pub fn up_axis(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Normalized view direction, from the camera toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Right-handed view matrix for render integration.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}
