use glam::{Vec2, Vec3};

use crate::camera::rig::CameraRig;
use crate::camera::spherical::Spherical;
use crate::control::damping::{DampingMemory, PendingDelta};
use crate::control::gesture::Gesture;
use crate::control::tracker::DragTracker;
use crate::input::event::{InputEvent, PointerButton, TouchPoint};
use crate::input::keyboard::PanDirection;
use crate::options::OrbitOptions;

/// Viewport dimensions in physical pixels, injected by the host and
/// refreshed through [`OrbitControl::resize`] — never read from ambient
/// platform globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: f32,
    /// Height in physical pixels.
    pub height: f32,
}

impl Viewport {
    /// Construct a viewport from pixel dimensions.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// The orbit controller: rotates, zooms, and pans a camera around a focus
/// target.
///
/// Event handlers ([`handle_event`](Self::handle_event) or the motion
/// primitives) accumulate pending deltas as input arrives; the host calls
/// [`update`](Self::update) once per render tick to drain them into the
/// [`CameraRig`]. The rig's offset from the target is converted to
/// spherical coordinates, angle and radius deltas are applied and clamped,
/// and the Cartesian pose is rebuilt from scratch — the spherical form is
/// never carried across frames, so floating-point error cannot compound.
pub struct OrbitControl {
    /// Runtime configuration: bounds, speeds, toggles, bindings.
    pub options: OrbitOptions,
    /// Camera pose. Rewritten by [`update`](Self::update); host code reads
    /// it between updates and must not write position or rotation.
    pub rig: CameraRig,
    /// Master switch. While false, event handlers and the per-frame update
    /// return immediately; accumulated deltas are kept, not reset.
    pub enabled: bool,

    viewport: Viewport,
    state: Gesture,
    /// True when no button or finger is down. Gates damping seeding.
    released: bool,
    delta: PendingDelta,
    memory: DampingMemory,

    rotate_track: DragTracker,
    zoom_track: DragTracker,
    pan_track: DragTracker,
}

impl OrbitControl {
    /// Create a controller for `rig` with the given options and viewport.
    #[must_use]
    pub fn new(
        rig: CameraRig,
        options: OrbitOptions,
        viewport: Viewport,
    ) -> Self {
        Self {
            options,
            rig,
            enabled: true,
            viewport,
            state: Gesture::Idle,
            released: true,
            delta: PendingDelta::default(),
            memory: DampingMemory::default(),
            rotate_track: DragTracker::default(),
            zoom_track: DragTracker::default(),
            pan_track: DragTracker::default(),
        }
    }

    /// Update the viewport dimensions after a host resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// The currently active gesture.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.state
    }

    /// Multiplicative scale step for one zoom event: `0.95 ^ zoom_speed`.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.options.zoom_speed)
    }

    // -- Per-frame update -------------------------------------------------

    /// Drain accumulated deltas into the camera pose.
    ///
    /// `dt_ms` is the elapsed time since the previous tick in
    /// milliseconds, supplied by the host's frame scheduler. Deltas
    /// gathered since the last call are applied atomically: offset →
    /// spherical, angle deltas and clamps, one-shot radius delta, pan,
    /// Cartesian rebuild, look-at, then the damping hand-off and a reset
    /// of the pending delta to neutral.
    pub fn update(&mut self, dt_ms: f32) {
        if !self.enabled {
            return;
        }

        let offset = self.rig.position - self.rig.target;
        let mut spherical = Spherical::from_cartesian(offset);

        if self.options.auto_rotate && self.state == Gesture::Idle {
            self.rotate_left(self.auto_rotation_angle(dt_ms));
        }

        spherical.theta += self.delta.theta;
        spherical.phi += self.delta.phi;

        // min/max composition instead of clamp: configured bounds may be
        // infinite or inverted.
        spherical.theta = spherical
            .theta
            .min(self.options.max_azimuth_angle)
            .max(self.options.min_azimuth_angle);
        spherical.phi = spherical
            .phi
            .min(self.options.max_polar_angle)
            .max(self.options.min_polar_angle);
        spherical.make_safe();

        if self.delta.scale != 1.0 {
            self.memory.zoom_frag = spherical.radius * (self.delta.scale - 1.0);
        }
        spherical.radius += self.memory.zoom_frag;
        spherical.radius = spherical
            .radius
            .min(self.options.max_distance)
            .max(self.options.min_distance);

        self.rig.target += self.delta.pan;
        self.rig.position = self.rig.target + spherical.to_cartesian();
        self.rig.look_at_target();

        if self.options.enable_damping {
            self.memory.settle(
                &mut self.delta,
                self.options.damping_factor,
                self.options.zoom_factor,
                self.released,
            );
        } else {
            self.delta.clear_rotation();
            self.memory.zoom_frag = 0.0;
        }

        self.delta.scale = 1.0;
        self.delta.pan = Vec3::ZERO;
    }

    /// Azimuth increment for auto-rotation over `dt_ms` milliseconds,
    /// from the configured seconds-per-revolution period.
    fn auto_rotation_angle(&self, dt_ms: f32) -> f32 {
        (std::f32::consts::TAU / self.options.auto_rotate_speed / 1000.0)
            * dt_ms
    }

    // -- Motion primitives ------------------------------------------------

    /// Rotate left around the target by `radian`.
    pub fn rotate_left(&mut self, radian: f32) {
        self.delta.theta -= radian;
        if self.options.enable_damping {
            self.memory.theta = -radian;
        }
    }

    /// Rotate up around the target by `radian`.
    pub fn rotate_up(&mut self, radian: f32) {
        self.delta.phi -= radian;
        if self.options.enable_damping {
            self.memory.phi = -radian;
        }
    }

    /// Multiply the pending zoom scale.
    ///
    /// A scale above 1 produces a positive radius increment on the next
    /// update. Interactive zoom passes [`zoom_scale`](Self::zoom_scale),
    /// which is below 1, so "zoom in" moves the camera closer.
    pub fn zoom_in(&mut self, zoom_scale: f32) {
        self.delta.scale *= zoom_scale;
    }

    /// Divide the pending zoom scale. Inverse of [`zoom_in`](Self::zoom_in).
    pub fn zoom_out(&mut self, zoom_scale: f32) {
        self.delta.scale /= zoom_scale;
    }

    /// Pan the focus target by a screen-space delta, scaled so a drag
    /// tracks the world plane through the target at any zoom level.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        if !self.viewport.is_valid() {
            return;
        }
        let offset = self.rig.position - self.rig.target;
        let target_distance =
            offset.length() * (self.rig.fovy.to_radians() * 0.5).tan();

        self.pan_left(-2.0 * delta_x * (target_distance / self.viewport.width));
        self.pan_up(2.0 * delta_y * (target_distance / self.viewport.height));
    }

    /// Accumulate a pan along the camera's world right axis.
    fn pan_left(&mut self, distance: f32) {
        self.delta.pan += self.rig.right() * distance;
    }

    /// Accumulate a pan along the camera's world up axis.
    fn pan_up(&mut self, distance: f32) {
        self.delta.pan += self.rig.up_axis() * distance;
    }

    // -- Event handling ---------------------------------------------------

    /// Process a platform-agnostic input event.
    ///
    /// Returns whether the event was consumed. Only accumulators and the
    /// gesture state change here; the camera pose moves on the next
    /// [`update`](Self::update).
    pub fn handle_event(&mut self, event: InputEvent<'_>) -> bool {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                self.on_pointer_down(x, y, button)
            }
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Scroll { delta } => self.on_scroll(delta),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches),
            InputEvent::TouchMoved { touches } => self.on_touch_moved(touches),
            InputEvent::TouchEnd => self.on_touch_end(),
            InputEvent::KeyDown { key } => self.on_key_down(key),
        }
    }

    fn on_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: PointerButton,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        // Input counts as held from here on, even if the gesture below is
        // rejected; release is what re-arms damping seeding.
        self.released = false;

        let Some(gesture) = self.options.mouse.gesture_for(button) else {
            return false;
        };
        let point = Vec2::new(x, y);
        match gesture {
            Gesture::Rotate if self.options.enable_rotate => {
                self.rotate_track.begin(point);
            }
            Gesture::Zoom if self.options.enable_zoom => {
                self.zoom_track.begin(point);
            }
            Gesture::Pan if self.options.enable_pan => {
                self.pan_track.begin(point);
            }
            _ => return false,
        }
        log::debug!("gesture start: {gesture:?}");
        self.state = gesture;
        true
    }

    fn on_pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let point = Vec2::new(x, y);
        match self.state {
            Gesture::Rotate if self.options.enable_rotate => {
                let delta = self.rotate_track.advance(point);
                self.apply_rotate_delta(delta);
                true
            }
            Gesture::Zoom if self.options.enable_zoom => {
                let delta = self.zoom_track.advance(point);
                self.apply_zoom_delta(delta.y);
                true
            }
            Gesture::Pan if self.options.enable_pan => {
                let delta = self.pan_track.advance(point);
                self.pan(delta.x, delta.y);
                true
            }
            _ => false,
        }
    }

    fn on_pointer_up(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.state != Gesture::Idle {
            log::debug!("gesture end: {:?}", self.state);
        }
        self.released = true;
        self.state = Gesture::Idle;
        true
    }

    fn on_scroll(&mut self, delta: f32) -> bool {
        if !self.enabled || !self.options.enable_zoom {
            return false;
        }
        // Wheel zoom is accepted while idle or orbiting, never mid-pan or
        // mid-drag-zoom.
        if self.state != Gesture::Idle && self.state != Gesture::Rotate {
            return false;
        }
        if delta > 0.0 {
            self.zoom_in(self.zoom_scale());
        } else if delta < 0.0 {
            self.zoom_out(self.zoom_scale());
        }
        true
    }

    fn on_touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        if !self.enabled {
            return false;
        }
        self.released = false;

        match self.options.touch.gesture_for(touches.len()) {
            Some(Gesture::TouchRotate) if self.options.enable_rotate => {
                let Some(point) = first_point(touches) else {
                    return false;
                };
                self.rotate_track.begin(point);
                self.start_touch(Gesture::TouchRotate)
            }
            Some(Gesture::TouchZoom) if self.options.enable_zoom => {
                let Some(extent) = pinch_extent(touches) else {
                    return false;
                };
                self.zoom_track.begin(extent);
                self.start_touch(Gesture::TouchZoom)
            }
            Some(Gesture::TouchPan) if self.options.enable_pan => {
                let Some(point) = first_point(touches) else {
                    return false;
                };
                self.pan_track.begin(point);
                self.start_touch(Gesture::TouchPan)
            }
            Some(_) => false,
            None => {
                // Unrecognized finger count recovers to idle.
                self.state = Gesture::Idle;
                false
            }
        }
    }

    fn start_touch(&mut self, gesture: Gesture) -> bool {
        log::debug!("gesture start: {gesture:?}");
        self.state = gesture;
        true
    }

    fn on_touch_moved(&mut self, touches: &[TouchPoint]) -> bool {
        if !self.enabled {
            return false;
        }
        match self.options.touch.gesture_for(touches.len()) {
            Some(Gesture::TouchRotate)
                if self.options.enable_rotate
                    && self.state == Gesture::TouchRotate =>
            {
                let Some(point) = first_point(touches) else {
                    return false;
                };
                let delta = self.rotate_track.advance(point);
                self.apply_rotate_delta(delta);
                true
            }
            Some(Gesture::TouchZoom)
                if self.options.enable_zoom
                    && self.state == Gesture::TouchZoom =>
            {
                let Some(extent) = pinch_extent(touches) else {
                    return false;
                };
                let delta = self.zoom_track.advance(extent);
                self.apply_zoom_delta(delta.y);
                true
            }
            Some(Gesture::TouchPan)
                if self.options.enable_pan
                    && self.state == Gesture::TouchPan =>
            {
                let Some(point) = first_point(touches) else {
                    return false;
                };
                let delta = self.pan_track.advance(point);
                self.pan(delta.x, delta.y);
                true
            }
            Some(_) => false,
            None => {
                self.state = Gesture::Idle;
                false
            }
        }
    }

    fn on_touch_end(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.state != Gesture::Idle {
            log::debug!("gesture end: {:?}", self.state);
        }
        self.released = true;
        self.state = Gesture::Idle;
        true
    }

    fn on_key_down(&mut self, key: &str) -> bool {
        if !self.enabled
            || !self.options.enable_keys
            || !self.options.enable_pan
        {
            return false;
        }
        let Some(direction) = self.options.keys.lookup(key) else {
            return false;
        };
        let speed = self.options.key_pan_speed;
        match direction {
            PanDirection::Up => self.pan(0.0, speed),
            PanDirection::Down => self.pan(0.0, -speed),
            PanDirection::Left => self.pan(speed, 0.0),
            PanDirection::Right => self.pan(-speed, 0.0),
        }
        true
    }

    /// Convert a screen-space drag delta into angle increments, one full
    /// revolution per viewport dimension at rotate speed 1.
    fn apply_rotate_delta(&mut self, delta: Vec2) {
        if !self.viewport.is_valid() {
            return;
        }
        let tau = std::f32::consts::TAU;
        self.rotate_left(
            tau * delta.x / self.viewport.width * self.options.rotate_speed,
        );
        self.rotate_up(
            tau * delta.y / self.viewport.height * self.options.rotate_speed,
        );
    }

    /// One zoom step per move event: a growing extent multiplies the
    /// pending scale, a shrinking one divides it. Never both.
    fn apply_zoom_delta(&mut self, dy: f32) {
        if dy > 0.0 {
            self.zoom_in(self.zoom_scale());
        } else if dy < 0.0 {
            self.zoom_out(self.zoom_scale());
        }
    }
}

/// First touch point as a screen-space vector.
fn first_point(touches: &[TouchPoint]) -> Option<Vec2> {
    touches.first().map(|t| Vec2::new(t.x, t.y))
}

/// Inter-finger distance of the first two touches, stored as `(0, d)` so
/// the 1D pinch quantity runs through the same differencing as 2D drags.
fn pinch_extent(touches: &[TouchPoint]) -> Option<Vec2> {
    let [a, b, ..] = touches else {
        return None;
    };
    Some(Vec2::new(0.0, (a.x - b.x).hypot(a.y - b.y)))
}
