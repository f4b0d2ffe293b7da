//! Orbit camera: rotate/zoom/pan around a look-at target, with auto-rotate.
//!
//! Right-handed, y-up, perspective projection. The camera eye is derived
//! from yaw/pitch/distance around the target; `look_at_rh` builds the view.
//! Auto-rotate advances the azimuth at a fixed angular rate, but only while
//! no manual rotate drag is active.

use glam::{Mat4, Vec3, Vec4};

use crate::constants::{
    AUTO_ROTATE_RATE, CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_CAMERA_DISTANCE,
    MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, PAN_SENSITIVITY, PITCH_LIMIT, ROTATE_SENSITIVITY,
    ZOOM_STEP,
};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Vec3,
    pub auto_rotate: bool,
    rotating: bool,
    panning: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_CAMERA_DISTANCE,
            target: Vec3::ZERO,
            auto_rotate: true,
            rotating: false,
            panning: false,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World-space eye position. At yaw = pitch = 0 the camera sits on the
    /// +Z axis looking back at the target.
    pub fn eye(&self) -> Vec3 {
        self.target
            + self.distance
                * Vec3::new(
                    self.yaw.sin() * self.pitch.cos(),
                    self.pitch.sin(),
                    self.yaw.cos() * self.pitch.cos(),
                )
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Clip-space projection for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn begin_rotate(&mut self) {
        self.rotating = true;
    }

    pub fn end_rotate(&mut self) {
        self.rotating = false;
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn begin_pan(&mut self) {
        self.panning = true;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Apply a rotate drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + dy * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a pan drag of `(dx, dy)` pixels, translating the look-at target
    /// in the camera's screen plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let step = self.distance * PAN_SENSITIVITY;
        self.target += right * (-dx * step) + up * (dy * step);
    }

    /// Apply a zoom of `scroll` lines; distance stays within its clamp.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance =
            (self.distance - scroll * ZOOM_STEP).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    /// Advance auto-rotation by `dt` seconds. Frozen during a rotate drag.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate && !self.rotating {
            self.yaw += AUTO_ROTATE_RATE * dt;
        }
    }

    /// Compute a world-space ray from pixel coordinates on a surface of
    /// `width` x `height` pixels.
    ///
    /// Returns `(ray_origin, ray_direction)` with the direction normalized.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = self.view_proj(aspect).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let origin = self.eye();
        (origin, (p_far - origin).normalize())
    }
}
