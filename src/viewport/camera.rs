//! Orbit camera: spherical coordinates around a fixed look-at point.

use crate::math::{Matrix4x4, Vector3};

pub const DISTANCE_MIN: f32 = 0.02;
pub const DISTANCE_MAX: f32 = 10_000.0;
/// Near clipping plane distance.
pub const Z_NEAR: f32 = DISTANCE_MIN / 2.0;
/// Far clipping plane distance.
pub const Z_FAR: f32 = DISTANCE_MAX * 2.0;

/// Orbit camera. Angles are in degrees and wrap modulo 360; the camera
/// position is derived from spherical coordinates around the look-at
/// point (Z-up convention).
pub struct OrbitCamera {
    /// Horizontal orbit angle (degrees)
    pub rot_h: f32,
    /// Vertical orbit angle (degrees)
    pub rot_v: f32,
    /// Distance from the look-at point, clamped to [DISTANCE_MIN, DISTANCE_MAX]
    pub distance: f32,
    position: Vector3,
    look_at: Vector3,
    up: Vector3,
    initial_distance: f32,
    fov_y: f32,
    zoom_sensitivity: f32,
}

impl OrbitCamera {
    /// Camera at the default pose: on the +X axis, looking at the origin,
    /// +Z up.
    pub fn new(fov_y: f32, zoom_sensitivity: f32) -> Self {
        let position = Vector3::new(10.0, 0.0, 0.0);
        let distance = position.length();
        Self {
            rot_h: 0.0,
            rot_v: 0.0,
            distance,
            position,
            look_at: Vector3::ZERO,
            up: Vector3::new(0.0, 0.0, 1.0),
            initial_distance: distance,
            fov_y,
            zoom_sensitivity,
        }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Orbit by a mouse-move delta scaled by `sensitivity`.
    pub fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.rot_h = (self.rot_h + dx * sensitivity) % 360.0;
        self.rot_v = (self.rot_v + dy * sensitivity) % 360.0;
        self.update_position();
    }

    /// Zoom by a scroll offset. Sensitivity scales with the current
    /// distance so zooming feels proportional at any scale.
    pub fn zoom(&mut self, offset: f32) {
        let speed = (self.distance / self.initial_distance) * self.zoom_sensitivity;
        self.distance = (self.distance - offset * speed).clamp(DISTANCE_MIN, DISTANCE_MAX);
        self.update_position();
    }

    /// Jump to fixed orbit angles (the axis-aligned view presets).
    pub fn set_view(&mut self, rot_h: f32, rot_v: f32) {
        self.rot_h = rot_h;
        self.rot_v = rot_v;
        self.update_position();
    }

    fn update_position(&mut self) {
        let h = self.rot_h.to_radians();
        let v = self.rot_v.to_radians();
        // -sin(h) on y compensates for rotation handedness under Z-up.
        self.position = Vector3::new(
            self.distance * v.cos() * h.cos(),
            self.distance * v.cos() * -h.sin(),
            self.distance * v.sin(),
        );
    }

    /// View matrix for the current pose (world -> camera).
    pub fn view_matrix(&self) -> Matrix4x4 {
        look_at(self.position, self.look_at, self.up)
    }

    /// Projection matrix for the current FOV and the given aspect ratio
    /// (camera -> clip).
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4x4 {
        perspective(self.fov_y, aspect)
    }
}

/// Build a view matrix from an eye point, a look-at point, and an up hint:
/// forward and side vectors are normalized, the effective up vector is
/// recomputed as side x forward, and the result is composed column-major.
pub fn look_at(eye: Vector3, center: Vector3, up: Vector3) -> Matrix4x4 {
    let forward = (center - eye).normalize();
    let side = forward.cross(up).normalize();
    let up = side.cross(forward);

    Matrix4x4::new([
        side.x,
        up.x,
        -forward.x,
        0.0,
        side.y,
        up.y,
        -forward.y,
        0.0,
        side.z,
        up.z,
        -forward.z,
        0.0,
        -side.dot(eye),
        -up.dot(eye),
        forward.dot(eye),
        1.0,
    ])
}

/// Symmetric perspective frustum from a vertical FOV in degrees.
pub fn perspective(fov_y: f32, aspect: f32) -> Matrix4x4 {
    let half_h = (fov_y.to_radians() / 2.0).tan() * Z_NEAR;
    let half_w = half_h * aspect;
    frustum(-half_w, half_w, -half_h, half_h, Z_NEAR, Z_FAR)
}

fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4x4 {
    Matrix4x4::new([
        2.0 * near / (right - left),
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * near / (top - bottom),
        0.0,
        0.0,
        (right + left) / (right - left),
        (top + bottom) / (top - bottom),
        -(far + near) / (far - near),
        -1.0,
        0.0,
        0.0,
        -2.0 * far * near / (far - near),
        0.0,
    ])
}
