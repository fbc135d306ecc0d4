//! Pinhole camera description.

use glint_math::{magnitude, normalized, Vec3};

/// Camera position, orientation and field of view.
///
/// `up` is used exactly as given. It is expected to be unit length and
/// perpendicular to `forward`; nothing here re-orthogonalizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye point (look-from)
    pub position: Vec3,
    /// Look-at point relative to `position`
    pub relative_look_at: Vec3,
    /// Distance from the eye to the look-at point
    pub focal_length: f64,
    /// Horizontal field of view in degrees
    pub field_of_view: f64,
    pub forward: Vec3,
    pub up: Vec3,
    /// `forward × up`
    pub right: Vec3,
}

impl Camera {
    /// Create a camera looking from `look_from` towards `look_at`.
    pub fn new(look_at: Vec3, look_from: Vec3, look_up: Vec3, field_of_view: f64) -> Self {
        let relative_look_at = look_at - look_from;
        let forward = normalized(relative_look_at);
        Self {
            position: look_from,
            relative_look_at,
            focal_length: magnitude(relative_look_at),
            field_of_view,
            forward,
            up: look_up,
            right: forward.cross(look_up),
        }
    }

    /// The point the camera is aimed at.
    pub fn look_at(&self) -> Vec3 {
        self.position + self.relative_look_at
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, Vec3::Y, 90.0)
    }
}
