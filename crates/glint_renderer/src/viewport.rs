//! Mapping from image pixels to primary ray directions.

use glint_core::Camera;
use glint_math::{normalized, Ray, Vec2, Vec3};

/// Pixel-to-ray mapping for one camera at one image resolution.
///
/// The image is treated as a window of world-space size `window_size`
/// centred on the look-at point and perpendicular to the camera's forward
/// axis. Pixel `(0, 0)` is the top-left corner of that window.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    camera: Camera,
    window_size: Vec2,
    /// World-space size of one pixel
    pixel_size: Vec2,
    half_window: Vec2,
}

impl Viewport {
    /// Create a viewport. `width` and `height` must be non-zero.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let window_size = window_size(camera.focal_length, camera.field_of_view, width, height);
        Self {
            camera: *camera,
            window_size,
            pixel_size: window_size / Vec2::new(width as f64, height as f64),
            half_window: window_size / 2.0,
        }
    }

    /// World-space width and height of the window.
    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// Position of pixel `(x, y)` on the window, relative to its centre,
    /// with y pointing up.
    pub fn window_point(&self, x: u32, y: u32) -> Vec2 {
        let point = Vec2::new(x as f64, y as f64) * self.pixel_size - self.half_window;
        // Image rows grow downwards
        Vec2::new(point.x, -point.y)
    }

    /// Unit direction from the camera through pixel `(x, y)`.
    pub fn ray_direction(&self, x: u32, y: u32) -> Vec3 {
        let window_point = self.window_point(x, y);
        let relative = self.camera.relative_look_at
            + window_point.x * self.camera.right
            + window_point.y * self.camera.up;
        normalized(relative)
    }

    /// Ray from the camera through pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.camera.position, self.ray_direction(x, y))
    }
}

/// Window size for a horizontal field of view, aspect corrected.
fn window_size(focal_length: f64, field_of_view: f64, width: u32, height: u32) -> Vec2 {
    let x = 2.0 * focal_length * (field_of_view.to_radians() / 2.0).tan();
    let y = x * height as f64 / width as f64;
    Vec2::new(x, y)
}
