//! Scene graph types for glint.
//!
//! A `Scene` is everything the renderer needs: the camera, one directional
//! light, the ambient and background colors, and a flat list of objects.
//! It is built once and is read-only while rendering.

use glint_math::{Ray, Vec3};

use crate::camera::Camera;
use crate::collision::Collision;
use crate::material::Color;
use crate::object::Object;

/// The complete world state for a render.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,

    /// Unit vector pointing towards the light
    pub light_direction: Vec3,

    /// Directional light color (RGB, 0-1)
    pub light_color: Color,

    /// Ambient light color (RGB, 0-1)
    pub ambient_light_color: Color,

    /// Color of rays that hit nothing (RGB, 0-1)
    pub background_color: Color,

    /// Objects in scene order
    pub objects: Vec<Object>,
}

impl Scene {
    /// Create a scene with no objects.
    pub fn new(
        camera: Camera,
        light_direction: Vec3,
        light_color: Color,
        ambient_light_color: Color,
        background_color: Color,
    ) -> Self {
        Self {
            camera,
            light_direction,
            light_color,
            ambient_light_color,
            background_color,
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Add an object, builder style.
    pub fn with_object(mut self, object: Object) -> Self {
        self.add(object);
        self
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Find the closest collision along `ray`.
    ///
    /// Every object is tested. When two hits are equally close the object
    /// that comes first in the list wins.
    pub fn cast_ray(&self, ray: &Ray) -> Option<Collision<'_>> {
        let mut closest: Option<Collision<'_>> = None;

        for object in &self.objects {
            if let Some(collision) = object.intersect(ray) {
                let is_closer = closest
                    .as_ref()
                    .map_or(true, |best| collision.distance < best.distance);
                if is_closer {
                    closest = Some(collision);
                }
            }
        }

        closest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default(), Vec3::Y, Color::ONE, Color::ONE, Color::ZERO)
    }
}
