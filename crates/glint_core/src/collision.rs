use glint_math::{magnitude, Ray, Vec3};

use crate::object::Object;

/// Record of a ray meeting an object.
#[derive(Clone, Debug)]
pub struct Collision<'a> {
    /// Object that was hit
    pub object: &'a Object,
    /// Ray that produced the hit
    pub ray: Ray,
    /// Point of intersection
    pub position: Vec3,
    /// Distance from the ray origin to `position`
    pub distance: f64,
}

impl<'a> Collision<'a> {
    pub fn new(object: &'a Object, ray: Ray, position: Vec3) -> Self {
        Self {
            object,
            ray,
            position,
            distance: magnitude(position - ray.origin()),
        }
    }

    /// Surface normal of the hit object at the collision point.
    pub fn normal(&self) -> Vec3 {
        self.object.normal(self.position)
    }
}
