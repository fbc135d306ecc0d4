use super::{GeometryError, GeometryResult, Plane};
use glint_math::{magnitude, Ray, Vec3};

/// A flat disc: the part of a plane within `radius` of `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Vec3,
    radius: f64,
    plane: Plane,
}

impl Circle {
    pub fn new(center: Vec3, radius: f64, normal: Vec3) -> GeometryResult<Self> {
        if !(radius >= 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            plane: Plane::new(center, normal),
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal(&self) -> Vec3 {
        self.plane.normal()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let hit = self.plane.intersect(ray)?;
        if magnitude(hit - self.center) > self.radius {
            return None;
        }
        Some(hit)
    }
}
