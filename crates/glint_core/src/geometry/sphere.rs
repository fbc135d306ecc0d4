//! Sphere primitive.

use super::{GeometryError, GeometryResult};
use glint_math::{normalized, Ray, Vec3};

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be a non-negative number.
    pub fn new(center: Vec3, radius: f64) -> GeometryResult<Self> {
        // `!(r >= 0)` also rejects NaN
        if !(radius >= 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal(&self, point: Vec3) -> Vec3 {
        normalized(point - self.center)
    }

    /// Closest-approach ray/sphere test.
    ///
    /// From outside the near root is taken; from inside the far root, so a
    /// ray starting within the sphere still finds the surface it exits
    /// through.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let to_center = self.center - ray.origin();
        let dist_sqr = to_center.dot(to_center);
        let radius_sqr = self.radius * self.radius;
        let outside = dist_sqr >= radius_sqr;

        let closest_approach = ray.direction().dot(to_center);
        if closest_approach < 0.0 && outside {
            // Sphere is behind the ray
            return None;
        }

        let half_chord_sqr = radius_sqr - dist_sqr + closest_approach * closest_approach;
        if half_chord_sqr < 0.0 {
            return None;
        }

        let half_chord = half_chord_sqr.sqrt();
        let t = if outside {
            closest_approach - half_chord
        } else {
            closest_approach + half_chord
        };

        if t < 0.0 {
            return None;
        }

        Some(ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_distance() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).unwrap();
        assert_eq!(hit, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(glint_math::magnitude(hit - ray.origin()), 4.0);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();

        // Pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());

        // Passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_hits_far_side() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-12);

        // Looking backwards from inside still exits
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), -Vec3::X);
        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 3.0).unwrap();
        let n = sphere.normal(Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn test_zero_radius_is_valid() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 0.0).unwrap();
        assert_eq!(sphere.radius(), 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(sphere.intersect(&ray).is_none());
    }
}
