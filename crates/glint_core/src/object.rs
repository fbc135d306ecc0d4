use glint_math::{Ray, Vec3};

use crate::collision::Collision;
use crate::geometry::Shape;
use crate::material::Material;

/// A renderable object: a shape paired with its material.
#[derive(Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
}

impl Object {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    /// Name from the material, if the scene gave one.
    pub fn name(&self) -> Option<&str> {
        self.material.name.as_deref()
    }

    /// Surface normal at `point`, assumed to lie on the object.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        self.shape.normal(point)
    }

    /// Where `ray` first meets this object, if it does.
    pub fn intersect(&self, ray: &Ray) -> Option<Collision<'_>> {
        self.shape
            .intersect(ray)
            .map(|position| Collision::new(self, *ray, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_collision_records_distance() {
        let object = Object::new(
            Shape::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap(),
            Material::default().with_name("ball"),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let collision = object.intersect(&ray).unwrap();
        assert_eq!(collision.distance, 4.0);
        assert_eq!(collision.position, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(collision.object.name(), Some("ball"));
        assert_eq!(collision.ray, ray);
    }

    #[test]
    fn test_object_normal_delegates_to_shape() {
        let object = Object::new(Shape::plane(Vec3::ZERO, Vec3::Y), Material::default());
        assert_eq!(object.normal(Vec3::new(1.0, 0.0, 1.0)), Vec3::Y);
        assert_eq!(object.name(), None);
    }
}
