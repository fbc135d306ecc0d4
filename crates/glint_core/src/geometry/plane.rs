use glint_math::{normalized, Ray, Vec3};

/// An infinite plane in point-normal form.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    point: Vec3,
    /// Unit normal (or zero for a degenerate plane)
    normal: Vec3,
    /// Signed distance term `d` of `n·p + d = 0`
    offset: f64,
}

impl Plane {
    /// Create a plane through `point`. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normalized(normal);
        Self {
            point,
            normal,
            offset: -normal.dot(point),
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction());
        if denom == 0.0 {
            // Parallel, or a degenerate plane/ray
            return None;
        }

        let t = -(self.normal.dot(ray.origin()) + self.offset) / denom;

        // Behind (or at) the origin. Written negated so NaN is rejected too.
        if !(t > 0.0) {
            return None;
        }

        Some(ray.at(t))
    }
}
