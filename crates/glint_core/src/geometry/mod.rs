//! Intersectable shapes.
//!
//! Every shape answers two questions: the surface normal at a point, and
//! where (if anywhere) a ray first meets it. `Shape` is the closed set of
//! shapes a scene can contain.
//!
//! `Circle` is built on top of a `Plane`, and `Triangle` on top of a
//! `Polygon`, so the composite shapes reuse the plane intersection and
//! only add their own containment test.

mod circle;
mod plane;
mod polygon;
mod sphere;
mod triangle;

pub use circle::Circle;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;

use glint_math::{Ray, Vec3};
use thiserror::Error;

/// Errors raised when a shape is built from values that break its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("radius must be a non-negative number, not {0}")]
    InvalidRadius(f64),

    #[error("polygon must have at least 3 vertices, not {0}")]
    TooFewVertices(usize),

    #[error("triangle must have exactly 3 vertices, not {0}")]
    TriangleVertexCount(usize),

    #[error("a polygon with 3 vertices must be built as a triangle")]
    PolygonIsTriangle,
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// One of the five supported shapes.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
}

impl Shape {
    /// Create a sphere.
    pub fn sphere(center: Vec3, radius: f64) -> GeometryResult<Self> {
        Sphere::new(center, radius).map(Shape::Sphere)
    }

    /// Create an infinite plane through `point`.
    pub fn plane(point: Vec3, normal: Vec3) -> Self {
        Shape::Plane(Plane::new(point, normal))
    }

    /// Create a flat disc.
    pub fn circle(center: Vec3, radius: f64, normal: Vec3) -> GeometryResult<Self> {
        Circle::new(center, radius, normal).map(Shape::Circle)
    }

    /// Create a polygon from its ordered, coplanar vertices.
    ///
    /// Three vertices always produce a `Shape::Triangle`, which has a
    /// cheaper containment test than the general crossing-number one.
    pub fn polygon(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        match vertices.len() {
            3 => Triangle::from_vec(vertices).map(Shape::Triangle),
            _ => Polygon::new(vertices).map(Shape::Polygon),
        }
    }

    /// Create a triangle. Fails unless exactly 3 vertices are given.
    pub fn triangle(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        Triangle::from_vec(vertices).map(Shape::Triangle)
    }

    /// Short lowercase name of the shape variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
            Shape::Triangle(_) => "triangle",
        }
    }

    /// Outward surface normal at `point`, assumed to lie on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal(point),
            Shape::Plane(p) => p.normal(),
            Shape::Circle(c) => c.normal(),
            Shape::Polygon(p) => p.normal(),
            Shape::Triangle(t) => t.normal(),
        }
    }

    /// Nearest point where `ray` meets the shape, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Circle(c) => c.intersect(ray),
            Shape::Polygon(p) => p.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        ]
    }

    #[test]
    fn test_polygon_with_three_vertices_is_triangle() {
        let shape = Shape::polygon(unit_triangle()).unwrap();
        assert!(matches!(shape, Shape::Triangle(_)));
        assert_eq!(shape.kind(), "triangle");
    }

    #[test]
    fn test_polygon_with_four_vertices_stays_polygon() {
        let square = vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ];
        let shape = Shape::polygon(square).unwrap();
        assert!(matches!(shape, Shape::Polygon(_)));
    }

    #[test]
    fn test_polygon_and_triangle_paths_agree() {
        let via_polygon = Shape::polygon(unit_triangle()).unwrap();
        let via_triangle = Shape::triangle(unit_triangle()).unwrap();

        let origin = Vec3::ZERO;
        let targets = [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.5, -0.5, 5.0),
            Vec3::new(-0.9, -0.95, 5.0),
            Vec3::new(2.0, 0.0, 5.0),
            Vec3::new(0.0, 1.5, 5.0),
            Vec3::new(-0.8, 0.8, 5.0),
        ];

        for target in targets {
            let ray = Ray::new(origin, glint_math::normalized(target - origin));
            let a = via_polygon.intersect(&ray);
            let b = via_triangle.intersect(&ray);
            match (a, b) {
                (Some(a), Some(b)) => assert!((a - b).length() < 1e-9, "{target}"),
                (None, None) => {}
                _ => panic!("paths disagree for target {target}: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn test_contract_violations() {
        assert_eq!(
            Shape::sphere(Vec3::ZERO, -1.0).unwrap_err(),
            GeometryError::InvalidRadius(-1.0)
        );
        assert!(matches!(
            Shape::circle(Vec3::ZERO, f64::NAN, Vec3::Z),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert_eq!(
            Shape::polygon(vec![Vec3::ZERO, Vec3::X]).unwrap_err(),
            GeometryError::TooFewVertices(2)
        );
        assert_eq!(
            Shape::triangle(vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]).unwrap_err(),
            GeometryError::TriangleVertexCount(4)
        );
    }

    #[test]
    fn test_no_three_vertex_polygon_variant() {
        assert_eq!(
            Polygon::new(unit_triangle()).unwrap_err(),
            GeometryError::PolygonIsTriangle
        );
        assert!(matches!(
            Shape::polygon(unit_triangle()),
            Ok(Shape::Triangle(_))
        ));
    }

    #[test]
    fn test_plane_normal_ignores_point() {
        let shape = Shape::plane(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(shape.normal(Vec3::new(5.0, 0.0, -3.0)), Vec3::Y);
    }
}
