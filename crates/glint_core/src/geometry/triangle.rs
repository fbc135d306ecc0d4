//! Triangle primitive.
//!
//! Shares the supporting plane and 2D projection of `Polygon`, but tests
//! containment by comparing areas: a point inside the triangle splits it
//! into three sub-triangles whose areas add up to the whole.

use super::{GeometryError, GeometryResult, Polygon};
use glint_math::{Ray, Vec2, Vec3};

/// Allowed difference between the summed sub-triangle areas and the
/// triangle's own area for a point to count as inside.
pub const AREA_TOLERANCE: f64 = 1e-4;

/// A triangle primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
    /// Area of the flattened triangle, computed once
    flattened_area: f64,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(vertices: [Vec3; 3]) -> Self {
        let polygon = Polygon::build(vertices.to_vec());
        let [a, b, c] = flattened_corners(&polygon);
        Self {
            flattened_area: area(a, b, c),
            polygon,
        }
    }

    /// Create a triangle from a vertex list of unchecked length.
    pub fn from_vec(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        let vertices: [Vec3; 3] = vertices
            .try_into()
            .map_err(|v: Vec<Vec3>| GeometryError::TriangleVertexCount(v.len()))?;
        Ok(Self::new(vertices))
    }

    pub fn vertices(&self) -> &[Vec3] {
        self.polygon.vertices()
    }

    pub fn normal(&self) -> Vec3 {
        self.polygon.normal()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let hit = self.polygon.plane().intersect(ray)?;
        let p = self.polygon.flatten(hit);
        let [a, b, c] = flattened_corners(&self.polygon);

        let sub_areas = area(a, b, p) + area(a, c, p) + area(b, c, p);
        if (sub_areas - self.flattened_area).abs() > AREA_TOLERANCE {
            return None;
        }

        Some(hit)
    }
}

fn flattened_corners(polygon: &Polygon) -> [Vec2; 3] {
    let f = polygon.flattened();
    [f[0], f[1], f[2]]
}

/// Unsigned area of the 2D triangle `abc`.
fn area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
}
