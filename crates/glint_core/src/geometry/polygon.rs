//! Planar polygon primitive.
//!
//! Containment uses the crossing-number test on a 2D projection of the
//! polygon: the coordinate axis most aligned with the normal is dropped,
//! the hit point is moved to the origin, and edges crossing the positive
//! x-axis are counted. An odd count means the point is inside.

use super::{GeometryError, GeometryResult, Plane};
use glint_math::{closed_pairs, dominant_axis, drop_axis, normalized, Ray, Vec2, Vec3};

/// Offset applied to projected vertices lying exactly on the x-axis, so no
/// edge endpoint sits on the axis the crossings are counted against.
pub const AXIS_NUDGE: f64 = 1e-4;

/// A polygon defined by ordered, coplanar vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3>,
    /// Supporting plane through the first vertex
    plane: Plane,
    /// Axis dropped when flattening to 2D
    axis: usize,
    /// Vertices projected onto the remaining two axes
    flattened: Vec<Vec2>,
}

impl Polygon {
    /// Create a polygon with at least 4 vertices.
    ///
    /// Three vertices are rejected; build those through `Shape::polygon`,
    /// which turns them into a `Triangle`.
    pub fn new(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        match vertices.len() {
            0..=2 => Err(GeometryError::TooFewVertices(vertices.len())),
            3 => Err(GeometryError::PolygonIsTriangle),
            _ => Ok(Self::build(vertices)),
        }
    }

    /// Build the supporting plane and projection. Callers guarantee at
    /// least 3 vertices.
    pub(crate) fn build(vertices: Vec<Vec3>) -> Self {
        let edge_1 = normalized(vertices[1] - vertices[0]);
        let edge_2 = normalized(vertices[2] - vertices[1]);
        let normal = normalized(edge_1.cross(edge_2));

        let plane = Plane::new(vertices[0], normal);
        let axis = dominant_axis(normal);
        let flattened = vertices.iter().map(|v| drop_axis(*v, axis)).collect();

        Self {
            vertices,
            plane,
            axis,
            flattened,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn normal(&self) -> Vec3 {
        self.plane.normal()
    }

    pub(crate) fn plane(&self) -> &Plane {
        &self.plane
    }

    pub(crate) fn flattened(&self) -> &[Vec2] {
        &self.flattened
    }

    /// Project a point on the supporting plane into the polygon's 2D space.
    pub(crate) fn flatten(&self, point: Vec3) -> Vec2 {
        drop_axis(point, self.axis)
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let hit = self.plane.intersect(ray)?;
        if self.contains(self.flatten(hit)) {
            Some(hit)
        } else {
            None
        }
    }

    /// Crossing-number containment test for a flattened point.
    fn contains(&self, point: Vec2) -> bool {
        let shift = |v: Vec2| {
            let mut v = v - point;
            if v.y == 0.0 {
                v.y += AXIS_NUDGE;
            }
            v
        };

        let crossings = closed_pairs(&self.flattened)
            .filter(|(a, b)| crosses_positive_x_axis(shift(**a), shift(**b)))
            .count();

        crossings % 2 == 1
    }
}

/// Whether the edge `a -> b` crosses the positive half of the x-axis.
fn crosses_positive_x_axis(a: Vec2, b: Vec2) -> bool {
    if (a.y < 0.0) == (b.y < 0.0) {
        return false;
    }

    let a_right = a.x > 0.0;
    let b_right = b.x > 0.0;

    if a_right && b_right {
        true
    } else if a_right || b_right {
        // Straddles the y-axis, so compute where it meets the x-axis
        let d = b - a;
        a.x - a.y * d.x / d.y > 0.0
    } else {
        false
    }
}
