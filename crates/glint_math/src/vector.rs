//! Free functions over `Vec3` that the geometry code leans on.

use crate::{Vec2, Vec3};

/// Euclidean length of `v`.
#[inline]
pub fn magnitude(v: Vec3) -> f64 {
    v.dot(v).sqrt()
}

/// Unit vector pointing along `v`.
///
/// The zero vector has no direction, so it is returned unchanged instead
/// of dividing by zero.
#[inline]
pub fn normalized(v: Vec3) -> Vec3 {
    let mag = magnitude(v);
    if mag == 0.0 {
        v
    } else {
        v / mag
    }
}

/// Index of the component with the largest absolute value.
///
/// Ties go to the lowest index.
pub fn dominant_axis(v: Vec3) -> usize {
    let a = v.abs();
    if a.x >= a.y && a.x >= a.z {
        0
    } else if a.y >= a.z {
        1
    } else {
        2
    }
}

/// Flatten `v` to 2D by deleting the component at `axis`.
pub fn drop_axis(v: Vec3, axis: usize) -> Vec2 {
    match axis {
        0 => Vec2::new(v.y, v.z),
        1 => Vec2::new(v.x, v.z),
        _ => Vec2::new(v.x, v.y),
    }
}
