// Re-export the double precision glam types used throughout glint
pub use glam::{DVec2, DVec3};

/// Position, direction and color vectors share this representation.
pub type Vec3 = DVec3;

/// Points flattened onto a plane for containment tests.
pub type Vec2 = DVec2;

// glint math types
mod pairs;
mod ray;
mod vector;

pub use pairs::closed_pairs;
pub use ray::Ray;
pub use vector::{dominant_axis, drop_axis, magnitude, normalized};
