//! JSON scene description support for glint.
//!
//! Scene files are a single JSON object. Every key is optional except the
//! shape parameters that have no sensible default (a sphere's center and
//! radius, a plane's normal, polygon vertices). Missing keys fall back to
//! defaults with a warning, direction vectors are normalized, colors are
//! range checked, and three-vertex polygons become triangles.
//!
//! ```json
//! {
//!     "camera_look_from": [0, 1, 6],
//!     "field_of_view": 60,
//!     "light_direction": [1, 1, 1],
//!     "objects": [
//!         { "type": "sphere", "center": [0, 1, 0], "radius": 1, "reflectivity": 0.5 },
//!         { "type": "plane", "normal": [0, 1, 0] }
//!     ]
//! }
//! ```

mod loader;
mod types;

pub use loader::*;
pub use types::*;
