//! glint Core - Scene graph and scene file support for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene graph types**: `Scene`, `Camera`, `Object`, `Material`
//! - **Geometry**: the five intersectable shapes (`Sphere`, `Plane`,
//!   `Circle`, `Polygon`, `Triangle`) behind the closed `Shape` enum
//! - **Scene import**: JSON scene description parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::import::load_scene;
//!
//! let scene = load_scene("scenes/mirror_spheres.json")?;
//! println!("Loaded {} objects", scene.object_count());
//! ```

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod import;
pub mod material;
pub mod object;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use collision::Collision;
pub use geometry::{Circle, GeometryError, GeometryResult, Plane, Polygon, Shape, Sphere, Triangle};
pub use import::{load_scene, load_scene_from_str, ImportError, ImportResult};
pub use material::{Color, Material};
pub use object::Object;
pub use scene::Scene;
