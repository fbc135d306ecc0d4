//! glint Renderer - Whitted-style CPU ray tracing.
//!
//! Casts one ray per pixel through the scene camera and shades each hit
//! with Phong lighting, hard shadows from a single directional light and
//! recursive mirror reflections. Pixels are rendered in parallel on a
//! rayon thread pool.

mod output;
mod renderer;
mod shader;
mod viewport;

pub use output::{check_output_path, color_to_rgb, save_image, ExportError, ExportResult};
pub use renderer::{
    clamp_01, render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderOutput,
    RenderResult,
};
pub use shader::{
    is_in_shadow, phong, ray_color, reflect, Bounce, PhongTerms, FADE_LIMIT, SELF_HIT_OFFSET,
};
pub use viewport::Viewport;

/// Re-export the scene types the renderer consumes
pub use glint_core::{Color, Scene};
