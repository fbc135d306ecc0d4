//! Parallel per-pixel renderer.
//!
//! Every pixel is an independent task: one primary ray through the
//! viewport, shaded by `ray_color`. Tasks run on a rayon thread pool and
//! each writes only its own buffer cell, so the result does not depend on
//! scheduling or on the number of threads.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use glint_core::{Color, Scene};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::shader::{ray_color, Bounce};
use crate::viewport::Viewport;

/// Number of failed pixels reported individually before going quiet.
const MAX_REPORTED_FAILURES: usize = 8;

/// Errors that stop a render before it starts.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("render thread count must be positive")]
    InvalidThreadCount,

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of recursive reflections
    pub reflection_limit: u32,
    /// Whether to draw a progress bar on stderr
    pub show_progress: bool,
    /// Worker thread count, `None` for one per CPU core
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            reflection_limit: 10,
            show_progress: true,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the reflection limit.
    pub fn with_reflection_limit(mut self, reflection_limit: u32) -> Self {
        self.reflection_limit = reflection_limit;
        self
    }

    /// Enable or disable the progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Set the worker thread count.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.threads == Some(0) {
            return Err(RenderError::InvalidThreadCount);
        }
        Ok(())
    }
}

/// Clamp a value to [0, 1] range. NaN stays NaN.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Rendered pixels, row-major with row 0 at the top.
///
/// The pixel at column `x` and row `y` is `pixels[y * width + x]`, so the
/// buffer reads as a `(height, width, 3)` array indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Result of a completed render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: ImageBuffer,
    /// Pixels that failed to shade and were filled with the fallback color
    pub failed_pixels: usize,
}

/// Compute the color of a single pixel.
pub fn render_pixel(
    scene: &Scene,
    viewport: &Viewport,
    x: u32,
    y: u32,
    reflection_limit: u32,
) -> Color {
    let ray = viewport.primary_ray(x, y);
    ray_color(scene, &ray, Bounce::PRIMARY, reflection_limit)
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()?;

    let viewport = Viewport::new(&scene.camera, config.width, config.height);
    let mut image = ImageBuffer::new(config.width, config.height);
    let width = config.width as usize;
    let fallback = fallback_color(scene);
    let failures = AtomicUsize::new(0);
    let progress = progress_bar(config);

    info!(
        "Rendering {}x{} using {} threads...",
        config.width,
        config.height,
        pool.current_num_threads()
    );
    let start = Instant::now();

    pool.install(|| {
        image
            .pixels
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, pixel)| {
                let x = (index % width) as u32;
                let y = (index / width) as u32;

                let shaded = panic::catch_unwind(AssertUnwindSafe(|| {
                    render_pixel(scene, &viewport, x, y, config.reflection_limit)
                }));

                *pixel = match shaded {
                    Ok(color) if color.is_finite() => color,
                    Ok(color) => {
                        report_failure(&failures, x, y, &format!("non-finite color {color}"));
                        fallback
                    }
                    Err(_) => {
                        report_failure(&failures, x, y, "shading panicked");
                        fallback
                    }
                };

                if let Some(progress) = &progress {
                    progress.inc(1);
                }
            });
    });

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }

    let failed_pixels = failures.into_inner();
    if failed_pixels > 0 {
        warn!(
            "{} of {} pixels failed to shade and used the fallback color",
            failed_pixels,
            image.pixels.len()
        );
    }
    info!("Image rendered in {:.2?}", start.elapsed());

    Ok(RenderOutput {
        image,
        failed_pixels,
    })
}

/// Color written to pixels that fail to shade.
fn fallback_color(scene: &Scene) -> Color {
    if scene.background_color.is_finite() {
        scene.background_color
    } else {
        Color::ZERO
    }
}

fn report_failure(failures: &AtomicUsize, x: u32, y: u32, reason: &str) {
    let previous = failures.fetch_add(1, Ordering::Relaxed);
    if previous < MAX_REPORTED_FAILURES {
        warn!("Pixel ({x}, {y}): {reason}");
    } else if previous == MAX_REPORTED_FAILURES {
        warn!("Further pixel failures will only be counted");
    }
}

fn progress_bar(config: &RenderConfig) -> Option<ProgressBar> {
    if !config.show_progress {
        return None;
    }

    let total = config.width as u64 * config.height as u64;
    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} ETA: {eta}") {
        bar.set_style(style);
    }
    Some(bar)
}
