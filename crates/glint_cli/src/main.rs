//! `glint`: render a JSON scene file to an image.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    // A project-local .env supplies GLINT_* defaults
    let env_file = dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logger(args.log_level.into());
    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }

    // Fail on a bad output path before spending time rendering
    glint_renderer::check_output_path(&args.output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    let config = args.render_config();

    info!("Importing scene...");
    let start = Instant::now();
    let scene = glint_core::load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    info!(
        "Scene has {} objects. Time elapsed: {:.2?}",
        scene.object_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let output = glint_renderer::render(&scene, &config).context("render failed")?;
    if output.failed_pixels > 0 {
        warn!(
            "{} pixels could not be shaded and show the fallback color",
            output.failed_pixels
        );
    }
    info!("Time elapsed: {:.2?}", start.elapsed());

    info!("Exporting image...");
    let start = Instant::now();
    glint_renderer::save_image(&output.image, &args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!("Time elapsed: {:.2?}", start.elapsed());

    Ok(())
}
