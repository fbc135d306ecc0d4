use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use glint_renderer::RenderConfig;
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments. Every option can also come from a `GLINT_*`
/// environment variable, including ones set in a `.env` file.
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render a JSON scene with a Whitted-style ray tracer")]
pub struct Args {
    /// Scene file to render
    #[arg(short, long, env = "GLINT_SCENE")]
    pub scene: PathBuf,

    /// Output image path, format chosen by extension
    #[arg(short, long, env = "GLINT_OUTPUT", default_value = "./output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'x', long, env = "GLINT_WIDTH", default_value_t = 512,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'y', long, env = "GLINT_HEIGHT", default_value_t = 512,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Maximum number of recursive reflections
    #[arg(short, long, env = "GLINT_REFLECTION_LIMIT", default_value_t = 10)]
    pub reflection_limit: u32,

    /// Show a progress bar while rendering
    #[arg(short, long, env = "GLINT_PROGRESS_BAR", default_value_t = true,
          action = ArgAction::Set)]
    pub progress_bar: bool,

    /// Render threads (defaults to one per CPU core)
    #[arg(short = 'j', long, env = "GLINT_THREADS")]
    pub threads: Option<usize>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_reflection_limit(self.reflection_limit)
            .with_progress(self.progress_bar)
            .with_threads(self.threads)
    }
}
