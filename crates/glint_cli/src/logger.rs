use log::LevelFilter;

/// Initialize the logger. `RUST_LOG` directives still apply per module.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
