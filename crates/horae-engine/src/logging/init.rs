use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "horae_ui=debug"); when `None`, `RUST_LOG` is honored and the level
/// defaults to warnings. Subsequent calls are ignored, so embedders and
/// the demo binary can both call this safely.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
