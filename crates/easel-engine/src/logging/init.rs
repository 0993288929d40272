use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for sketches and tools embedding the engine.
///
/// `env_filter` uses the `env_logger` filter syntax (e.g. "warn",
/// "easel_engine::geometry=trace"). When it is `None`, `RUST_LOG` is consulted and
/// `default_level` applies as the last resort.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose capture-friendly setup for unit tests.
    pub fn for_tests() -> Self {
        Self {
            default_level: LevelFilter::Trace,
            is_test: true,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are no-ops.
///
/// If another logger already owns the `log` facade the engine keeps using it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style).is_test(config.is_test);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
