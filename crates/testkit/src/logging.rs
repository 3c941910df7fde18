use ferrous_dns_domain::LoggingConfig;
use std::sync::Once;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a fmt subscriber writing through the libtest capture.
///
/// `RUST_LOG` wins over the default level. Safe to call from every test; only
/// the first call in a process has an effect.
pub fn init_test_logging() {
    init_test_logging_with(&LoggingConfig::default());
}

pub fn init_test_logging_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        // Another subscriber may already be installed by the test binary.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_test_writer()
            .try_init();

        debug!(level = %config.level, "Test logging initialized");
    });
}
