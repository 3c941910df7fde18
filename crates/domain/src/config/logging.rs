use serde::{Deserialize, Serialize};

/// Logging configuration shared by the test fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Directive used when `RUST_LOG` is not set (default: "info").
    /// Accepts any `EnvFilter` directive, e.g. "debug" or "ferrous_dns_testkit=trace".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
