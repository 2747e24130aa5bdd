//! Database connection configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Connection settings that do not come from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// How long a connection is kept open for reuse (default: 10m).
    #[serde(default = "default_conn_max_age", with = "duration")]
    pub conn_max_age: Duration,
    /// libpq `sslmode` option; empty to omit.
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            conn_max_age: default_conn_max_age(),
            sslmode: default_sslmode(),
        }
    }
}

fn default_conn_max_age() -> Duration {
    Duration::from_secs(600)
}

fn default_sslmode() -> String {
    "prefer".to_string()
}
