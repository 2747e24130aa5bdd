//! Application-level configuration.

use serde::Deserialize;

/// Application-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application name used in logs.
    #[serde(default = "default_name")]
    pub name: String,
    /// Environment: "production" or "development".
    ///
    /// Selects the logging preset handed to the web framework.
    #[serde(default = "default_env")]
    pub env: String,
    /// Logging verbosity for this tool: "debug", "info", "warn", "error".
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Returns true unless the profile targets local development.
    pub fn is_production(&self) -> bool {
        self.env != "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            env: default_env(),
            log_level: None,
        }
    }
}

fn default_name() -> String {
    "railway".to_string()
}

fn default_env() -> String {
    "production".to_string()
}
