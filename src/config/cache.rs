//! Cache configuration.

use serde::Deserialize;

/// In-process cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Name distinguishing this cache instance.
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

fn default_location() -> String {
    "railway-cache".to_string()
}
