//! Deployment profile loading and validation.
//!
//! A profile holds the knobs that distinguish one deployment from another
//! (diagnostic verbosity, TLS enforcement, storage backend, paths, base
//! lists). Everything that identifies the database comes from the
//! environment instead and is resolved by [`crate::settings`].

mod app;
mod apps;
mod cache;
mod database;
mod diagnostics;
mod duration;
mod error;
mod middleware;
mod paths;
mod security;
mod storage;

pub use app::AppConfig;
pub use apps::AppsConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use diagnostics::DiagnosticsConfig;
pub use error::ConfigError;
pub use middleware::MiddlewareConfig;
pub use paths::PathsConfig;
pub use security::SecurityConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;
use std::fs;

/// Root profile structure.
///
/// Every section is optional; a missing section takes the production
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    /// Application name, environment and tool log level.
    #[serde(default)]
    pub app: AppConfig,
    /// Diagnostic verbosity.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// TLS redirect, secure cookies and allowed hosts.
    #[serde(default)]
    pub security: SecurityConfig,
    /// Static file storage backend.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Base directory and URL prefixes.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Connection reuse and SSL mode.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Local memory cache.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Base middleware chain.
    #[serde(default)]
    pub middleware: MiddlewareConfig,
    /// Installed applications and exclusions.
    #[serde(default)]
    pub apps: AppsConfig,
}

impl Profile {
    /// Load a profile from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present) so that the environment snapshot
    /// taken afterwards sees the same variables the hosting platform would
    /// inject.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let profile = Self::from_yaml(&content)?;
        profile.validate()?;

        Ok(profile)
    }

    /// Parse a profile from YAML without validating it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid profile with all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate the profile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.paths.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.base_dir must not be empty".into(),
            ));
        }

        for (key, url) in [
            ("paths.static_url", &self.paths.static_url),
            ("paths.media_url", &self.paths.media_url),
        ] {
            if !url.starts_with('/') || !url.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{} must start and end with '/', got {:?}",
                    key, url
                )));
            }
        }

        let middleware = &self.middleware;
        if middleware.security.trim().is_empty() || middleware.static_files.trim().is_empty() {
            return Err(ConfigError::Validation(
                "middleware.security and middleware.static_files are required".into(),
            ));
        }
        if middleware.security == middleware.static_files {
            return Err(ConfigError::Validation(
                "middleware.static_files must differ from middleware.security".into(),
            ));
        }
        if let Some(pos) = middleware.base.iter().position(|m| m.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "middleware.base[{}] is empty",
                pos
            )));
        }

        if self.apps.disabled_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "apps.disabled_markers must not contain empty markers".into(),
            ));
        }

        Ok(())
    }
}
