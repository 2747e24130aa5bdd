//! Static and media path configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Base directory and public URL prefixes.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Project root that static and media roots are joined onto.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// URL prefix for static files.
    #[serde(default = "default_static_url")]
    pub static_url: String,
    /// URL prefix for uploaded media.
    #[serde(default = "default_media_url")]
    pub media_url: String,
    /// Create the static and media roots if they are missing.
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            static_url: default_static_url(),
            media_url: default_media_url(),
            create_dirs: true,
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("/app")
}

fn default_static_url() -> String {
    "/static/".to_string()
}

fn default_media_url() -> String {
    "/media/".to_string()
}

fn default_true() -> bool {
    true
}
