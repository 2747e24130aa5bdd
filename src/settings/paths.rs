//! Static and media file locations.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{PathsConfig, StorageConfig};

pub const STATIC_SUBDIR: &str = "staticfiles";
pub const MEDIA_SUBDIR: &str = "media";

/// Where static and media files live and how they are served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StaticMediaPaths {
    pub static_url: String,
    pub static_root: PathBuf,
    pub staticfiles_storage: String,
    pub media_url: String,
    pub media_root: PathBuf,
    pub whitenoise_use_finders: bool,
    pub whitenoise_autorefresh: bool,
}

/// Joins the fixed subdirectories onto the profile's base directory.
pub fn resolve_static_media_paths(paths: &PathsConfig, storage: &StorageConfig) -> StaticMediaPaths {
    StaticMediaPaths {
        static_url: paths.static_url.clone(),
        static_root: paths.base_dir.join(STATIC_SUBDIR),
        staticfiles_storage: storage.backend.identifier().to_string(),
        media_url: paths.media_url.clone(),
        media_root: paths.base_dir.join(MEDIA_SUBDIR),
        whitenoise_use_finders: storage.use_finders,
        whitenoise_autorefresh: storage.autorefresh,
    }
}

impl StaticMediaPaths {
    /// Creates the static and media roots if they are missing.
    ///
    /// Succeeds when the directories already exist, including when another
    /// process created them concurrently.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        ensure_dir(&self.static_root)?;
        ensure_dir(&self.media_root)
    }
}

fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
