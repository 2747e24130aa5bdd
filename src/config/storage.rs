//! Static file storage configuration.

use serde::Deserialize;

/// Storage backend used for collected static files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Compressed files with hashed names.
    #[default]
    CompressedManifest,
    /// Hashed names without compression.
    Manifest,
    /// The framework's plain storage.
    Plain,
}

impl StorageBackend {
    /// Dotted identifier of the storage class.
    pub fn identifier(self) -> &'static str {
        match self {
            StorageBackend::CompressedManifest => {
                "whitenoise.storage.CompressedManifestStaticFilesStorage"
            }
            StorageBackend::Manifest => "django.contrib.staticfiles.storage.ManifestStaticFilesStorage",
            StorageBackend::Plain => "django.contrib.staticfiles.storage.StaticFilesStorage",
        }
    }
}

/// Static file serving settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which storage class to use.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Let the static-file middleware use the framework's finders.
    #[serde(default = "default_true")]
    pub use_finders: bool,
    /// Re-scan static files on every request.
    #[serde(default = "default_true")]
    pub autorefresh: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            use_finders: true,
            autorefresh: true,
        }
    }
}

fn default_true() -> bool {
    true
}
