//! Installed application configuration.

use serde::Deserialize;

/// Installed applications and the production exclusions applied to them.
#[derive(Debug, Clone, Deserialize)]
pub struct AppsConfig {
    /// Applications declared by the project, in order.
    #[serde(default = "default_base")]
    pub base: Vec<String>,
    /// Case-insensitive substrings; matching entries are dropped.
    #[serde(default = "default_disabled_markers")]
    pub disabled_markers: Vec<String>,
    /// Exact entries that are dropped.
    #[serde(default = "default_removed")]
    pub removed: Vec<String>,
}

impl Default for AppsConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            disabled_markers: default_disabled_markers(),
            removed: default_removed(),
        }
    }
}

fn default_base() -> Vec<String> {
    [
        "django.contrib.admin",
        "django.contrib.auth",
        "django.contrib.contenttypes",
        "django.contrib.sessions",
        "django.contrib.messages",
        "django.contrib.staticfiles",
        "corsheaders",
        "debug_toolbar.apps.DebugToolbarConfig",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_disabled_markers() -> Vec<String> {
    vec!["debug_toolbar".to_string()]
}

fn default_removed() -> Vec<String> {
    vec!["django.utils.autoreload".to_string()]
}
