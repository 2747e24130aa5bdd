//! Middleware chain configuration.

use serde::Deserialize;

pub const SECURITY_MIDDLEWARE: &str = "django.middleware.security.SecurityMiddleware";
pub const STATIC_FILES_MIDDLEWARE: &str = "whitenoise.middleware.WhiteNoiseMiddleware";

/// Base middleware chain and the identifiers used to splice it.
#[derive(Debug, Clone, Deserialize)]
pub struct MiddlewareConfig {
    /// Middleware declared by the application, in order.
    #[serde(default = "default_base")]
    pub base: Vec<String>,
    /// Entry the static-file middleware is placed after.
    #[serde(default = "default_security")]
    pub security: String,
    /// Static-file serving middleware.
    #[serde(default = "default_static_files")]
    pub static_files: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            security: default_security(),
            static_files: default_static_files(),
        }
    }
}

fn default_base() -> Vec<String> {
    [
        SECURITY_MIDDLEWARE,
        "django.contrib.sessions.middleware.SessionMiddleware",
        "corsheaders.middleware.CorsMiddleware",
        "django.middleware.common.CommonMiddleware",
        "django.middleware.csrf.CsrfViewMiddleware",
        "django.contrib.auth.middleware.AuthenticationMiddleware",
        "django.contrib.messages.middleware.MessageMiddleware",
        "django.middleware.clickjacking.XFrameOptionsMiddleware",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_security() -> String {
    SECURITY_MIDDLEWARE.to_string()
}

fn default_static_files() -> String {
    STATIC_FILES_MIDDLEWARE.to_string()
}
