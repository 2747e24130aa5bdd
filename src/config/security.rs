//! Transport security configuration.

use serde::Deserialize;

/// TLS enforcement and host allow-list.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Redirect plain HTTP requests to HTTPS.
    #[serde(default = "default_true")]
    pub ssl_redirect: bool,
    /// Mark session and CSRF cookies as secure-only.
    #[serde(default = "default_true")]
    pub secure_cookies: bool,
    /// Host names the application answers to.
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            ssl_redirect: true,
            secure_cookies: true,
            allowed_hosts: default_allowed_hosts(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_allowed_hosts() -> Vec<String> {
    [".up.railway.app", ".railway.app", "localhost", "127.0.0.1"]
        .into_iter()
        .map(String::from)
        .collect()
}
