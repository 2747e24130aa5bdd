//! Settings resolution.
//!
//! [`resolve`] turns an environment snapshot and a profile into the
//! settings mapping consumed by the web framework, plus the diagnostics
//! describing how each value was chosen. It performs no I/O; directory
//! creation is a separate step ([`Resolution::ensure_dirs`]).

mod apps;
mod cors;
mod database;
mod diagnostics;
mod host;
mod logging;
mod middleware;
mod paths;

pub use apps::{resolve_configured_apps, resolve_installed_components};
pub use cors::{CorsCsrf, resolve_cors_csrf};
pub use database::{
    DatabaseDescriptor, DatabaseUrlError, parse_database_url, redact_url, resolve_database,
};
pub use diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use host::resolve_host;
pub use logging::{LogLevel, LoggingConfig, development_logging, resolve_logging};
pub use middleware::{resolve_configured_middleware, resolve_middleware};
pub use paths::{StaticMediaPaths, resolve_static_media_paths};

use serde::Serialize;
use tracing::debug;

use crate::config::Profile;
use crate::env::EnvSnapshot;

pub const SESSION_ENGINE: &str = "django.contrib.sessions.backends.db";
pub const EMAIL_BACKEND: &str = "django.core.mail.backends.console.EmailBackend";
pub const CACHE_BACKEND: &str = "django.core.cache.backends.locmem.LocMemCache";

const REDACTED_PASSWORD: &str = "********";

/// The complete settings mapping.
///
/// Serializes with the framework's upper-case setting names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub databases: Databases,
    #[serde(flatten)]
    pub static_media: StaticMediaPaths,
    pub middleware: Vec<String>,
    pub installed_apps: Vec<String>,
    pub logging: LoggingConfig,
    pub caches: Caches,
    #[serde(flatten)]
    pub cors_csrf: CorsCsrf,
    #[serde(flatten)]
    pub security: SecurityFlags,
    pub email_backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Databases {
    pub default: DatabaseDescriptor,
}

#[derive(Debug, Clone, Serialize)]
pub struct Caches {
    pub default: CacheDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CacheDescriptor {
    pub backend: String,
    pub location: String,
}

/// TLS and cookie flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SecurityFlags {
    /// Header and value the proxy sets for HTTPS requests.
    pub secure_proxy_ssl_header: (String, String),
    pub secure_ssl_redirect: bool,
    pub session_engine: String,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
}

impl Settings {
    /// Copy with the database password masked, for display, including a
    /// `password` connection option.
    pub fn redacted(&self) -> Settings {
        let mut settings = self.clone();
        let db = &mut settings.databases.default;
        if !db.password.is_empty() {
            db.password = REDACTED_PASSWORD.to_string();
        }
        for (key, value) in db.options.iter_mut() {
            if database::is_password_key(key) {
                *value = REDACTED_PASSWORD.to_string();
            }
        }
        settings
    }
}

/// Settings together with the diagnostics gathered while resolving them.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub settings: Settings,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Creates the static and media roots.
    ///
    /// A failure is recorded as a warning; the settings stay usable.
    pub fn ensure_dirs(&mut self) {
        let paths = &self.settings.static_media;
        match paths.ensure_dirs() {
            Ok(()) => self.diagnostics.info(format!(
                "static root {} and media root {} are present",
                paths.static_root.display(),
                paths.media_root.display()
            )),
            Err(e) => self.diagnostics.warn(format!(
                "could not create static/media directories under {}: {}",
                paths
                    .static_root
                    .parent()
                    .unwrap_or(&paths.static_root)
                    .display(),
                e
            )),
        }
    }
}

/// Resolves the full settings mapping in a single pass.
pub fn resolve(env: &EnvSnapshot, profile: &Profile) -> Resolution {
    let mut diagnostics = Diagnostics::default();
    debug!(profile = %profile.app.name, "Resolving settings");

    let database = resolve_database(env, &profile.database, &mut diagnostics);

    let static_media = resolve_static_media_paths(&profile.paths, &profile.storage);

    let mw = &profile.middleware;
    if !mw.base.contains(&mw.security) && !mw.base.contains(&mw.static_files) {
        diagnostics.warn(format!(
            "{} not found in middleware, placing {} first",
            mw.security, mw.static_files
        ));
    }
    let middleware = resolve_configured_middleware(mw);

    let installed_apps = resolve_configured_apps(&profile.apps);
    let dropped = profile.apps.base.len() - installed_apps.len();
    if dropped > 0 {
        diagnostics.info(format!("removed {} development-only app(s)", dropped));
    }

    let cors_csrf = resolve_cors_csrf(env);
    diagnostics.info(format!(
        "trusted origin {}",
        cors_csrf.csrf_trusted_origins.join(", ")
    ));

    let logging = if profile.app.is_production() {
        resolve_logging()
    } else {
        development_logging()
    };

    let security = &profile.security;
    if !security.ssl_redirect {
        diagnostics.warn("HTTPS redirect is disabled");
    }

    let settings = Settings {
        debug: false,
        allowed_hosts: security.allowed_hosts.clone(),
        databases: Databases { default: database },
        static_media,
        middleware,
        installed_apps,
        logging,
        caches: Caches {
            default: CacheDescriptor {
                backend: CACHE_BACKEND.to_string(),
                location: profile.cache.location.clone(),
            },
        },
        cors_csrf,
        security: SecurityFlags {
            secure_proxy_ssl_header: (
                "HTTP_X_FORWARDED_PROTO".to_string(),
                "https".to_string(),
            ),
            secure_ssl_redirect: security.ssl_redirect,
            session_engine: SESSION_ENGINE.to_string(),
            session_cookie_secure: security.secure_cookies,
            csrf_cookie_secure: security.secure_cookies,
        },
        email_backend: EMAIL_BACKEND.to_string(),
    };

    Resolution {
        settings,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
