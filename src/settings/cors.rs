//! Cross-origin allow-lists.

use serde::Serialize;

use crate::env::EnvSnapshot;

pub const PUBLIC_DOMAIN_VAR: &str = "RAILWAY_PUBLIC_DOMAIN";
pub const DEFAULT_PUBLIC_DOMAIN: &str = "localhost";

const ORIGIN_SCHEME: &str = "https://";

/// CORS and CSRF origin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CorsCsrf {
    pub cors_allowed_origins: Vec<String>,
    pub cors_allow_credentials: bool,
    pub cors_allow_all_origins: bool,
    pub csrf_trusted_origins: Vec<String>,
}

/// Builds single-origin allow-lists from the public domain.
pub fn resolve_cors_csrf(env: &EnvSnapshot) -> CorsCsrf {
    let domain = env.get(PUBLIC_DOMAIN_VAR).unwrap_or(DEFAULT_PUBLIC_DOMAIN);
    let origin = format!("{}{}", ORIGIN_SCHEME, domain);

    CorsCsrf {
        cors_allowed_origins: vec![origin.clone()],
        cors_allow_credentials: true,
        cors_allow_all_origins: false,
        csrf_trusted_origins: vec![origin],
    }
}
