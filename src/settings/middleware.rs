//! Middleware chain splicing.

use crate::config::MiddlewareConfig;

/// Inserts the static-file middleware right after the security middleware.
///
/// Returns the chain unchanged if the static-file middleware is already
/// present, so applying it to its own output is a no-op. If the security
/// middleware is missing the static-file middleware goes first.
pub fn resolve_middleware(base: &[String], security: &str, static_files: &str) -> Vec<String> {
    if base.iter().any(|m| m == static_files) {
        return base.to_vec();
    }

    let at = base
        .iter()
        .position(|m| m == security)
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut chain = Vec::with_capacity(base.len() + 1);
    chain.extend_from_slice(&base[..at]);
    chain.push(static_files.to_string());
    chain.extend_from_slice(&base[at..]);
    chain
}

/// Applies [`resolve_middleware`] with the identifiers from the profile.
pub fn resolve_configured_middleware(config: &MiddlewareConfig) -> Vec<String> {
    resolve_middleware(&config.base, &config.security, &config.static_files)
}
