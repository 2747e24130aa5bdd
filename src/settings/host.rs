//! Database host discovery.

use super::diagnostics::Diagnostics;
use crate::env::EnvSnapshot;

pub const PRIVATE_DOMAIN_VAR: &str = "RAILWAY_PRIVATE_DOMAIN";
pub const GENERIC_HOST_VAR: &str = "PGHOST";

/// Service names checked as `<NAME>_HOST`, highest priority first.
pub const HOST_CANDIDATES: [&str; 3] = ["postgres", "postgresql", "database"];

/// Host used when nothing in the environment names one.
pub const FALLBACK_HOST: &str = "postgres";

const LOOPBACK_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "0.0.0.0"];

/// Resolves the database host.
///
/// Order: the private domain, then each `<CANDIDATE>_HOST`, then `PGHOST`
/// unless it points at loopback, then [`FALLBACK_HOST`]. Never returns an
/// empty string.
pub fn resolve_host(env: &EnvSnapshot, diagnostics: &mut Diagnostics) -> String {
    if let Some(domain) = env.get(PRIVATE_DOMAIN_VAR) {
        diagnostics.info(format!("database host from {}: {}", PRIVATE_DOMAIN_VAR, domain));
        return domain.to_string();
    }

    for candidate in HOST_CANDIDATES {
        let var = format!("{}_HOST", candidate.to_uppercase());
        if let Some(host) = env.get(&var) {
            diagnostics.info(format!("database host from {}: {}", var, host));
            return host.to_string();
        }
    }

    match env.get(GENERIC_HOST_VAR) {
        Some(host) if !is_loopback(host) => {
            diagnostics.info(format!("database host from {}: {}", GENERIC_HOST_VAR, host));
            return host.to_string();
        }
        Some(host) => {
            diagnostics.warn(format!(
                "ignoring loopback {}={}, it cannot reach a separate database service",
                GENERIC_HOST_VAR, host
            ));
        }
        None => {}
    }

    diagnostics.info(format!("database host defaulted to {}", FALLBACK_HOST));
    FALLBACK_HOST.to_string()
}

fn is_loopback(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    LOOPBACK_HOSTS
        .iter()
        .any(|lo| host.eq_ignore_ascii_case(lo))
}
