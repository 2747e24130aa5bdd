//! Database descriptor resolution.
//!
//! A connection URL is preferred when present and complete. Anything else
//! (malformed URL, foreign scheme, missing name/user/host) degrades to the
//! discrete `PG*` / `DB_*` variables, and a last guard forces literal
//! defaults so the descriptor is never missing a required field.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use super::diagnostics::Diagnostics;
use super::host::{FALLBACK_HOST, resolve_host};
use crate::config::DatabaseConfig;
use crate::env::EnvSnapshot;

pub const PRIVATE_URL_VAR: &str = "DATABASE_PRIVATE_URL";
pub const PUBLIC_URL_VAR: &str = "DATABASE_URL";

pub const ENGINE: &str = "django.db.backends.postgresql";
pub const DEFAULT_NAME: &str = "railway";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PORT: u16 = 5432;

const SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

const NAME_VARS: [&str; 2] = ["PGDATABASE", "DB_NAME"];
const USER_VARS: [&str; 2] = ["PGUSER", "DB_USER"];
const PASSWORD_VARS: [&str; 2] = ["PGPASSWORD", "DB_PASSWORD"];
const PORT_VARS: [&str; 2] = ["PGPORT", "DB_PORT"];

/// Connection parameters for the default database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DatabaseDescriptor {
    pub engine: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    /// Seconds a connection is kept for reuse.
    pub conn_max_age: u64,
    pub options: BTreeMap<String, String>,
}

impl DatabaseDescriptor {
    /// Checks that name, user and host are all present.
    pub fn validate(&self) -> Result<(), DatabaseUrlError> {
        if self.name.is_empty() {
            return Err(DatabaseUrlError::Incomplete("database name"));
        }
        if self.user.is_empty() {
            return Err(DatabaseUrlError::Incomplete("user"));
        }
        if self.host.is_empty() {
            return Err(DatabaseUrlError::Incomplete("host"));
        }
        Ok(())
    }
}

/// Reasons a connection URL is rejected.
///
/// None of these leave the resolver; each one triggers the discrete
/// variable fallback. Messages never include the URL itself.
#[derive(Debug, Error)]
pub enum DatabaseUrlError {
    #[error("unsupported scheme, expected postgres:// or postgresql://")]
    UnsupportedScheme,
    #[error("malformed URL: {0}")]
    Malformed(#[from] url::ParseError),
    #[error("invalid percent-encoding in the {0}")]
    Encoding(&'static str),
    #[error("URL has no {0}")]
    Incomplete(&'static str),
}

/// Resolves the default database descriptor from the environment.
///
/// Never fails and never returns a descriptor with an empty name, user
/// or host.
pub fn resolve_database(
    env: &EnvSnapshot,
    config: &DatabaseConfig,
    diagnostics: &mut Diagnostics,
) -> DatabaseDescriptor {
    match env.first_of(&[PRIVATE_URL_VAR, PUBLIC_URL_VAR]) {
        Some((var, raw)) => {
            diagnostics.info(format!("{} is set: {}", var, redact_url(raw)));
            match parse_database_url(raw, config) {
                Ok(descriptor) => {
                    diagnostics.info(format!(
                        "database resolved from {} (host {}, name {})",
                        var, descriptor.host, descriptor.name
                    ));
                    return descriptor;
                }
                Err(e) => diagnostics.warn(format!(
                    "{} rejected ({}), falling back to discrete variables",
                    var, e
                )),
            }
        }
        None => diagnostics.info("no database URL set, using discrete variables"),
    }

    let descriptor = from_discrete(env, config, diagnostics);
    ensure_required(descriptor, diagnostics)
}

/// Parses a `postgres://` or `postgresql://` URL into a validated descriptor.
///
/// Query parameters become connection options and override the profile's
/// `sslmode`. A `password` parameter fills the password when the userinfo
/// has none and is never kept as an option.
pub fn parse_database_url(
    raw: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseDescriptor, DatabaseUrlError> {
    let raw = raw.trim();
    if !SCHEMES.iter().any(|scheme| raw.starts_with(scheme)) {
        return Err(DatabaseUrlError::UnsupportedScheme);
    }

    let url = Url::parse(raw)?;

    let host = decode(
        url.host_str()
            .unwrap_or_default()
            .trim_start_matches('[')
            .trim_end_matches(']'),
        "host",
    )?;

    let mut password = decode(url.password().unwrap_or_default(), "password")?;
    let mut options = base_options(config);
    for (key, value) in url.query_pairs() {
        if is_password_key(&key) {
            // libpq accepts the password as a query parameter; userinfo wins.
            if password.is_empty() {
                password = value.into_owned();
            }
            continue;
        }
        options.insert(key.into_owned(), value.into_owned());
    }

    let descriptor = DatabaseDescriptor {
        engine: ENGINE.to_string(),
        name: decode(url.path().trim_start_matches('/'), "database name")?,
        user: decode(url.username(), "user")?,
        password,
        host,
        port: url.port().unwrap_or(DEFAULT_PORT).to_string(),
        conn_max_age: config.conn_max_age.as_secs(),
        options,
    };
    descriptor.validate()?;

    Ok(descriptor)
}

/// Replaces the password in a connection URL with `***`.
///
/// Masks both the userinfo password and any `password=` query value.
/// Works on malformed input too, since the preview is logged before the
/// URL is parsed.
pub fn redact_url(raw: &str) -> String {
    mask_query_password(&mask_userinfo(raw.trim()))
}

/// Returns true for the query key libpq reads the password from.
pub(crate) fn is_password_key(key: &str) -> bool {
    urlencoding::decode(key)
        .map(|k| k.eq_ignore_ascii_case("password"))
        .unwrap_or(false)
}

fn mask_userinfo(raw: &str) -> String {
    // A "://" only marks the scheme if nothing URL-structural precedes it;
    // a later one belongs to a query value.
    let start = raw
        .find("://")
        .filter(|&i| !raw[..i].contains(['@', '/', '?']))
        .map(|i| i + 3)
        .unwrap_or(0);

    if let Some(at) = raw.rfind('@').filter(|&at| at >= start) {
        let userinfo = &raw[start..at];
        return match userinfo.split_once(':') {
            Some((user, _)) => format!("{}{}:***{}", &raw[..start], user, &raw[at..]),
            None => raw.to_string(),
        };
    }

    // Without '@', "user:secret" is indistinguishable from "host:port"
    // unless the part after the colon is numeric.
    let authority_end = raw[start..]
        .find(['/', '?'])
        .map(|i| start + i)
        .unwrap_or(raw.len());
    match raw[start..authority_end].split_once(':') {
        Some((head, tail)) if !tail.chars().all(|c| c.is_ascii_digit()) => {
            format!("{}{}:***{}", &raw[..start], head, &raw[authority_end..])
        }
        _ => raw.to_string(),
    }
}

fn mask_query_password(url: &str) -> String {
    let Some(q) = url.find('?') else {
        return url.to_string();
    };
    let (head, query) = url.split_at(q + 1);
    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_password_key(key) => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect();
    format!("{}{}", head, pairs.join("&"))
}

fn from_discrete(
    env: &EnvSnapshot,
    config: &DatabaseConfig,
    diagnostics: &mut Diagnostics,
) -> DatabaseDescriptor {
    let host = resolve_host(env, diagnostics);
    let password = env.first_or(&PASSWORD_VARS, "");
    if password.is_empty() {
        diagnostics.warn("no database password set (PGPASSWORD / DB_PASSWORD)");
    }

    let port = env.first_or(&PORT_VARS, &DEFAULT_PORT.to_string());
    if port.parse::<u16>().is_err() {
        diagnostics.warn(format!("database port {:?} is not a valid port number", port));
    }

    let descriptor = DatabaseDescriptor {
        engine: ENGINE.to_string(),
        name: env.first_or(&NAME_VARS, DEFAULT_NAME),
        user: env.first_or(&USER_VARS, DEFAULT_USER),
        password,
        host,
        port,
        conn_max_age: config.conn_max_age.as_secs(),
        options: base_options(config),
    };

    diagnostics.info(format!(
        "database resolved from discrete variables (host {}, name {}, user {})",
        descriptor.host, descriptor.name, descriptor.user
    ));
    descriptor
}

fn ensure_required(
    mut descriptor: DatabaseDescriptor,
    diagnostics: &mut Diagnostics,
) -> DatabaseDescriptor {
    for (field, value, default) in [
        ("name", &mut descriptor.name, DEFAULT_NAME),
        ("user", &mut descriptor.user, DEFAULT_USER),
        ("host", &mut descriptor.host, FALLBACK_HOST),
    ] {
        if value.is_empty() {
            diagnostics.warn(format!("database {} is empty, forcing {:?}", field, default));
            *value = default.to_string();
        }
    }
    descriptor
}

fn base_options(config: &DatabaseConfig) -> BTreeMap<String, String> {
    let mut options = BTreeMap::new();
    if !config.sslmode.is_empty() {
        options.insert("sslmode".to_string(), config.sslmode.clone());
    }
    options
}

fn decode(value: &str, field: &'static str) -> Result<String, DatabaseUrlError> {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .map_err(|_| DatabaseUrlError::Encoding(field))
}
