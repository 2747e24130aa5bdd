//! Logging tree handed to the web framework.
//!
//! The trees are fixed: nothing here reads the environment.

use serde::Serialize;
use std::collections::BTreeMap;

const STREAM_HANDLER: &str = "logging.StreamHandler";
const CONSOLE: &str = "console";

/// Framework log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Root of the logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    pub version: u8,
    pub disable_existing_loggers: bool,
    pub handlers: BTreeMap<String, HandlerConfig>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub formatters: BTreeMap<String, FormatterConfig>,
    pub root: LoggerConfig,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub loggers: BTreeMap<String, LoggerConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatterConfig {
    pub format: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    pub handlers: Vec<String>,
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate: Option<bool>,
}

impl LoggerConfig {
    fn console(level: LogLevel) -> Self {
        Self {
            handlers: vec![CONSOLE.to_string()],
            level,
            propagate: None,
        }
    }

    fn silenced() -> Self {
        Self {
            handlers: Vec::new(),
            level: LogLevel::Critical,
            propagate: Some(false),
        }
    }
}

/// Production tree: errors only, noisy libraries silenced.
pub fn resolve_logging() -> LoggingConfig {
    let mut handlers = BTreeMap::new();
    handlers.insert(
        CONSOLE.to_string(),
        HandlerConfig {
            level: Some(LogLevel::Error),
            class: STREAM_HANDLER.to_string(),
            formatter: Some("simple".to_string()),
        },
    );

    let mut formatters = BTreeMap::new();
    formatters.insert(
        "simple".to_string(),
        FormatterConfig {
            format: "{levelname}: {message}".to_string(),
            style: "{".to_string(),
        },
    );

    let mut loggers = BTreeMap::new();
    loggers.insert(
        "django".to_string(),
        LoggerConfig {
            propagate: Some(false),
            ..LoggerConfig::console(LogLevel::Error)
        },
    );
    for noisy in ["django.db.backends", "django.contrib.staticfiles", "PIL"] {
        loggers.insert(noisy.to_string(), LoggerConfig::silenced());
    }

    LoggingConfig {
        version: 1,
        disable_existing_loggers: true,
        handlers,
        formatters,
        root: LoggerConfig::console(LogLevel::Error),
        loggers,
    }
}

/// Development tree: everything at INFO to the console.
pub fn development_logging() -> LoggingConfig {
    let mut handlers = BTreeMap::new();
    handlers.insert(
        CONSOLE.to_string(),
        HandlerConfig {
            level: None,
            class: STREAM_HANDLER.to_string(),
            formatter: None,
        },
    );

    LoggingConfig {
        version: 1,
        disable_existing_loggers: false,
        handlers,
        formatters: BTreeMap::new(),
        root: LoggerConfig::console(LogLevel::Info),
        loggers: BTreeMap::new(),
    }
}
