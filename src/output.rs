//! Rendering the settings mapping for the hosting framework.

use std::str::FromStr;
use thiserror::Error;

use crate::settings::Settings;

/// Serialization format of the rendered settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

/// Rendering error.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unknown output format: {0} (expected yaml or json)")]
    UnknownFormat(String),
    #[error("failed to render yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes the settings. The password is masked unless `show_secrets`.
pub fn render(
    settings: &Settings,
    format: OutputFormat,
    show_secrets: bool,
) -> Result<String, OutputError> {
    let redacted;
    let settings = if show_secrets {
        settings
    } else {
        redacted = settings.redacted();
        &redacted
    };

    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(settings)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(settings)?),
    }
}
