//! Diagnostic output configuration.

use serde::Deserialize;

/// Controls which resolution diagnostics are emitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosticsConfig {
    /// Emit informational branch descriptions, not just warnings.
    #[serde(default)]
    pub verbose: bool,
}
