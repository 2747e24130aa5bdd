//! Human-readable notes collected while resolving settings.

use tracing::{info, warn};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Which branch was taken.
    Info,
    /// A fallback or forced default was applied.
    Warn,
}

/// A single diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Ordered diagnostics produced by one resolution pass.
///
/// Messages must never carry a raw password; callers pass URLs through
/// [`super::database::redact_url`] first.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Warn, message.into());
    }

    fn push(&mut self, level: DiagnosticLevel, message: String) {
        self.entries.push(Diagnostic { level, message });
    }

    /// Entries that [`Diagnostics::emit`] writes: warnings always,
    /// informational entries only when `verbose`.
    pub fn visible(&self, verbose: bool) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(move |d| verbose || d.level == DiagnosticLevel::Warn)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warn)
    }

    /// Returns true if any message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }

    /// Writes the diagnostics to the tracing subscriber.
    ///
    /// Informational entries are skipped unless `verbose` is set.
    pub fn emit(&self, verbose: bool) {
        for d in self.visible(verbose) {
            match d.level {
                DiagnosticLevel::Info => info!(target: "railway_settings", "{}", d.message),
                DiagnosticLevel::Warn => warn!(target: "railway_settings", "{}", d.message),
            }
        }
    }
}
