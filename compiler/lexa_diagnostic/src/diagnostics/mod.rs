//! Per-session collector for lexical errors.
//!
//! One [`Diagnostics`] is created for each scan session and handed back
//! to the driver when scanning completes. There is no process-wide error
//! state: whether a scan "had errors" is a property of its collector.
//!
//! Features:
//! - Error limit: errors past the limit are counted but not stored
//! - Rendering with `line:column` prefixes via a [`LineIndex`]

use std::fmt::Write as _;

use lexa_core::LineIndex;

use crate::LexError;

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors to store (0 = unlimited).
    pub error_limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig { error_limit: 100 }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }
}

/// Errors collected during one scan session.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    errors: Vec<LexError>,
    /// Errors reported after the limit was reached.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl Diagnostics {
    /// Create an empty collector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector with a custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        Diagnostics {
            errors: Vec::new(),
            suppressed: 0,
            config,
        }
    }

    /// Record an error.
    ///
    /// Returns `true` if the error was stored, `false` if it only counted
    /// toward [`suppressed()`](Self::suppressed) because the limit was hit.
    pub fn push(&mut self, error: LexError) -> bool {
        if self.is_at_limit() {
            self.suppressed += 1;
            false
        } else {
            self.errors.push(error);
            true
        }
    }

    fn is_at_limit(&self) -> bool {
        self.config.error_limit > 0 && self.errors.len() >= self.config.error_limit
    }

    /// Returns `true` if any error was reported, stored or not.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.suppressed > 0
    }

    /// Number of stored errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors dropped because of the error limit.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<LexError> {
        self.errors
    }

    /// Render every stored error as `line:col: error: message`, one per
    /// line, followed by a summary of suppressed errors if any.
    ///
    /// `source` must be the text the errors were reported against.
    pub fn render(&self, source: &str) -> String {
        let index = LineIndex::build(source);
        let mut out = String::new();
        for error in &self.errors {
            let location = index.location(source, error.span.start);
            writeln!(out, "{location}: error: {error}").ok();
        }
        if self.suppressed > 0 {
            writeln!(
                out,
                "note: {} more error(s) not shown (limit {})",
                self.suppressed, self.config.error_limit
            )
            .ok();
        }
        out
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
