//! Tokenizer configuration.

use lexa_diagnostic::DiagnosticConfig;

/// Options for one [`Tokenizer`](crate::Tokenizer).
///
/// The default attaches no locations and keeps the default error limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Fill [`Token::location`](crate::Token::location) for every token.
    /// When off, [`Token::source_location`](crate::Token::source_location)
    /// derives it on demand.
    pub attach_locations: bool,
    /// Limits for the per-session diagnostics collector.
    pub diagnostics: DiagnosticConfig,
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_locations(mut self, attach: bool) -> Self {
        self.attach_locations = attach;
        self
    }

    /// Store at most `limit` errors (0 = unlimited).
    #[must_use]
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.diagnostics.error_limit = limit;
        self
    }
}
