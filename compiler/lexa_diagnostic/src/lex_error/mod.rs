//! Lexical error types.
//!
//! A [`LexError`] pairs WHERE (a [`Span`]) with WHAT ([`LexErrorKind`]).
//! The tokenizer never raises these; it records them in a
//! [`Diagnostics`](crate::Diagnostics) collector and emits an error token
//! in place of the offending text.

use lexa_core::{SourceLocation, Span};

/// A lexical error located in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No rule matched at this character.
    #[error("unexpected character `{}`", .ch.escape_debug())]
    UnexpectedChar { ch: char },

    /// A compound lexeme ran into end of input before its terminator,
    /// e.g. a string literal without its closing quote.
    #[error("unterminated {what}: expected `{expected}`")]
    Unterminated {
        what: &'static str,
        expected: String,
    },

    /// A rule matched text its action could not decode.
    #[error("invalid {what} `{text}`")]
    Invalid { what: &'static str, text: String },
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// Shorthand for [`LexErrorKind::UnexpectedChar`].
    pub fn unexpected_char(span: Span, ch: char) -> Self {
        Self::new(span, LexErrorKind::UnexpectedChar { ch })
    }

    /// Shorthand for [`LexErrorKind::Unterminated`].
    pub fn unterminated(span: Span, what: &'static str, expected: impl Into<String>) -> Self {
        Self::new(
            span,
            LexErrorKind::Unterminated {
                what,
                expected: expected.into(),
            },
        )
    }

    /// Location of the error's first character in `source`.
    pub fn location(&self, source: &str) -> SourceLocation {
        SourceLocation::from_offset(source, self.span.start)
    }
}
