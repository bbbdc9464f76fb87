//! Tokens produced by the [`Tokenizer`](crate::Tokenizer).
//!
//! A token borrows its text from the scanned buffer, so a token sequence
//! lives no longer than the source it was produced from.

use std::fmt;

use lexa_core::{SourceLocation, Span};

/// Closed set of token categories.
///
/// Operators and punctuation are all `Literal`; the lexeme text tells
/// them apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenTag {
    Literal,
    Identifier,
    Number,
    String,
    Keyword,
    /// End of input. Always the last token, with an empty span.
    Eof,
    /// Text no rule accepted, or that a rule's action rejected.
    Error,
}

impl TokenTag {
    /// Human-readable name for logging and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Literal => "literal",
            TokenTag::Identifier => "identifier",
            TokenTag::Number => "number",
            TokenTag::String => "string",
            TokenTag::Keyword => "keyword",
            TokenTag::Eof => "end of input",
            TokenTag::Error => "error",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded payload of a token.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenValue<'src> {
    None,
    /// Text borrowed from the source (identifier name, string contents).
    Text(&'src str),
    Number(f64),
}

impl<'src> TokenValue<'src> {
    pub fn as_text(&self) -> Option<&'src str> {
        match *self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// One token: category, decoded value, and where it came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub tag: TokenTag,
    pub value: TokenValue<'src>,
    /// Span of the full lexeme, delimiters included.
    pub lexeme: Span,
    /// Filled in only when the tokenizer is configured to attach locations.
    pub location: Option<SourceLocation>,
}

impl<'src> Token<'src> {
    pub fn new(tag: TokenTag, value: TokenValue<'src>, lexeme: Span) -> Self {
        Token {
            tag,
            value,
            lexeme,
            location: None,
        }
    }

    /// The end-of-input token: an empty span at `offset`.
    pub fn eof(offset: u32) -> Self {
        Self::new(TokenTag::Eof, TokenValue::None, Span::point(offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.tag == TokenTag::Eof
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.tag == TokenTag::Error
    }

    /// The lexeme's text in `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.lexeme.slice(source)
    }

    /// Line and column of the lexeme's first character.
    ///
    /// Uses the attached location when present, otherwise derives it from
    /// `source`, which must be the buffer this token was scanned from.
    pub fn source_location(&self, source: &str) -> SourceLocation {
        self.location
            .unwrap_or_else(|| SourceLocation::from_offset(source, self.lexeme.start))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{} @ {}", self.tag, self.lexeme),
            TokenValue::Text(text) => write!(f, "{} {text:?} @ {}", self.tag, self.lexeme),
            TokenValue::Number(n) => write!(f, "{} {n} @ {}", self.tag, self.lexeme),
        }
    }
}
