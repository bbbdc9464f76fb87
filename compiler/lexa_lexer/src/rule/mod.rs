//! Tokenizer rules: an expression paired with the action that turns its
//! match into a token.

use std::fmt;
use std::rc::Rc;

use lexa_core::{Cursor, Expr, Span};
use lexa_diagnostic::LexErrorKind;

use crate::{TokenTag, TokenValue};

/// The text a rule matched, handed to its action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'src> {
    source: &'src str,
    span: Span,
}

impl<'src> Lexeme<'src> {
    pub fn new(source: &'src str, span: Span) -> Self {
        Lexeme { source, span }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The matched text.
    pub fn text(&self) -> &'src str {
        self.span.slice(self.source)
    }

    /// The matched text with `front` characters dropped from the start and
    /// `back` from the end; `trimmed(1, 1)` strips a pair of quotes.
    /// Overlapping trims yield `""`.
    pub fn trimmed(&self, front: usize, back: usize) -> &'src str {
        let mut cursor = Cursor::with_offset(self.source, self.span.start);
        cursor.save();
        cursor.set_pos(self.span.end);
        cursor.slice(cursor.span_since_mark(front, back))
    }
}

/// What an action wants the tokenizer to do with a match.
#[derive(Clone, Debug, PartialEq)]
pub enum Emit<'src> {
    /// Produce a token spanning the match.
    Token {
        tag: TokenTag,
        value: TokenValue<'src>,
    },
    /// Drop the match (whitespace, comments) and keep scanning.
    Skip,
    /// Produce an error token spanning the match and record a diagnostic.
    Error(LexErrorKind),
}

impl<'src> Emit<'src> {
    pub fn token(tag: TokenTag, value: TokenValue<'src>) -> Self {
        Emit::Token { tag, value }
    }
}

/// Turns a [`Lexeme`] into an [`Emit`].
pub type Action = Rc<dyn for<'src> Fn(&Lexeme<'src>) -> Emit<'src>>;

/// Wrap a closure as a shareable [`Action`].
pub fn action(f: impl for<'src> Fn(&Lexeme<'src>) -> Emit<'src> + 'static) -> Action {
    Rc::new(f)
}

/// One tokenizer rule. Rules are tried in registration order and the first
/// non-empty match wins.
#[derive(Clone)]
pub struct Rule {
    expr: Expr,
    action: Action,
}

impl Rule {
    pub fn new(
        expr: impl Into<Expr>,
        action: impl for<'src> Fn(&Lexeme<'src>) -> Emit<'src> + 'static,
    ) -> Self {
        Self::with_action(expr, Rc::new(action))
    }

    /// Build a rule around an existing (possibly shared) action.
    pub fn with_action(expr: impl Into<Expr>, action: Action) -> Self {
        Rule {
            expr: expr.into(),
            action,
        }
    }

    /// A rule emitting `tag` with the matched text as its value.
    pub fn token(expr: impl Into<Expr>, tag: TokenTag) -> Self {
        Self::new(expr, move |lexeme| {
            Emit::token(tag, TokenValue::Text(lexeme.text()))
        })
    }

    /// A rule whose matches are dropped.
    pub fn skip(expr: impl Into<Expr>) -> Self {
        Self::new(expr, |_| Emit::Skip)
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Run this rule's action on a match.
    pub fn apply<'src>(&self, lexeme: &Lexeme<'src>) -> Emit<'src> {
        (self.action)(lexeme)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("expr", &self.expr)
            .finish_non_exhaustive()
    }
}
