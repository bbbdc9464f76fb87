//! Reusable expressions and actions for common lexeme shapes.
//!
//! Everything here is built from the public [`Expr`] combinators; a lexer
//! that needs a different shape composes its own the same way.

use lexa_core::Expr;
use lexa_diagnostic::LexErrorKind;
use rustc_hash::FxHashSet;

use crate::rule::action;
use crate::{Action, Emit, Lexeme, TokenTag, TokenValue};

/// One ASCII decimal digit.
pub fn digit() -> Expr {
    Expr::range('0', '9')
}

/// One or more ASCII decimal digits.
pub fn digits() -> Expr {
    Expr::one_or_more(digit())
}

/// `digits ('.' digits)?`
///
/// The fraction is all-or-nothing: `12.` matches only `12`, leaving the
/// dot for another rule.
pub fn number() -> Expr {
    digits().then(Expr::optional(Expr::join([Expr::from('.'), digits()])))
}

pub fn ident_start() -> Expr {
    Expr::pred(|c| c.is_alphabetic() || c == '_')
}

pub fn ident_continue() -> Expr {
    Expr::pred(|c| c.is_alphanumeric() || c == '_')
}

/// `ident_start ident_continue*`
pub fn identifier() -> Expr {
    ident_start().then(Expr::many(ident_continue()))
}

/// One or more whitespace characters, line breaks included.
pub fn whitespace() -> Expr {
    Expr::one_or_more(Expr::pred(char::is_whitespace))
}

/// `"\r\n"` or `'\n'`.
pub fn newline() -> Expr {
    Expr::any([Expr::lit("\r\n"), Expr::from('\n')])
}

/// `prefix` followed by everything up to the end of the line.
/// The line break itself is not consumed.
pub fn line_comment(prefix: &str) -> Expr {
    Expr::lit(prefix).then(Expr::until(newline()))
}

/// `open` through the matching `close`, or through end of input when
/// `close` never appears. Pair with [`block_comment_action`].
pub fn block_comment(open: &str, close: &str) -> Expr {
    Expr::lit(open).then(rest_through(Expr::lit(close)))
}

/// `delim` through the next `delim`, or through end of input when the
/// literal is unterminated. Pair with [`string_action`].
///
/// No escape sequences are recognized.
pub fn quoted(delim: char) -> Expr {
    Expr::from(delim).then(rest_through(Expr::from(delim)))
}

fn rest_through(close: Expr) -> Expr {
    Expr::any([Expr::past(close), Expr::many(Expr::any_char())])
}

/// Decode a [`number`] match into a [`TokenValue::Number`].
pub fn number_action<'src>(lexeme: &Lexeme<'src>) -> Emit<'src> {
    match lexeme.text().parse::<f64>() {
        Ok(n) => Emit::token(TokenTag::Number, TokenValue::Number(n)),
        Err(_) => Emit::Error(LexErrorKind::Invalid {
            what: "number",
            text: lexeme.text().to_string(),
        }),
    }
}

/// Turn a [`quoted`] match into a string token whose value excludes the
/// delimiters, or an unterminated-string error when the closing delimiter
/// is missing.
pub fn string_action(delim: char) -> Action {
    let close = delim.to_string();
    action(move |lexeme| {
        if is_closed(lexeme.text(), &close, close.len()) {
            Emit::token(TokenTag::String, TokenValue::Text(lexeme.trimmed(1, 1)))
        } else {
            Emit::Error(LexErrorKind::Unterminated {
                what: "string",
                expected: close.clone(),
            })
        }
    })
}

/// Skip a terminated [`block_comment`]; report an unterminated one.
pub fn block_comment_action(open: &str, close: &str) -> Action {
    let open_len = open.len();
    let close = close.to_string();
    action(move |lexeme| {
        if is_closed(lexeme.text(), &close, open_len) {
            Emit::Skip
        } else {
            Emit::Error(LexErrorKind::Unterminated {
                what: "block comment",
                expected: close.clone(),
            })
        }
    })
}

/// `text` ends with `close`, and the closer does not overlap the
/// `open_len` opening bytes.
fn is_closed(text: &str, close: &str, open_len: usize) -> bool {
    text.len() >= open_len + close.len() && text.ends_with(close)
}

/// Reserved words of a language.
///
/// Identifiers and keywords are matched by one expression (the longer
/// shape); the table then reclassifies the reserved ones.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashSet<Box<str>>,
}

impl KeywordTable {
    pub fn new<'w>(words: impl IntoIterator<Item = &'w str>) -> Self {
        KeywordTable {
            words: words.into_iter().map(Box::from).collect(),
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// [`TokenTag::Keyword`] for reserved words, otherwise
    /// [`TokenTag::Identifier`].
    pub fn classify(&self, text: &str) -> TokenTag {
        if self.contains(text) {
            TokenTag::Keyword
        } else {
            TokenTag::Identifier
        }
    }

    /// An action emitting the classified tag with the word as its value.
    pub fn into_action(self) -> Action {
        action(move |lexeme| {
            let text = lexeme.text();
            Emit::token(self.classify(text), TokenValue::Text(text))
        })
    }
}
