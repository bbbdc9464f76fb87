//! The rule-driven tokenizer.
//!
//! Each step records its start offset, tries every rule in registration
//! order, and turns the first non-empty match into a token. A character no
//! rule accepts becomes a one-character error token, so scanning always
//! makes progress and always reaches the end-of-input token.

use std::iter::FusedIterator;

use lexa_core::{Cursor, LineIndex, Scan, Span};
use lexa_diagnostic::{Diagnostics, LexError};
use tracing::{debug, trace};

use crate::{Emit, Lexeme, Rule, Token, TokenTag, TokenValue, TokenizerConfig};

/// An ordered rule set. Reusable across any number of sources.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    rules: Vec<Rule>,
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self::with_config(rules, TokenizerConfig::default())
    }

    pub fn with_config(rules: Vec<Rule>, config: TokenizerConfig) -> Self {
        Tokenizer { rules, config }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lazily scan `source`, one token per `next()`.
    ///
    /// The final item is always an [`Eof`](TokenTag::Eof) token.
    pub fn tokens<'t, 'src>(&'t self, source: &'src str) -> Tokens<'t, 'src> {
        Tokens {
            rules: &self.rules,
            attach_locations: self.config.attach_locations,
            cursor: Cursor::new(source),
            state: State::Scanning,
            diagnostics: Diagnostics::with_config(self.config.diagnostics.clone()),
            line_index: None,
        }
    }

    /// Scan all of `source` and return the tokens with the session's
    /// diagnostics.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn tokenize<'src>(&self, source: &'src str) -> TokenStream<'src> {
        let mut tokens = self.tokens(source);
        let collected: Vec<Token<'src>> = tokens.by_ref().collect();
        TokenStream {
            tokens: collected,
            diagnostics: tokens.into_diagnostics(),
        }
    }
}

/// Result of [`Tokenizer::tokenize`].
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    /// Every token, ending with exactly one `Eof`.
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Diagnostics,
}

impl TokenStream<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn tags(&self) -> Vec<TokenTag> {
        self.tokens.iter().map(|t| t.tag).collect()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    End,
}

/// Token iterator over one source buffer. See [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'t, 'src> {
    rules: &'t [Rule],
    attach_locations: bool,
    cursor: Cursor<'src>,
    state: State,
    diagnostics: Diagnostics,
    /// Built on first use when locations are attached.
    line_index: Option<LineIndex>,
}

impl<'t, 'src> Tokens<'t, 'src> {
    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Errors reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Try each rule at `start`. Returns the first rule with a non-empty
    /// match and its span; empty matches are rolled back.
    ///
    /// The span is measured from `start`, not from the cursor mark: a
    /// custom sub-scanner is free to `save()` over the mark.
    fn match_rule(&mut self, start: u32) -> Option<(&'t Rule, Span)> {
        let rules = self.rules;
        for rule in rules {
            if rule.expr().scan(&mut self.cursor) {
                let span = Span::new(start, self.cursor.pos());
                if !span.is_empty() {
                    return Some((rule, span));
                }
            }
            self.cursor.set_pos(start);
        }
        None
    }

    fn unexpected_char(&mut self, start: u32) -> Token<'src> {
        self.cursor.set_pos(start);
        let ch = self.cursor.peek();
        self.cursor.bump();
        let span = Span::new(start, self.cursor.pos());
        debug!(pos = span.start, ch = %ch.escape_debug(), "no rule matched");
        self.diagnostics.push(LexError::unexpected_char(span, ch));
        Token::new(
            TokenTag::Error,
            TokenValue::Text(self.cursor.slice(span)),
            span,
        )
    }

    fn finish(&mut self, mut token: Token<'src>) -> Token<'src> {
        if self.attach_locations {
            let source = self.cursor.source();
            let index = self
                .line_index
                .get_or_insert_with(|| LineIndex::build(source));
            token.location = Some(index.location(source, token.lexeme.start));
        }
        trace!(
            pos = self.cursor.pos(),
            tag = %token.tag,
            span_start = token.lexeme.start,
            span_end = token.lexeme.end,
            "token"
        );
        token
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            if self.state == State::End {
                return None;
            }
            if self.cursor.at_end() {
                self.state = State::End;
                debug!(
                    len = self.cursor.len(),
                    errors = self.diagnostics.len(),
                    "end of input"
                );
                let eof = Token::eof(self.cursor.len());
                return Some(self.finish(eof));
            }

            let start = self.cursor.pos();
            let source = self.cursor.source();
            let Some((rule, span)) = self.match_rule(start) else {
                let token = self.unexpected_char(start);
                return Some(self.finish(token));
            };

            match rule.apply(&Lexeme::new(source, span)) {
                Emit::Token { tag, value } => {
                    let token = Token::new(tag, value, span);
                    return Some(self.finish(token));
                }
                Emit::Skip => {
                    trace!(span_start = span.start, span_end = span.end, "skip");
                }
                Emit::Error(kind) => {
                    debug!(
                        span_start = span.start,
                        span_end = span.end,
                        %kind,
                        "rule rejected match"
                    );
                    self.diagnostics.push(LexError::new(span, kind));
                    let token =
                        Token::new(TokenTag::Error, TokenValue::Text(span.slice(source)), span);
                    return Some(self.finish(token));
                }
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
