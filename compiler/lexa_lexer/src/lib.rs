//! Rule-driven tokenizer for lexa.
//!
//! A [`Tokenizer`] holds an ordered list of [`Rule`]s, each an
//! [`Expr`](lexa_core::Expr) paired with an [`Action`]. Scanning a source
//! tries the rules in order at each position, emits one [`Token`] per
//! match, and reports lexical errors into a per-session
//! [`Diagnostics`](lexa_diagnostic::Diagnostics) collector instead of
//! stopping.
//!
//! # Example
//!
//! ```
//! use lexa_lexer::{patterns, Rule, TokenTag, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(vec![
//!     Rule::skip(patterns::whitespace()),
//!     Rule::new(patterns::number(), patterns::number_action),
//!     Rule::token("+", TokenTag::Literal),
//! ]);
//! let stream = tokenizer.tokenize("1 + 2.5");
//! assert_eq!(
//!     stream.tags(),
//!     [TokenTag::Number, TokenTag::Literal, TokenTag::Number, TokenTag::Eof]
//! );
//! assert!(!stream.has_errors());
//! ```

mod config;
pub mod patterns;
mod rule;
mod token;
mod tokenizer;

pub use config::TokenizerConfig;
pub use rule::{action, Action, Emit, Lexeme, Rule};
pub use token::{Token, TokenTag, TokenValue};
pub use tokenizer::{TokenStream, Tokenizer, Tokens};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Drivers call this once at startup; the library itself only emits
/// events. Does nothing unless `RUST_LOG` is set, and only the first call
/// has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
