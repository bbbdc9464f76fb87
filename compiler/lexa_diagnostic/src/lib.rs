//! Diagnostics for lexical scanning.
//!
//! - [`LexError`] / [`LexErrorKind`]: what went wrong and where
//! - [`Diagnostics`]: the explicit per-session collector the tokenizer
//!   reports into, read by the driver once scanning completes
//! - [`DiagnosticConfig`]: collection limits
//!
//! Match failures inside the combinators are not diagnostics; only the
//! tokenizer decides when a failure becomes user-visible.

mod diagnostics;
mod lex_error;

pub use diagnostics::{DiagnosticConfig, Diagnostics};
pub use lex_error::{LexError, LexErrorKind};
