//! Scan cursor and combinator engine for lexa.
//!
//! Standalone crate (no `lexa_*` dependencies) providing:
//!
//! - [`Cursor`]: a non-owning view over a source buffer with one saved mark
//! - [`Scan`] / [`Expr`]: the uniform scannable-expression contract over
//!   literals, single-character predicates, and sub-scanners
//! - [`algorithms`]: the combinator family (optional, repetition,
//!   alternation, sequence, search) as plain functions
//! - [`Scanner`]: the same algorithms captured as expression values for
//!   arbitrary nesting
//! - [`SourceLocation`] / [`LineIndex`]: lazy line/column derivation
//!
//! Nothing here fails with an error: a non-match is an ordinary `false`,
//! and a failed match never leaves the cursor partially advanced.
//!
//! # Example
//!
//! ```
//! use lexa_core::algorithms::{advance_if_any, advance_join_if};
//! use lexa_core::{Cursor, Expr};
//!
//! let digits = Expr::one_or_more(Expr::range('0', '9'));
//! let mut cursor = Cursor::new("12.x");
//!
//! // `digits '.' digits` fails as a unit and leaves nothing consumed.
//! assert!(!advance_join_if(&mut cursor, &[digits.clone(), '.'.into(), digits.clone()]));
//! assert_eq!(cursor.pos(), 0);
//!
//! assert!(advance_if_any(&mut cursor, &[Expr::from('x'), digits]));
//! assert_eq!(cursor.pos(), 2);
//! ```

pub mod algorithms;
mod cursor;
mod expr;
mod location;
mod scanner;
mod span;

pub use cursor::{Cursor, EOF_CHAR};
pub use expr::{Expr, Literal, Needle, Predicate, Scan};
pub use location::{LineIndex, SourceLocation};
pub use scanner::{CustomScan, Scanner};
pub use span::{Span, SpanError};
