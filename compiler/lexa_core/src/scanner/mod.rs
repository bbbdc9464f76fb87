//! Scanning algorithms as composable expression values.
//!
//! A [`Scanner`] captures one algorithm together with its operands, so the
//! result of a combinator is itself a scannable expression and can be fed
//! into further combinators. The `Expr` builders below are the usual way
//! to construct them:
//!
//! ```
//! use lexa_core::{Cursor, Expr, Scan};
//!
//! let digits = Expr::one_or_more(Expr::range('0', '9'));
//! let number = digits.clone().then(Expr::optional(Expr::join(['.'.into(), digits])));
//!
//! let mut cursor = Cursor::new("12.5;");
//! assert!(number.scan(&mut cursor));
//! assert_eq!(cursor.pos(), 4);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::algorithms::{
    advance_if_any, advance_if_not, advance_join_if, advance_max_if, advance_min_if,
    advance_n_if, advance_optionally, advance_past_if_found, advance_repeating,
    advance_to_if_found, advance_while, advance_while_not,
};
use crate::{Cursor, Expr, Scan};

/// A hand-written sub-scanner.
///
/// Wrapped in [`Scanner::Custom`], it is rolled back on failure, so the
/// closure does not have to restore the cursor itself.
#[derive(Clone)]
pub struct CustomScan(Rc<dyn Fn(&mut Cursor<'_>) -> bool>);

impl CustomScan {
    pub fn new(f: impl Fn(&mut Cursor<'_>) -> bool + 'static) -> Self {
        CustomScan(Rc::new(f))
    }
}

impl fmt::Debug for CustomScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomScan(..)")
    }
}

/// One scanning algorithm applied to its operand expressions.
#[derive(Clone, Debug)]
pub enum Scanner {
    /// [`advance_if_not`]: one character where the operand does not match.
    Not(Expr),
    /// [`advance_optionally`]
    Optional(Expr),
    /// [`advance_while`]: zero or more.
    Many(Expr),
    /// [`advance_while_not`]: everything up to the operand.
    Until(Expr),
    /// [`advance_n_if`]
    Exactly(Expr, usize),
    /// [`advance_min_if`]
    AtLeast(Expr, usize),
    /// [`advance_max_if`]
    AtMost(Expr, usize),
    /// [`advance_repeating`]
    Repeat { expr: Expr, min: usize, max: usize },
    /// [`advance_if_any`]: first match wins.
    Any(Vec<Expr>),
    /// [`advance_join_if`]: ordered sequence.
    Join(Vec<Expr>),
    /// [`advance_to_if_found`]
    To(Expr),
    /// [`advance_past_if_found`]
    Past(Expr),
    Custom(CustomScan),
}

impl Scan for Scanner {
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Scanner::Not(expr) => advance_if_not(cursor, expr),
            Scanner::Optional(expr) => advance_optionally(cursor, expr),
            Scanner::Many(Expr::Predicate(pred)) => {
                cursor.eat_while(|c| pred.test(c));
                true
            }
            Scanner::Many(expr) => advance_while(cursor, expr),
            Scanner::Until(expr) => advance_while_not(cursor, expr),
            Scanner::Exactly(expr, n) => advance_n_if(cursor, expr, *n),
            Scanner::AtLeast(expr, min) => advance_min_if(cursor, expr, *min),
            Scanner::AtMost(expr, max) => advance_max_if(cursor, expr, *max),
            Scanner::Repeat { expr, min, max } => advance_repeating(cursor, expr, *min, *max),
            Scanner::Any(exprs) => advance_if_any(cursor, exprs),
            Scanner::Join(exprs) => advance_join_if(cursor, exprs),
            // Searches leave the cursor at end of input on failure; wrapped
            // as an expression they must roll back like everything else.
            Scanner::To(expr) => {
                let start = cursor.pos();
                advance_to_if_found(cursor, expr) || {
                    cursor.set_pos(start);
                    false
                }
            }
            Scanner::Past(expr) => {
                let start = cursor.pos();
                advance_past_if_found(cursor, expr) || {
                    cursor.set_pos(start);
                    false
                }
            }
            Scanner::Custom(custom) => {
                let start = cursor.pos();
                (custom.0)(cursor) || {
                    cursor.set_pos(start);
                    false
                }
            }
        }
    }
}

fn collect(exprs: impl IntoIterator<Item = impl Into<Expr>>) -> Vec<Expr> {
    exprs.into_iter().map(Into::into).collect()
}

impl Expr {
    /// One character where `expr` does not match.
    pub fn not(expr: impl Into<Expr>) -> Expr {
        Scanner::Not(expr.into()).into()
    }

    /// `expr`, or nothing.
    pub fn optional(expr: impl Into<Expr>) -> Expr {
        Scanner::Optional(expr.into()).into()
    }

    /// Zero or more `expr`.
    pub fn many(expr: impl Into<Expr>) -> Expr {
        Scanner::Many(expr.into()).into()
    }

    /// One or more `expr`.
    pub fn one_or_more(expr: impl Into<Expr>) -> Expr {
        Expr::at_least(expr, 1)
    }

    /// Everything up to (not including) the next `expr` or end of input.
    pub fn until(expr: impl Into<Expr>) -> Expr {
        Scanner::Until(expr.into()).into()
    }

    pub fn exactly(expr: impl Into<Expr>, n: usize) -> Expr {
        Scanner::Exactly(expr.into(), n).into()
    }

    pub fn at_least(expr: impl Into<Expr>, min: usize) -> Expr {
        Scanner::AtLeast(expr.into(), min).into()
    }

    pub fn at_most(expr: impl Into<Expr>, max: usize) -> Expr {
        Scanner::AtMost(expr.into(), max).into()
    }

    pub fn repeat(expr: impl Into<Expr>, min: usize, max: usize) -> Expr {
        Scanner::Repeat {
            expr: expr.into(),
            min,
            max,
        }
        .into()
    }

    /// First-match-wins alternation, in listed order.
    pub fn any(exprs: impl IntoIterator<Item = impl Into<Expr>>) -> Expr {
        Scanner::Any(collect(exprs)).into()
    }

    /// Ordered sequence.
    pub fn join(exprs: impl IntoIterator<Item = impl Into<Expr>>) -> Expr {
        Scanner::Join(collect(exprs)).into()
    }

    /// Search forward to `expr` without consuming it.
    pub fn to(expr: impl Into<Expr>) -> Expr {
        Scanner::To(expr.into()).into()
    }

    /// Search forward to `expr` and consume it.
    pub fn past(expr: impl Into<Expr>) -> Expr {
        Scanner::Past(expr.into()).into()
    }

    /// Hand-written sub-scanner.
    pub fn custom(f: impl Fn(&mut Cursor<'_>) -> bool + 'static) -> Expr {
        Scanner::Custom(CustomScan::new(f)).into()
    }

    /// Sequence `self` then `next`, extending an existing sequence in place.
    #[must_use]
    pub fn then(self, next: impl Into<Expr>) -> Expr {
        let mut parts = match self.as_scanner() {
            Some(Scanner::Join(parts)) => parts.clone(),
            _ => vec![self],
        };
        parts.push(next.into());
        Scanner::Join(parts).into()
    }

    /// Alternation `self` or else `alt`, extending an existing alternation.
    #[must_use]
    pub fn or(self, alt: impl Into<Expr>) -> Expr {
        let mut alts = match self.as_scanner() {
            Some(Scanner::Any(alts)) => alts.clone(),
            _ => vec![self],
        };
        alts.push(alt.into());
        Scanner::Any(alts).into()
    }
}
