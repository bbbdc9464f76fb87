//! Scanning algorithms over a cursor and scannable expressions.
//!
//! Every algorithm is a plain function returning `bool`. Apart from the
//! always-succeeding ones (`advance_optionally`, `advance_while`,
//! `advance_while_not`, `advance_max_if`) and the two searches, they obey
//! the all-or-nothing rule: on failure the cursor is back where it started.
//!
//! Each algorithm records its own start offset rather than using the
//! cursor's mark, so nesting them never disturbs a caller's `save()`.
//!
//! Repetition loops stop as soon as an iteration succeeds without
//! consuming anything, so an expression that can match the empty string
//! (e.g. an optional) cannot spin forever.

use crate::{Cursor, Needle, Scan};

/// Consume `expr` once.
#[inline]
pub fn advance_if<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    let start = cursor.pos();
    if expr.scan(cursor) {
        true
    } else {
        // Enforce the contract even for hand-written scanners that leak
        // partial progress.
        cursor.set_pos(start);
        false
    }
}

/// Consume exactly one character if `expr` does not match here.
///
/// Fails without moving if `expr` matches or the input is exhausted.
pub fn advance_if_not<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    if cursor.at_end() {
        return false;
    }
    let start = cursor.pos();
    if expr.scan(cursor) {
        cursor.set_pos(start);
        return false;
    }
    cursor.set_pos(start);
    cursor.bump();
    true
}

/// Try `expr` once. Always succeeds.
#[inline]
pub fn advance_optionally<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    advance_if(cursor, expr);
    true
}

/// Consume `expr` zero or more times. Always succeeds.
pub fn advance_while<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    loop {
        let before = cursor.pos();
        if !advance_if(cursor, expr) || cursor.pos() == before {
            return true;
        }
    }
}

/// Consume characters until `expr` matches or the input ends. Always
/// succeeds. The match itself is not consumed.
pub fn advance_while_not<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    while advance_if_not(cursor, expr) {}
    true
}

/// Consume `expr` exactly `n` times in a row, or nothing at all.
pub fn advance_n_if<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S, n: usize) -> bool {
    let start = cursor.pos();
    for _ in 0..n {
        if !advance_if(cursor, expr) {
            cursor.set_pos(start);
            return false;
        }
    }
    true
}

/// Consume `expr` at least `min` times, then as often as it matches.
///
/// Fails without moving if the minimum is not met.
pub fn advance_min_if<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S, min: usize) -> bool {
    advance_n_if(cursor, expr, min) && advance_while(cursor, expr)
}

/// Consume `expr` at most `max` times. Always succeeds.
pub fn advance_max_if<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S, max: usize) -> bool {
    for _ in 0..max {
        let before = cursor.pos();
        if !advance_if(cursor, expr) || cursor.pos() == before {
            break;
        }
    }
    true
}

/// Consume `expr` between `min` and `max` times (inclusive).
///
/// Fails without moving if fewer than `min` matches occur, or if the
/// range is empty (`max < min`).
pub fn advance_repeating<S: Scan + ?Sized>(
    cursor: &mut Cursor<'_>,
    expr: &S,
    min: usize,
    max: usize,
) -> bool {
    if max < min {
        return false;
    }
    advance_n_if(cursor, expr, min) && advance_max_if(cursor, expr, max - min)
}

/// First-match-wins alternation.
///
/// Tries each expression in order and stops at the first success. Fails
/// only if none match (an empty list never matches).
pub fn advance_if_any<S: Scan>(cursor: &mut Cursor<'_>, exprs: &[S]) -> bool {
    exprs.iter().any(|expr| advance_if(cursor, expr))
}

/// Ordered sequence: every expression must match consecutively.
///
/// On failure the cursor returns to where the first expression started.
/// An empty sequence succeeds without consuming.
pub fn advance_join_if<S: Scan>(cursor: &mut Cursor<'_>, exprs: &[S]) -> bool {
    let start = cursor.pos();
    for expr in exprs {
        if !advance_if(cursor, expr) {
            cursor.set_pos(start);
            return false;
        }
    }
    true
}

/// Advance until `expr` matches, stopping in front of the match.
///
/// This is a search, not a speculative match: if the input ends first it
/// fails and leaves the cursor at end of input. Plain literals jump
/// straight to the next occurrence with `memchr`.
pub fn advance_to_if_found<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    match expr.needle() {
        Some(Needle::Char(c)) => return cursor.skip_to_char(c),
        Some(Needle::Str(s)) => return cursor.skip_to_str(s),
        None => {}
    }
    loop {
        let here = cursor.pos();
        if expr.scan(cursor) {
            cursor.set_pos(here);
            return true;
        }
        cursor.set_pos(here);
        if cursor.at_end() {
            return false;
        }
        cursor.bump();
    }
}

/// Advance until `expr` matches, then consume the match.
///
/// Same failure policy as [`advance_to_if_found`].
pub fn advance_past_if_found<S: Scan + ?Sized>(cursor: &mut Cursor<'_>, expr: &S) -> bool {
    advance_to_if_found(cursor, expr) && advance_if(cursor, expr)
}

#[cfg(test)]
mod tests;
