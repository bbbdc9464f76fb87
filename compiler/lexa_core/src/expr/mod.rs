//! The scannable expression contract.
//!
//! Anything that implements [`Scan`] can be matched against a [`Cursor`].
//! The contract is all-or-nothing:
//!
//! - on success the cursor is past exactly the consumed characters, and
//! - on failure the cursor is exactly where it was.
//!
//! Because every expression obeys this, combinators can be nested to any
//! depth without undo bookkeeping at each call site.
//!
//! [`Expr`] is the closed set of expression kinds: a literal, a
//! single-character predicate, or a sub-scanner built by one of the
//! scanning algorithms (see [`Scanner`]).

use std::fmt;
use std::rc::Rc;

use crate::{Cursor, Scanner, Span};

/// A fixed search target, used by the search algorithms to jump ahead
/// with `memchr` instead of re-matching at every position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Needle<'n> {
    Char(char),
    Str(&'n str),
}

/// Something that can be matched at a cursor position.
pub trait Scan {
    /// Try to match at the cursor's position.
    ///
    /// Returns `true` and advances past the match, or returns `false` and
    /// leaves the cursor untouched.
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool;

    /// Match and report the consumed span.
    fn scan_span(&self, cursor: &mut Cursor<'_>) -> Option<Span> {
        let start = cursor.pos();
        self.scan(cursor).then(|| Span::new(start, cursor.pos()))
    }

    /// The literal this expression matches, if it is a plain literal.
    fn needle(&self) -> Option<Needle<'_>> {
        None
    }
}

impl<S: Scan + ?Sized> Scan for &S {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        (**self).scan(cursor)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        (**self).needle()
    }
}

impl<S: Scan + ?Sized> Scan for Box<S> {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        (**self).scan(cursor)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        (**self).needle()
    }
}

impl<S: Scan + ?Sized> Scan for Rc<S> {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        (**self).scan(cursor)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        (**self).needle()
    }
}

impl Scan for char {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        cursor.eat_char(*self)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        Some(Needle::Char(*self))
    }
}

impl Scan for str {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        cursor.eat_str(self)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        Some(Needle::Str(self))
    }
}

impl Scan for String {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        cursor.eat_str(self)
    }

    fn needle(&self) -> Option<Needle<'_>> {
        Some(Needle::Str(self))
    }
}

/// A fixed character or string, matched case-sensitively and atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Char(char),
    Str(Rc<str>),
}

impl Scan for Literal {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Literal::Char(c) => cursor.eat_char(*c),
            Literal::Str(s) => cursor.eat_str(s),
        }
    }

    fn needle(&self) -> Option<Needle<'_>> {
        Some(match self {
            Literal::Char(c) => Needle::Char(*c),
            Literal::Str(s) => Needle::Str(s),
        })
    }
}

/// A single-character test. Matches one character, never end of input.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn(char) -> bool>);

impl Predicate {
    pub fn new(test: impl Fn(char) -> bool + 'static) -> Self {
        Predicate(Rc::new(test))
    }

    /// Apply the test to `c`.
    #[inline]
    pub fn test(&self, c: char) -> bool {
        (self.0)(c)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl Scan for Predicate {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        if !cursor.at_end() && self.test(cursor.peek()) {
            cursor.bump();
            true
        } else {
            false
        }
    }
}

/// A scannable expression: literal, predicate, or sub-scanner.
///
/// Cloning is cheap (reference counted), so one expression can appear in
/// several composites.
#[derive(Clone, Debug)]
pub enum Expr {
    Literal(Literal),
    Predicate(Predicate),
    Scanner(Rc<Scanner>),
}

impl Scan for Expr {
    #[inline]
    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Expr::Literal(lit) => lit.scan(cursor),
            Expr::Predicate(pred) => pred.scan(cursor),
            Expr::Scanner(scanner) => scanner.scan(cursor),
        }
    }

    fn needle(&self) -> Option<Needle<'_>> {
        match self {
            Expr::Literal(lit) => lit.needle(),
            Expr::Predicate(_) | Expr::Scanner(_) => None,
        }
    }
}

impl Expr {
    /// String literal.
    pub fn lit(s: &str) -> Expr {
        Expr::Literal(Literal::Str(Rc::from(s)))
    }

    /// Predicate over a single character.
    pub fn pred(test: impl Fn(char) -> bool + 'static) -> Expr {
        Expr::Predicate(Predicate::new(test))
    }

    /// Any one character listed in `chars`.
    pub fn one_of(chars: &str) -> Expr {
        let set: Rc<str> = Rc::from(chars);
        Expr::pred(move |c| set.contains(c))
    }

    /// Any one character not listed in `chars`.
    pub fn none_of(chars: &str) -> Expr {
        let set: Rc<str> = Rc::from(chars);
        Expr::pred(move |c| !set.contains(c))
    }

    /// Any one character in `lo..=hi`.
    pub fn range(lo: char, hi: char) -> Expr {
        Expr::pred(move |c| (lo..=hi).contains(&c))
    }

    /// Any one character.
    pub fn any_char() -> Expr {
        Expr::pred(|_| true)
    }

    /// The sub-scanner inside this expression, if it is one.
    pub fn as_scanner(&self) -> Option<&Scanner> {
        match self {
            Expr::Scanner(scanner) => Some(scanner),
            Expr::Literal(_) | Expr::Predicate(_) => None,
        }
    }
}

impl From<char> for Expr {
    fn from(c: char) -> Self {
        Expr::Literal(Literal::Char(c))
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::lit(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Literal::Str(Rc::from(s)))
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Literal(lit)
    }
}

impl From<Predicate> for Expr {
    fn from(pred: Predicate) -> Self {
        Expr::Predicate(pred)
    }
}

impl From<Scanner> for Expr {
    fn from(scanner: Scanner) -> Self {
        Expr::Scanner(Rc::new(scanner))
    }
}
