//! Movable, non-owning view over a source buffer with mark/restore.
//!
//! The cursor borrows the source as `&str` and tracks two byte offsets:
//! the current position and one saved mark. Positions always sit on a
//! character boundary, so every [`Span`] the cursor hands out slices the
//! buffer directly.
//!
//! # End of Input
//!
//! Reading at `pos == len` yields [`EOF_CHAR`] (`'\0'`). Because the source
//! may legitimately contain U+0000, use [`Cursor::at_end()`] to tell an
//! interior null from the end of input.
//!
//! Cursor operations never fail. Moving past either end clamps; all match
//! failure is reported by the scanning algorithms, not by the cursor.

use crate::Span;

/// Sentinel returned by [`Cursor::peek()`] at end of input.
pub const EOF_CHAR: char = '\0';

/// Convert a byte count bounded by the source length into an offset.
#[allow(
    clippy::cast_possible_truncation,
    reason = "callers pass lengths bounded by source_len which fits in u32"
)]
#[inline]
fn offset(n: usize) -> u32 {
    n as u32
}

/// Cursor over a borrowed source buffer.
///
/// The cursor is [`Copy`]: independent cursors over the same buffer are
/// cheap, and a single cursor is only ever mutated through `&mut`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Borrowed source text. Never copied or mutated.
    src: &'a str,
    /// Current read position (byte offset, on a char boundary).
    pos: u32,
    /// Position recorded by the last [`save()`](Self::save).
    mark: u32,
    /// Length of the scannable source (saturates at `u32::MAX`).
    len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(src: &'a str) -> Self {
        Self::with_offset(src, 0)
    }

    /// Create a cursor at `offset`.
    ///
    /// The offset is clamped to the source length and moved back to the
    /// nearest character boundary. The mark starts at the same position.
    pub fn with_offset(src: &'a str, offset: u32) -> Self {
        let len = u32::try_from(src.len()).unwrap_or(u32::MAX);
        let mut cursor = Self {
            src,
            pos: 0,
            mark: 0,
            len,
        };
        cursor.set_pos(offset);
        cursor.mark = cursor.pos;
        cursor
    }

    /// The whole source this cursor views.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed source text from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src
            .get(self.pos as usize..self.len as usize)
            .unwrap_or("")
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Offset recorded by the last [`save()`](Self::save).
    #[inline]
    pub fn mark(&self) -> u32 {
        self.mark
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.len
    }

    /// Move directly to `pos`.
    ///
    /// Clamps to the source length and snaps back to a character boundary,
    /// so the cursor invariant holds for any argument. Combinators use this
    /// to roll back to a locally recorded start offset.
    pub fn set_pos(&mut self, pos: u32) {
        let mut pos = pos.min(self.len) as usize;
        while !self.src.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = offset(pos);
    }

    /// Returns the character at the current position, or [`EOF_CHAR`].
    #[inline]
    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    /// Returns the character `n` positions ahead (`peek_at(0) == peek()`).
    ///
    /// Returns [`EOF_CHAR`] when that position is at or past the end.
    #[inline]
    pub fn peek_at(&self, n: usize) -> char {
        self.rest().chars().nth(n).unwrap_or(EOF_CHAR)
    }

    /// Advance by one character. No-op at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += offset(c.len_utf8());
        }
    }

    /// Advance by `n` characters, clamped to the end of input.
    pub fn advance(&mut self, n: usize) {
        let rest = self.rest();
        let consumed = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        self.pos += offset(consumed);
    }

    /// Move back by `n` characters, clamped to the start of input.
    pub fn retreat(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let before = self.src.get(..self.pos as usize).unwrap_or("");
        self.pos = before
            .char_indices()
            .rev()
            .nth(n - 1)
            .map_or(0, |(i, _)| offset(i));
    }

    /// Record the current position as the mark.
    #[inline]
    pub fn save(&mut self) {
        self.mark = self.pos;
    }

    /// Return to the position recorded by the last [`save()`](Self::save).
    #[inline]
    pub fn restore(&mut self) {
        self.pos = self.mark;
    }

    /// Span from the mark to the current position, trimmed by characters.
    ///
    /// `trim_front` characters are dropped after the mark and `trim_back`
    /// characters before the position, e.g. `span_since_mark(1, 1)` strips
    /// the quotes from a string literal. Trims that would cross produce an
    /// empty span. If the cursor sits before its mark the result is an
    /// empty span at the current position.
    pub fn span_since_mark(&self, trim_front: usize, trim_back: usize) -> Span {
        if self.mark > self.pos {
            return Span::point(self.pos);
        }
        let matched = self
            .src
            .get(self.mark as usize..self.pos as usize)
            .unwrap_or("");
        let front = matched
            .char_indices()
            .nth(trim_front)
            .map_or(matched.len(), |(i, _)| i);
        let back = if trim_back == 0 {
            matched.len()
        } else {
            matched
                .char_indices()
                .rev()
                .nth(trim_back - 1)
                .map_or(0, |(i, _)| i)
        };
        Span::new(
            self.mark + offset(front),
            self.mark + offset(back.max(front)),
        )
    }

    /// Source text covered by `span`, or `""` if it is not a valid slice.
    #[inline]
    pub fn slice(&self, span: Span) -> &'a str {
        span.slice(self.src)
    }

    /// Consume `c` if it is the next character.
    #[inline]
    pub fn eat_char(&mut self, c: char) -> bool {
        if !self.at_end() && self.peek() == c {
            self.pos += offset(c.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consume `s` if the remaining input starts with it.
    ///
    /// The comparison is case-sensitive and atomic: either all of `s` is
    /// consumed or nothing is.
    #[inline]
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += offset(s.len());
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let rest = self.rest();
        let n = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += offset(n);
    }

    /// Advance to the next occurrence of `needle` using `memchr::memmem`.
    ///
    /// Returns `true` with the cursor positioned at the start of the
    /// occurrence, or `false` with the cursor at end of input.
    pub fn skip_to_str(&mut self, needle: &str) -> bool {
        let rest = self.rest();
        if let Some(off) = memchr::memmem::find(rest.as_bytes(), needle.as_bytes()) {
            self.pos += offset(off);
            true
        } else {
            self.pos = self.len;
            false
        }
    }

    /// Advance to the next occurrence of `c`.
    ///
    /// ASCII characters use a single `memchr` scan; other characters search
    /// for their UTF-8 encoding. Same positioning rules as
    /// [`skip_to_str()`](Self::skip_to_str).
    pub fn skip_to_char(&mut self, c: char) -> bool {
        if c.is_ascii() {
            let rest = self.rest();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "guarded by is_ascii, so the scalar value fits in u8"
            )]
            let byte = c as u8;
            if let Some(off) = memchr::memchr(byte, rest.as_bytes()) {
                self.pos += offset(off);
                true
            } else {
                self.pos = self.len;
                false
            }
        } else {
            let mut buf = [0u8; 4];
            self.skip_to_str(c.encode_utf8(&mut buf))
        }
    }
}

#[cfg(test)]
mod tests;
