use super::*;

// === Basic Navigation ===

#[test]
fn peek_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), 'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn bump_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.bump();
    assert_eq!(cursor.peek(), 'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_moves_multiple() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance(3);
    assert_eq!(cursor.peek(), 'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_zero_is_noop() {
    let mut cursor = Cursor::new("abc");
    cursor.advance(0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_clamps_to_end() {
    let mut cursor = Cursor::new("hi");
    cursor.advance(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.at_end());
    // Moving past the end again stays put.
    cursor.bump();
    cursor.advance(3);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_counts_chars_not_bytes() {
    let mut cursor = Cursor::new("αβγ");
    cursor.advance(2);
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.peek(), 'γ');
}

#[test]
fn retreat_moves_back() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance(4);
    cursor.retreat(1);
    assert_eq!(cursor.peek(), 'd');
    cursor.retreat(2);
    assert_eq!(cursor.peek(), 'b');
}

#[test]
fn retreat_clamps_to_start() {
    let mut cursor = Cursor::new("abc");
    cursor.advance(1);
    cursor.retreat(5);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn retreat_over_multibyte() {
    let mut cursor = Cursor::new("a\u{1F600}b");
    cursor.advance(2); // past the emoji
    assert_eq!(cursor.pos(), 5);
    cursor.retreat(1);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.peek(), '\u{1F600}');
}

#[test]
fn with_offset_starts_mid_buffer() {
    let cursor = Cursor::with_offset("hello", 2);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.mark(), 2);
    assert_eq!(cursor.peek(), 'l');
}

#[test]
fn with_offset_clamps_and_snaps_to_boundary() {
    assert_eq!(Cursor::with_offset("abc", 99).pos(), 3);
    // Offset 1 is inside 'α' (2 bytes); snaps back to 0.
    assert_eq!(Cursor::with_offset("αb", 1).pos(), 0);
}

// === Peek ===

#[test]
fn peek_at_looks_ahead() {
    let cursor = Cursor::new("12.5");
    assert_eq!(cursor.peek_at(0), '1');
    assert_eq!(cursor.peek_at(2), '.');
    assert_eq!(cursor.peek_at(3), '5');
}

#[test]
fn peek_at_end_returns_sentinel() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.peek_at(2), EOF_CHAR);
    assert_eq!(cursor.peek_at(100), EOF_CHAR);
    cursor.advance(2);
    assert_eq!(cursor.peek(), EOF_CHAR);
}

// === End of Input ===

#[test]
fn at_end_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.at_end());
    assert!(cursor.is_empty());
    assert_eq!(cursor.peek(), EOF_CHAR);
}

#[test]
fn interior_null_is_not_end() {
    let mut cursor = Cursor::new("a\0b");
    cursor.bump();
    assert_eq!(cursor.peek(), '\0');
    assert!(!cursor.at_end());
    cursor.bump();
    assert_eq!(cursor.peek(), 'b');
}

// === Mark / Restore ===

#[test]
fn save_and_restore() {
    let mut cursor = Cursor::new("hello world");
    cursor.advance(2);
    cursor.save();
    cursor.advance(5);
    assert_eq!(cursor.pos(), 7);
    cursor.restore();
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn restore_after_retreat_past_mark() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance(4);
    cursor.save();
    cursor.retreat(3);
    cursor.restore();
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn copies_are_independent() {
    let mut a = Cursor::new("abc");
    let b = a;
    a.advance(2);
    assert_eq!(a.pos(), 2);
    assert_eq!(b.pos(), 0);
}

// === span_since_mark ===

#[test]
fn span_since_mark_covers_consumed() {
    let mut cursor = Cursor::new("let x");
    cursor.save();
    cursor.advance(3);
    let span = cursor.span_since_mark(0, 0);
    assert_eq!(span, Span::new(0, 3));
    assert_eq!(cursor.slice(span), "let");
}

#[test]
fn span_since_mark_trims_quotes() {
    let mut cursor = Cursor::new("\"abc\" rest");
    cursor.save();
    cursor.advance(5);
    let span = cursor.span_since_mark(1, 1);
    assert_eq!(span, Span::new(1, 4));
    assert_eq!(cursor.slice(span), "abc");
}

#[test]
fn span_since_mark_trims_multibyte() {
    let mut cursor = Cursor::new("«x»");
    cursor.save();
    cursor.advance(3);
    assert_eq!(cursor.slice(cursor.span_since_mark(1, 1)), "x");
}

#[test]
fn span_since_mark_crossing_trim_is_empty() {
    let mut cursor = Cursor::new("\"");
    cursor.save();
    cursor.bump();
    let span = cursor.span_since_mark(1, 1);
    assert!(span.is_empty());
}

#[test]
fn span_since_mark_before_mark_is_empty() {
    let mut cursor = Cursor::new("abc");
    cursor.advance(2);
    cursor.save();
    cursor.retreat(1);
    assert_eq!(cursor.span_since_mark(0, 0), Span::point(1));
}

// === eat_* ===

#[test]
fn eat_char_matches_only_next_char() {
    let mut cursor = Cursor::new("ab");
    assert!(!cursor.eat_char('b'));
    assert!(cursor.eat_char('a'));
    assert!(cursor.eat_char('b'));
    assert!(!cursor.eat_char('b'));
}

#[test]
fn eat_char_nul_does_not_match_end() {
    let mut cursor = Cursor::new("");
    assert!(!cursor.eat_char(EOF_CHAR));
    let mut cursor = Cursor::new("\0");
    assert!(cursor.eat_char('\0'));
    assert!(cursor.at_end());
}

#[test]
fn eat_str_is_atomic() {
    let mut cursor = Cursor::new("!=x");
    assert!(!cursor.eat_str("!=="));
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.eat_str("!="));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_str_is_case_sensitive() {
    let mut cursor = Cursor::new("While");
    assert!(!cursor.eat_str("while"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_while_consumes_matching_chars() {
    let mut cursor = Cursor::new("aaabbb");
    cursor.eat_while(|c| c == 'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.peek(), 'b');
}

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|c| c == 'a');
    assert!(cursor.at_end());
}

// === skip_to_* ===

#[test]
fn skip_to_str_finds_needle() {
    let mut cursor = Cursor::new("abc */ def");
    assert!(cursor.skip_to_str("*/"));
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_to_str_missing_moves_to_end() {
    let mut cursor = Cursor::new("abc");
    assert!(!cursor.skip_to_str("*/"));
    assert!(cursor.at_end());
}

#[test]
fn skip_to_char_ascii_and_multibyte() {
    let mut cursor = Cursor::new("ab\"cd");
    assert!(cursor.skip_to_char('"'));
    assert_eq!(cursor.pos(), 2);

    let mut cursor = Cursor::new("xyλz");
    assert!(cursor.skip_to_char('λ'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.peek(), 'λ');
}

#[test]
fn skip_to_char_starts_from_current_position() {
    let mut cursor = Cursor::new("a.b.c");
    cursor.advance(2);
    assert!(cursor.skip_to_char('.'));
    assert_eq!(cursor.pos(), 3);
}
