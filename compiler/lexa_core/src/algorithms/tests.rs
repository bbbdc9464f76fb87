use super::*;
use crate::Expr;

fn digit() -> Expr {
    Expr::pred(|c| c.is_ascii_digit())
}

/// Run `f` on a fresh cursor over `source`; return the result and position.
fn run(source: &str, f: impl FnOnce(&mut Cursor<'_>) -> bool) -> (bool, u32) {
    let mut cursor = Cursor::new(source);
    let matched = f(&mut cursor);
    (matched, cursor.pos())
}

// === advance_if / advance_if_not ===

#[test]
fn advance_if_consumes_one_match() {
    assert_eq!(run("123", |c| advance_if(c, &digit())), (true, 1));
    assert_eq!(run("x", |c| advance_if(c, &digit())), (false, 0));
}

#[test]
fn advance_if_rolls_back_leaky_custom_scanner() {
    // A hand-written closure that moves and then reports failure.
    let leaky = Expr::custom(|c| {
        c.advance(2);
        false
    });
    assert_eq!(run("abc", |c| advance_if(c, &leaky)), (false, 0));
}

#[test]
fn advance_if_not_consumes_one_char() {
    assert_eq!(run("ab", |c| advance_if_not(c, &'"')), (true, 1));
    assert_eq!(run("\"b", |c| advance_if_not(c, &'"')), (false, 0));
}

#[test]
fn advance_if_not_fails_at_end() {
    assert_eq!(run("", |c| advance_if_not(c, &'"')), (false, 0));
}

#[test]
fn advance_if_not_with_multichar_expr() {
    // Only one character is consumed even though the guard is two long.
    assert_eq!(run("*x", |c| advance_if_not(c, "*/")), (true, 1));
    assert_eq!(run("*/", |c| advance_if_not(c, "*/")), (false, 0));
}

// === optional / while ===

#[test]
fn advance_optionally_always_succeeds() {
    assert_eq!(run("-1", |c| advance_optionally(c, &'-')), (true, 1));
    assert_eq!(run("1", |c| advance_optionally(c, &'-')), (true, 0));
}

#[test]
fn advance_while_zero_or_more() {
    assert_eq!(run("123x", |c| advance_while(c, &digit())), (true, 3));
    assert_eq!(run("x", |c| advance_while(c, &digit())), (true, 0));
}

#[test]
fn advance_while_at_end_succeeds() {
    assert_eq!(run("", |c| advance_while(c, &digit())), (true, 0));
}

#[test]
fn advance_while_terminates_on_empty_matches() {
    let maybe_a = Expr::optional('a');
    assert_eq!(run("aab", |c| advance_while(c, &maybe_a)), (true, 2));
    assert_eq!(run("b", |c| advance_while(c, &maybe_a)), (true, 0));
}

#[test]
fn advance_while_not_stops_before_match() {
    assert_eq!(run("abc\"d", |c| advance_while_not(c, &'"')), (true, 3));
}

#[test]
fn advance_while_not_runs_to_end() {
    assert_eq!(run("abc", |c| advance_while_not(c, &'"')), (true, 3));
}

// === bounded repetition ===

#[test]
fn advance_n_if_exact_count() {
    assert_eq!(run("1234", |c| advance_n_if(c, &digit(), 3)), (true, 3));
}

#[test]
fn advance_n_if_rolls_back_on_shortfall() {
    assert_eq!(run("12x", |c| advance_n_if(c, &digit(), 3)), (false, 0));
}

#[test]
fn advance_n_if_zero_always_succeeds() {
    assert_eq!(run("", |c| advance_n_if(c, &digit(), 0)), (true, 0));
}

#[test]
fn advance_min_if_requires_minimum() {
    assert_eq!(run("12345", |c| advance_min_if(c, &digit(), 2)), (true, 5));
    assert_eq!(run("1x", |c| advance_min_if(c, &digit(), 2)), (false, 0));
}

#[test]
fn one_or_more_at_end_fails() {
    assert_eq!(run("", |c| advance_min_if(c, &digit(), 1)), (false, 0));
}

#[test]
fn advance_max_if_caps_repetitions() {
    assert_eq!(run("12345", |c| advance_max_if(c, &digit(), 3)), (true, 3));
    assert_eq!(run("1x", |c| advance_max_if(c, &digit(), 3)), (true, 1));
    assert_eq!(run("x", |c| advance_max_if(c, &digit(), 3)), (true, 0));
}

#[test]
fn advance_repeating_within_bounds() {
    assert_eq!(run("12345", |c| advance_repeating(c, &digit(), 2, 4)), (true, 4));
    assert_eq!(run("123x", |c| advance_repeating(c, &digit(), 2, 4)), (true, 3));
    assert_eq!(run("1x", |c| advance_repeating(c, &digit(), 2, 4)), (false, 0));
}

#[test]
fn advance_repeating_empty_range_fails() {
    assert_eq!(run("123", |c| advance_repeating(c, &digit(), 3, 2)), (false, 0));
}

// === alternation ===

#[test]
fn advance_if_any_first_match_wins() {
    let exprs = [Expr::from('='), Expr::lit("==")];
    // Both match at 0; the earliest-listed one decides the length.
    assert_eq!(run("==", |c| advance_if_any(c, &exprs)), (true, 1));

    let exprs = [Expr::lit("=="), Expr::from('=')];
    assert_eq!(run("==", |c| advance_if_any(c, &exprs)), (true, 2));
}

#[test]
fn advance_if_any_tries_later_alternatives() {
    let exprs = [Expr::lit("!="), Expr::from('!')];
    assert_eq!(run("!x", |c| advance_if_any(c, &exprs)), (true, 1));
}

#[test]
fn advance_if_any_none_match() {
    let exprs = [Expr::from('a'), Expr::from('b')];
    assert_eq!(run("c", |c| advance_if_any(c, &exprs)), (false, 0));
    let empty: [Expr; 0] = [];
    assert_eq!(run("c", |c| advance_if_any(c, &empty)), (false, 0));
}

#[test]
fn advance_if_any_with_partial_branch_leaves_no_progress() {
    // First branch consumes "12" before failing on the missing '.'.
    let exprs = [
        Expr::join([Expr::one_or_more(digit()), Expr::from('.')]),
        Expr::lit("1"),
    ];
    assert_eq!(run("12x", |c| advance_if_any(c, &exprs)), (true, 1));
}

// === sequence ===

#[test]
fn advance_join_if_all_parts() {
    let decimal = [Expr::one_or_more(digit()), Expr::from('.'), Expr::one_or_more(digit())];
    assert_eq!(run("12.5", |c| advance_join_if(c, &decimal)), (true, 4));
}

#[test]
fn advance_join_if_restores_on_failure() {
    let decimal = [Expr::one_or_more(digit()), Expr::from('.'), Expr::one_or_more(digit())];
    assert_eq!(run("12.", |c| advance_join_if(c, &decimal)), (false, 0));
}

#[test]
fn advance_join_if_restores_to_call_position() {
    let mut cursor = Cursor::new("ab12.");
    cursor.advance(2);
    let decimal = [Expr::one_or_more(digit()), Expr::from('.'), Expr::one_or_more(digit())];
    assert!(!advance_join_if(&mut cursor, &decimal));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_join_if_empty_sequence_succeeds() {
    let empty: [Expr; 0] = [];
    assert_eq!(run("x", |c| advance_join_if(c, &empty)), (true, 0));
}

#[test]
fn nested_failures_do_not_disturb_caller_mark() {
    let mut cursor = Cursor::new("12.x");
    cursor.save();
    let decimal = [Expr::one_or_more(digit()), Expr::from('.'), Expr::one_or_more(digit())];
    assert!(!advance_join_if(&mut cursor, &decimal));
    cursor.advance(3);
    assert_eq!(cursor.mark(), 0);
    cursor.restore();
    assert_eq!(cursor.pos(), 0);
}

// === search ===

#[test]
fn advance_to_if_found_stops_before_match() {
    assert_eq!(run("abc*/d", |c| advance_to_if_found(c, "*/")), (true, 3));
}

#[test]
fn advance_to_if_found_at_current_position() {
    assert_eq!(run("*/", |c| advance_to_if_found(c, "*/")), (true, 0));
}

#[test]
fn advance_to_if_found_failure_leaves_cursor_at_end() {
    assert_eq!(run("abc", |c| advance_to_if_found(c, "*/")), (false, 3));
}

#[test]
fn advance_to_if_found_with_predicate() {
    let upper = Expr::pred(char::is_uppercase);
    assert_eq!(run("abcDe", |c| advance_to_if_found(c, &upper)), (true, 3));
    assert_eq!(run("abc", |c| advance_to_if_found(c, &upper)), (false, 3));
}

#[test]
fn advance_to_if_found_with_compound_expr() {
    // "12" followed by '.'; the first "1" is not.
    let pattern = Expr::join(["12", "."]);
    assert_eq!(run("1 12.", |c| advance_to_if_found(c, &pattern)), (true, 2));
}

#[test]
fn advance_past_if_found_consumes_match() {
    assert_eq!(run("abc*/d", |c| advance_past_if_found(c, "*/")), (true, 5));
    assert_eq!(run("abc\"", |c| advance_past_if_found(c, &'"')), (true, 4));
}

#[test]
fn advance_past_if_found_failure_leaves_cursor_at_end() {
    assert_eq!(run("abc", |c| advance_past_if_found(c, &'"')), (false, 3));
}

#[test]
fn search_for_multibyte_char() {
    assert_eq!(run("aλb", |c| advance_past_if_found(c, &'λ')), (true, 3));
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_all_or_nothing {
    use super::super::{advance_if_any, advance_join_if, advance_n_if, advance_repeating};
    use crate::{Cursor, Expr, Scan};
    use proptest::prelude::*;

    fn decimal() -> [Expr; 3] {
        let digits = Expr::one_or_more(Expr::range('0', '9'));
        [digits.clone(), Expr::from('.'), digits]
    }

    proptest! {
        #[test]
        fn join_failure_restores(source in "[0-9.a ]{0,12}", start in 0usize..12) {
            let mut cursor = Cursor::new(&source);
            cursor.advance(start);
            let before = cursor.pos();
            if !advance_join_if(&mut cursor, &decimal()) {
                prop_assert_eq!(cursor.pos(), before);
            }
        }

        #[test]
        fn n_if_failure_restores(source in "[ab]{0,10}", n in 0usize..8) {
            let mut cursor = Cursor::new(&source);
            let before = cursor.pos();
            if advance_n_if(&mut cursor, &Expr::from('a'), n) {
                prop_assert_eq!(cursor.pos() as usize, before as usize + n);
            } else {
                prop_assert_eq!(cursor.pos(), before);
            }
        }

        #[test]
        fn repeating_failure_restores(
            source in "[ab]{0,10}",
            min in 0usize..6,
            extra in 0usize..4,
        ) {
            let mut cursor = Cursor::new(&source);
            let matched = advance_repeating(&mut cursor, &Expr::from('a'), min, min + extra);
            let consumed = cursor.pos() as usize;
            if matched {
                prop_assert!(consumed >= min && consumed <= min + extra);
            } else {
                prop_assert_eq!(consumed, 0);
            }
        }

        #[test]
        fn alternation_prefers_first(source in "[=!<>]{1,4}") {
            let first = Expr::from('=');
            let second = Expr::lit("==");
            let mut a = Cursor::new(&source);
            let mut b = Cursor::new(&source);
            if first.scan(&mut a) && second.scan(&mut b) {
                let mut alt = Cursor::new(&source);
                prop_assert!(advance_if_any(&mut alt, &[first, second]));
                prop_assert_eq!(alt.pos(), a.pos());
            }
        }
    }
}
