//! Property-based tests for the lexer and parser.
//!
//! These check arithmetic against native `i64` operations on generated
//! operands, transparency of redundant parentheses, and purity of `lex`.

use calcfront::{MAX_NESTING_DEPTH, get_result, lex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn addition_matches_native(a in 0..1_000_000_000i64, b in 0..1_000_000_000i64) {
        prop_assert_eq!(get_result(&format!("{a}+{b}")), Ok(a + b));
    }

    #[test]
    fn subtraction_matches_native(a in 0..1_000_000_000i64, b in 0..1_000_000_000i64) {
        prop_assert_eq!(get_result(&format!("{a}-{b}")), Ok(a - b));
    }

    #[test]
    fn multiplication_matches_native(a in 0..1_000_000i64, b in 0..1_000_000i64) {
        prop_assert_eq!(get_result(&format!("{a}*{b}")), Ok(a * b));
    }

    #[test]
    fn division_matches_native(a in 0..1_000_000_000i64, b in 1..1_000_000i64) {
        prop_assert_eq!(get_result(&format!("{a}/{b}")), Ok(a / b));
    }

    #[test]
    fn nested_parentheses_are_transparent(value in 0..10_000i64, depth in 1..=MAX_NESTING_DEPTH) {
        let src = format!("{}{value}{}", "(".repeat(depth), ")".repeat(depth));
        prop_assert_eq!(get_result(&src), Ok(value));
    }

    #[test]
    fn unbalanced_parentheses_fail(value in 0..10_000i64, depth in 1..32usize) {
        let src = format!("{}{value}{}", "(".repeat(depth + 1), ")".repeat(depth));
        prop_assert!(get_result(&src).is_err());
    }

    #[test]
    fn literal_followed_by_group_fails(a in 0..10_000i64, b in 0..10_000i64) {
        let src = format!("{a}({b})");
        prop_assert!(get_result(&src).is_err());
    }

    #[test]
    fn leading_minus_fails(a in 0..10_000i64) {
        let src = format!("-{a}");
        prop_assert!(get_result(&src).is_err());
    }

    #[test]
    fn sum_chain_is_left_to_right(terms in prop::collection::vec(0..1000i64, 1..40)) {
        let src = terms.iter().map(ToString::to_string).collect::<Vec<_>>().join("+");
        prop_assert_eq!(get_result(&src), Ok(terms.iter().sum::<i64>()));
    }

    #[test]
    fn lex_is_pure(text in "[0-9+*/()a -]{0,64}") {
        prop_assert_eq!(lex(&text), lex(&text));
    }

    #[test]
    fn lex_keeps_one_token_per_recognized_char(text in "[0-9+*/()-]{0,64}") {
        prop_assert_eq!(lex(&text).len(), text.len());
    }
}
