//! Property-based tests for the brace-balance validator
//!
//! Balanced text is generated by construction (wrapping and concatenating
//! brace-free chunks), so the success property holds by definition and the
//! failure properties follow from controlled corruption of balanced text.

use proptest::prelude::*;

use dds::dds::parsing::{check_braces_matching, BraceMismatchError};

/// Well-nested text: brace-free chunks, wrapped and concatenated.
fn balanced() -> impl Strategy<Value = String> {
    let leaf = "[a-zA-Z0-9 ;.]{0,8}";
    leaf.prop_recursive(4, 24, 3, |inner| {
        proptest::collection::vec(
            prop_oneof![
                inner.clone().prop_map(|s| format!("{{{}}}", s)),
                inner,
            ],
            0..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

proptest! {
    #[test]
    fn balanced_text_passes(text in balanced()) {
        prop_assert_eq!(check_braces_matching(&text), Ok(()));
    }

    #[test]
    fn appended_left_braces_fail_with_final_count(text in balanced(), k in 1usize..5) {
        let corrupted = format!("{}{}", text, "{".repeat(k));
        prop_assert_eq!(
            check_braces_matching(&corrupted),
            Err(BraceMismatchError::TooManyLeft { count: k })
        );
    }

    #[test]
    fn leading_right_brace_fails_at_the_first_dip(text in balanced()) {
        let corrupted = format!("}}{}", text);
        prop_assert_eq!(
            check_braces_matching(&corrupted),
            Err(BraceMismatchError::TooManyRight { count: 1 })
        );
    }
}
