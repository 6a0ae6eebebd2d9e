//! Property-based tests for the scanner.
//!
//! These verify invariants the rule engine relies on:
//! - the code view never changes a line's character count
//! - line numbering is dense and 1-based
//! - iteration is deterministic and restartable

use crate::Source;
use proptest::prelude::*;

/// Strategy biased towards JavaScript-ish punctuation so the lexer states are exercised.
fn arb_js_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("//".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("'".to_string()),
            Just("\"".to_string()),
            Just("`".to_string()),
            Just("\\".to_string()),
            Just("\t".to_string()),
            Just("if(x)".to_string()),
            Just("${".to_string()),
            Just("var a_b = ".to_string()),
            Just("é".to_string()),
            prop::string::string_regex("[a-z ,=!(){};]{0,12}").unwrap(),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn code_view_preserves_char_count(text in arb_js_text()) {
        for line in Source::new(&text).lines() {
            prop_assert_eq!(line.code.chars().count(), line.text.chars().count());
        }
    }

    #[test]
    fn line_numbers_are_dense(text in arb_js_text()) {
        let numbers: Vec<u32> = Source::new(&text).lines().map(|l| l.number).collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn record_count_matches_newlines(text in arb_js_text()) {
        let newlines = text.matches('\n').count();
        let trailing = usize::from(!text.is_empty() && !text.ends_with('\n'));
        prop_assert_eq!(Source::new(&text).lines().count(), newlines + trailing);
    }

    #[test]
    fn scanning_is_restartable(text in arb_js_text()) {
        let source = Source::new(&text);
        let first: Vec<_> = source.lines().collect();
        let second: Vec<_> = source.lines().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bindings_point_at_their_names(text in arb_js_text()) {
        for line in Source::new(&text).lines() {
            for b in &line.bindings {
                prop_assert_eq!(line.code.get(b.offset..b.offset + b.name.len()), Some(b.name.as_str()));
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        for line in Source::new(&text).lines() {
            let _ = line.snippet(line.indent.width() + 1, 3);
        }
    }
}
