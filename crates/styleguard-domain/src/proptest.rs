//! Property-based tests for the engine.
//!
//! These verify invariants around:
//! - determinism of repeated scans
//! - the empty buffer producing nothing
//! - rule-major, line-minor ordering
//! - violations always referencing registered rules

use crate::engine::scan;
use crate::registry::builtin_registry;
use crate::test_support::all_builtins;
use proptest::prelude::*;
use styleguard_types::ScanStatus;

fn arb_js_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("if(x) {".to_string()),
        Just("} else{".to_string()),
        Just("var snake_case = a == b;".to_string()),
        Just("foo(a,b,c);  ".to_string()),
        Just("\t  return x;".to_string()),
        Just("// if(x) a==b".to_string()),
        Just("/* a,b".to_string()),
        Just("*/ c != d".to_string()),
        Just("const s = 'a,b==c';".to_string()),
        Just("x".repeat(100)),
        Just(String::new()),
        prop::string::string_regex("[a-z =!,(){}\t]{0,30}").unwrap(),
    ]
}

fn arb_js_buffer() -> impl Strategy<Value = String> {
    (prop::collection::vec(arb_js_line(), 0..20), any::<bool>()).prop_map(|(lines, trailing)| {
        let mut text = lines.join("\n");
        if trailing && !text.is_empty() {
            text.push('\n');
        }
        text
    })
}

proptest! {
    #[test]
    fn scanning_is_deterministic(text in arb_js_buffer()) {
        let cfg = all_builtins();
        let first = scan(builtin_registry(), &cfg, &text).expect("scan");
        let second = scan(builtin_registry(), &cfg, &text).expect("scan");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn violations_are_rule_major_then_line_minor(text in arb_js_buffer()) {
        let result = scan(builtin_registry(), &all_builtins(), &text).expect("scan");
        let keys: Vec<(String, u32, u32)> = result
            .violations
            .iter()
            .map(|v| (v.rule_id.clone(), v.location.line, v.location.column))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn violations_reference_registered_rules(text in arb_js_buffer()) {
        let result = scan(builtin_registry(), &all_builtins(), &text).expect("scan");
        for v in &result.violations {
            prop_assert!(builtin_registry().contains(&v.rule_id));
            prop_assert!(v.location.line >= 1 && v.location.line <= result.lines_scanned);
            prop_assert!(v.location.column >= 1);
        }
    }

    #[test]
    fn status_matches_violations(text in arb_js_buffer()) {
        let result = scan(builtin_registry(), &all_builtins(), &text).expect("scan");
        let expected = if result.violations.is_empty() { ScanStatus::Pass } else { ScanStatus::Fail };
        prop_assert_eq!(result.status, expected);
        prop_assert_eq!(result.counts.total() as usize, result.violations.len());
    }
}

#[test]
fn empty_buffer_is_clean_under_every_rule() {
    let result = scan(builtin_registry(), &all_builtins(), "").expect("scan");
    assert!(result.violations.is_empty());
    assert_eq!(result.status, ScanStatus::Pass);
}
