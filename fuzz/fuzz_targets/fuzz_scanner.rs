//! Fuzz target for the rule engine.
//!
//! Goal: scanning any UTF-8 buffer with every built-in rule active must **never panic**,
//! and every reported location must point inside the buffer.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scanner
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use styleguard_settings::{Overrides, StyleguardConfigV1};

#[derive(Arbitrary, Debug)]
struct ScanCase {
    text: String,
    max_line_length: u8,
}

fuzz_target!(|case: ScanCase| {
    if case.text.len() > 64 * 1024 {
        return;
    }

    let overrides = Overrides {
        profile: Some("strict".to_string()),
        max_line_length: Some(u32::from(case.max_line_length).max(1)),
        ..Overrides::default()
    };
    let Ok(resolved) = styleguard_settings::resolve_config(&StyleguardConfigV1::default(), overrides)
    else {
        return;
    };

    let Ok(result) = styleguard_domain::scan(
        styleguard_domain::builtin_registry(),
        &resolved.effective,
        &case.text,
    ) else {
        return;
    };

    let line_count = result.lines_scanned.max(1);
    for v in &result.violations {
        assert!(v.location.line >= 1 && v.location.line <= line_count);
        assert!(v.location.column >= 1);
    }
    assert_eq!(result.counts.total() as usize, result.violations.len());
});
