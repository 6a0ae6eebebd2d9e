//! Fuzz target for suppression comment parsing.
//!
//! Goal: `parse_directive` should **never panic** on any line of text.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_suppression_directive
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let text = String::from_utf8_lossy(data);
    for line in text.lines() {
        let _ = styleguard_scan::parse_directive(line);
    }
});
