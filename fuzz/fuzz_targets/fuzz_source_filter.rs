//! Fuzz target for include/exclude glob filtering.
//!
//! Goal: compiling and applying discovery globs should **never panic** on any input.
//! Invalid patterns may return errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_source_filter
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FilterInput {
    include: Vec<String>,
    exclude: Vec<String>,
    candidates: Vec<String>,
}

fuzz_target!(|input: FilterInput| {
    if input.include.len() > 20 || input.exclude.len() > 20 || input.candidates.len() > 100 {
        return;
    }

    let keep_short = |v: Vec<String>, max: usize| -> Vec<String> {
        v.into_iter().filter(|s| s.len() <= max).collect()
    };
    let include = keep_short(input.include, 256);
    let exclude = keep_short(input.exclude, 256);
    let candidates = keep_short(input.candidates, 512);

    if let Ok(selected) = styleguard_repo::fuzz::filter_paths(&include, &exclude, &candidates) {
        assert!(selected.len() <= candidates.len());
    }
});
