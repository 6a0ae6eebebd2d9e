//! Fuzz target for config parsing, resolution and custom rule compilation.
//!
//! Goal: arbitrary `styleguard.toml` text must **never panic**. Parse errors and
//! configuration errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use styleguard_settings::Overrides;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(cfg) = styleguard_settings::parse_config_toml(text) else {
        return;
    };
    let _ = styleguard_settings::build_registry(&cfg);
    let _ = styleguard_settings::resolve_config(&cfg, Overrides::default());
});
