//! Config parsing, profile/preset resolution and custom rule compilation.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod custom;
mod model;
mod presets;
mod resolve;

pub use custom::compile_custom_rule;
pub use model::{CustomRuleConfig, StyleguardConfigV1};
pub use presets::{preset, DEFAULT_PROFILE};
pub use resolve::{Overrides, ResolvedConfig, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};

use styleguard_domain::RuleRegistry;

/// Schema id written into `styleguard.toml` by tooling.
pub const SCHEMA_CONFIG_V1: &str = "styleguard.config.v1";

/// Parse `styleguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<StyleguardConfigV1> {
    let cfg: StyleguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + config file + CLI overrides).
pub fn resolve_config(
    cfg: &StyleguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    Ok(resolve::resolve_config(cfg, overrides)?)
}

/// Built-in rules plus every configured custom rule.
///
/// Fails on the first custom rule that does not compile or whose id is already taken.
pub fn build_registry(cfg: &StyleguardConfigV1) -> anyhow::Result<RuleRegistry> {
    let mut registry = RuleRegistry::with_builtins();
    for custom in &cfg.custom_rules {
        let rule = compile_custom_rule(custom)?;
        registry.register(rule)?;
    }
    Ok(registry)
}

/// JSON Schema for `styleguard.toml`.
pub fn config_json_schema() -> schemars::Schema {
    schemars::schema_for!(StyleguardConfigV1)
}
