use styleguard_domain::policy::{EffectiveConfig, RulePolicy, DEFAULT_MAX_LINE_LENGTH};
use styleguard_types::{explain, ids, Severity};
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "default";

/// Preset profiles are opinionated defaults. Unknown names get `default`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "relaxed" => relaxed_profile(),
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: DEFAULT_PROFILE.to_string(),
        fail_on: Severity::Warning,
        max_line_length: DEFAULT_MAX_LINE_LENGTH,
        rules: all_builtins(RulePolicy::rule_default),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: Severity::Warning,
        max_line_length: DEFAULT_MAX_LINE_LENGTH,
        rules: all_builtins(|| RulePolicy::enabled(Severity::Error)),
    }
}

fn relaxed_profile() -> EffectiveConfig {
    // Only the rules that usually indicate real bugs.
    let rules = [ids::RULE_NO_MIXED_INDENTATION, ids::RULE_STRICT_EQUALITY]
        .into_iter()
        .map(|id| (id.to_string(), RulePolicy::rule_default()))
        .collect();

    EffectiveConfig {
        profile: "relaxed".to_string(),
        fail_on: Severity::Error,
        max_line_length: DEFAULT_MAX_LINE_LENGTH,
        rules,
    }
}

fn all_builtins(policy: impl Fn() -> RulePolicy) -> BTreeMap<String, RulePolicy> {
    explain::all_rule_ids()
        .iter()
        .map(|id| (id.to_string(), policy()))
        .collect()
}
