use crate::engine::scan;
use crate::policy::{EffectiveConfig, RulePolicy, DEFAULT_MAX_LINE_LENGTH};
use crate::registry::builtin_registry;
use std::collections::BTreeMap;
use styleguard_types::{Severity, Violation};

pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: Severity::Warning,
        max_line_length: DEFAULT_MAX_LINE_LENGTH,
        rules,
    }
}

/// Every built-in rule at its own default severity.
pub fn all_builtins() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: Severity::Warning,
        max_line_length: DEFAULT_MAX_LINE_LENGTH,
        rules: builtin_registry()
            .ids()
            .map(|id| (id.to_string(), RulePolicy::rule_default()))
            .collect(),
    }
}

/// Violations of a single built-in rule over `text`.
pub fn violations_of(rule_id: &str, text: &str) -> Vec<Violation> {
    let cfg = config_with_rule(rule_id, Severity::Warning);
    scan(builtin_registry(), &cfg, text)
        .expect("built-in rule ids are registered")
        .violations
}
