use styleguard_types::Severity;
use std::collections::BTreeMap;

pub const DEFAULT_MAX_LINE_LENGTH: u32 = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
    /// `None` keeps the rule's own default severity.
    pub severity: Option<Severity>,
}

impl RulePolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity: Some(severity),
        }
    }

    pub fn rule_default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Lowest severity that fails a scan.
    pub fail_on: Severity,
    pub max_line_length: u32,
    /// Every rule the configuration mentions, keyed by rule id. Rules missing here are inactive.
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }

    pub fn active_rule_ids(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter(|(_, p)| p.enabled)
            .map(|(id, _)| id.clone())
            .collect()
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            fail_on: Severity::Warning,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            rules: BTreeMap::new(),
        }
    }
}
