use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `styleguard.toml` schema v1.
///
/// Unknown keys are rejected so typos surface instead of silently doing nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StyleguardConfigV1 {
    /// Optional schema string for tooling (`styleguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `default`, `strict` or `relaxed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Lowest severity that fails a scan: `warning` or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<u32>,

    /// Exact set of active rules. When absent the profile decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,

    /// Discovery globs, relative to the root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Map of rule_id -> severity.
    #[serde(
        default,
        alias = "severityOverrides",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub severity_overrides: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rules: Vec<CustomRuleConfig>,
}

/// A regex-backed rule declared in configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomRuleConfig {
    pub id: String,

    pub pattern: String,

    pub message: String,

    /// Finding code; defaults to `pattern_match`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// `warning` (default) or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// `text` (default) matches the raw line; `code` skips comments and strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
