//! The `rules` use case: list everything registered for a configuration.

use anyhow::Context;
use styleguard_domain::Matcher;
use styleguard_types::Severity;

use crate::check::load_config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSummary {
    pub id: String,
    pub code: String,
    pub severity: Severity,
    pub message: String,
    /// `false` for rules declared in configuration.
    pub builtin: bool,
}

/// Built-in rules plus the custom rules declared in `config_text`, in id order.
pub fn run_rules(config_text: &str) -> anyhow::Result<Vec<RuleSummary>> {
    let cfg = load_config(config_text)?;
    let registry = styleguard_settings::build_registry(&cfg).context("build rule registry")?;

    Ok(registry
        .iter()
        .map(|rule| RuleSummary {
            id: rule.id.clone(),
            code: rule.code.clone(),
            severity: rule.severity,
            message: rule.message.clone(),
            builtin: matches!(rule.matcher, Matcher::Line(_)),
        })
        .collect())
}

/// One line per rule: id, default severity, message.
pub fn format_rules(rules: &[RuleSummary]) -> String {
    let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for r in rules {
        let origin = if r.builtin { "" } else { " (custom)" };
        out.push_str(&format!(
            "{:<width$}  {:<7}  {}{}\n",
            r.id,
            r.severity.as_str(),
            r.message,
            origin
        ));
    }
    out
}
