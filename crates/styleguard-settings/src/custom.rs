use crate::model::CustomRuleConfig;
use regex::Regex;
use styleguard_domain::{MatchTarget, Rule};
use styleguard_types::{ids, ConfigurationError, Severity};

/// Turn a configured pattern rule into a registry entry.
pub fn compile_custom_rule(cfg: &CustomRuleConfig) -> Result<Rule, ConfigurationError> {
    if cfg.id.trim().is_empty() {
        return Err(ConfigurationError::InvalidValue {
            key: "custom_rules.id",
            value: cfg.id.clone(),
            expected: "a non-empty rule identifier",
        });
    }

    let regex = Regex::new(&cfg.pattern).map_err(|err| ConfigurationError::InvalidPattern {
        rule_id: cfg.id.clone(),
        reason: err.to_string(),
    })?;

    let severity = match cfg.severity.as_deref() {
        None => Severity::Warning,
        Some(v) => Severity::parse(v).ok_or_else(|| ConfigurationError::InvalidSeverity {
            rule_id: cfg.id.clone(),
            value: v.to_string(),
        })?,
    };

    let target = match cfg.target.as_deref() {
        None | Some("text") => MatchTarget::Text,
        Some("code") => MatchTarget::Code,
        Some(other) => {
            return Err(ConfigurationError::InvalidValue {
                key: "custom_rules.target",
                value: other.to_string(),
                expected: "text|code",
            });
        }
    };

    Ok(Rule::pattern(
        cfg.id.clone(),
        cfg.code.as_deref().unwrap_or(ids::CODE_PATTERN_MATCH),
        severity,
        cfg.message.clone(),
        regex,
        target,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_rule() -> CustomRuleConfig {
        CustomRuleConfig {
            id: "custom.todo".to_string(),
            pattern: r"\bTODO\b".to_string(),
            message: "resolve TODOs before merging".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_applied() {
        let rule = compile_custom_rule(&todo_rule()).expect("compile");
        assert_eq!(rule.id, "custom.todo");
        assert_eq!(rule.code, ids::CODE_PATTERN_MATCH);
        assert_eq!(rule.severity, Severity::Warning);
        assert!(matches!(
            rule.matcher,
            styleguard_domain::Matcher::Pattern {
                target: MatchTarget::Text,
                ..
            }
        ));
    }

    #[test]
    fn explicit_fields_win() {
        let cfg = CustomRuleConfig {
            code: Some("todo_comment".to_string()),
            severity: Some("error".to_string()),
            target: Some("code".to_string()),
            ..todo_rule()
        };
        let rule = compile_custom_rule(&cfg).expect("compile");
        assert_eq!(rule.code, "todo_comment");
        assert_eq!(rule.severity, Severity::Error);
    }

    #[test]
    fn invalid_pattern_names_the_rule() {
        let cfg = CustomRuleConfig {
            pattern: "(unclosed".to_string(),
            ..todo_rule()
        };
        match compile_custom_rule(&cfg) {
            Err(ConfigurationError::InvalidPattern { rule_id, .. }) => {
                assert_eq!(rule_id, "custom.todo")
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn invalid_severity_and_target_are_rejected() {
        let cfg = CustomRuleConfig {
            severity: Some("loud".to_string()),
            ..todo_rule()
        };
        assert!(matches!(
            compile_custom_rule(&cfg),
            Err(ConfigurationError::InvalidSeverity { .. })
        ));

        let cfg = CustomRuleConfig {
            target: Some("ast".to_string()),
            ..todo_rule()
        };
        assert!(matches!(
            compile_custom_rule(&cfg),
            Err(ConfigurationError::InvalidValue {
                key: "custom_rules.target",
                ..
            })
        ));
    }
}
