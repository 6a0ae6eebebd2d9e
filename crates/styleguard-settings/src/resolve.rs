use crate::{model::StyleguardConfigV1, presets};
use globset::Glob;
use styleguard_domain::policy::{EffectiveConfig, RulePolicy};
use styleguard_types::{ConfigurationError, Severity};

pub const DEFAULT_INCLUDE: &[&str] = &["**/*.js"];
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules/**"];

/// Values from the command line. Each one beats the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    /// Exact active rule set.
    pub rules: Option<Vec<String>>,
    pub max_line_length: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

pub fn resolve_config(
    cfg: &StyleguardConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, ConfigurationError> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile);

    // Active set
    if let Some(rules) = overrides.rules.as_ref().or(cfg.rules.as_ref()) {
        effective.rules = rules
            .iter()
            .map(|id| {
                let policy = effective
                    .rules
                    .get(id)
                    .cloned()
                    .unwrap_or_else(RulePolicy::rule_default);
                (id.clone(), RulePolicy { enabled: true, ..policy })
            })
            .collect();
    } else {
        for custom in &cfg.custom_rules {
            effective
                .rules
                .entry(custom.id.clone())
                .or_insert_with(RulePolicy::rule_default);
        }
    }

    // Severity overrides never activate a rule on their own.
    for (rule_id, value) in &cfg.severity_overrides {
        let severity = Severity::parse(value).ok_or_else(|| ConfigurationError::InvalidSeverity {
            rule_id: rule_id.clone(),
            value: value.clone(),
        })?;
        effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled)
            .severity = Some(severity);
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on)?;
    }

    if let Some(max) = overrides.max_line_length.or(cfg.max_line_length) {
        if max == 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "max_line_length",
                value: max.to_string(),
                expected: "a positive integer",
            });
        }
        effective.max_line_length = max;
    }

    let include = globs_or_default("include", &cfg.include, DEFAULT_INCLUDE)?;
    let exclude = globs_or_default("exclude", &cfg.exclude, DEFAULT_EXCLUDE)?;

    Ok(ResolvedConfig {
        effective,
        include,
        exclude,
    })
}

fn globs_or_default(
    key: &'static str,
    patterns: &[String],
    default: &[&str],
) -> Result<Vec<String>, ConfigurationError> {
    if patterns.is_empty() {
        return Ok(default.iter().map(|s| s.to_string()).collect());
    }
    for pattern in patterns {
        Glob::new(pattern).map_err(|_| ConfigurationError::InvalidValue {
            key,
            value: pattern.clone(),
            expected: "a valid glob",
        })?;
    }
    Ok(patterns.to_vec())
}

fn parse_fail_on(v: &str) -> Result<Severity, ConfigurationError> {
    Severity::parse(v).ok_or_else(|| ConfigurationError::InvalidValue {
        key: "fail_on",
        value: v.to_string(),
        expected: "warning|error",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomRuleConfig;
    use styleguard_types::ids;

    fn resolve(cfg: &StyleguardConfigV1) -> ResolvedConfig {
        resolve_config(cfg, Overrides::default()).expect("resolve")
    }

    #[test]
    fn empty_config_is_default_profile() {
        let resolved = resolve(&StyleguardConfigV1::default());
        assert_eq!(resolved.effective, presets::preset("default"));
        assert_eq!(resolved.include, vec!["**/*.js".to_string()]);
        assert_eq!(resolved.exclude, vec!["node_modules/**".to_string()]);
    }

    #[test]
    fn cli_overrides_beat_config_file() {
        let cfg = StyleguardConfigV1 {
            profile: Some("relaxed".to_string()),
            fail_on: Some("error".to_string()),
            max_line_length: Some(120),
            ..Default::default()
        };
        let overrides = Overrides {
            profile: Some("strict".to_string()),
            fail_on: Some("warning".to_string()),
            rules: None,
            max_line_length: Some(100),
        };
        let resolved = resolve_config(&cfg, overrides).expect("resolve");
        assert_eq!(resolved.effective.profile, "strict");
        assert_eq!(resolved.effective.fail_on, Severity::Warning);
        assert_eq!(resolved.effective.max_line_length, 100);
    }

    #[test]
    fn explicit_rules_replace_profile_set_and_keep_profile_severity() {
        let cfg = StyleguardConfigV1 {
            profile: Some("strict".to_string()),
            rules: Some(vec![ids::RULE_FINAL_NEWLINE.to_string()]),
            ..Default::default()
        };
        let resolved = resolve(&cfg);
        assert_eq!(
            resolved.effective.active_rule_ids(),
            vec![ids::RULE_FINAL_NEWLINE.to_string()]
        );
        assert_eq!(
            resolved.effective.rules[ids::RULE_FINAL_NEWLINE].severity,
            Some(Severity::Error)
        );
    }

    #[test]
    fn cli_rules_beat_config_rules() {
        let cfg = StyleguardConfigV1 {
            rules: Some(vec![ids::RULE_FINAL_NEWLINE.to_string()]),
            ..Default::default()
        };
        let overrides = Overrides {
            rules: Some(vec![ids::RULE_COMMA_SPACING.to_string()]),
            ..Default::default()
        };
        let resolved = resolve_config(&cfg, overrides).expect("resolve");
        assert_eq!(
            resolved.effective.active_rule_ids(),
            vec![ids::RULE_COMMA_SPACING.to_string()]
        );
    }

    #[test]
    fn custom_rules_join_the_profile_set() {
        let cfg = StyleguardConfigV1 {
            profile: Some("relaxed".to_string()),
            custom_rules: vec![CustomRuleConfig {
                id: "custom.no_console".to_string(),
                pattern: "console".to_string(),
                message: "no console".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let resolved = resolve(&cfg);
        assert!(resolved
            .effective
            .active_rule_ids()
            .contains(&"custom.no_console".to_string()));
    }

    #[test]
    fn severity_override_applies_without_activating() {
        let mut cfg = StyleguardConfigV1 {
            profile: Some("relaxed".to_string()),
            ..Default::default()
        };
        cfg.severity_overrides
            .insert(ids::RULE_STRICT_EQUALITY.to_string(), "warn".to_string());
        cfg.severity_overrides
            .insert(ids::RULE_MAX_LINE_LENGTH.to_string(), "error".to_string());

        let effective = resolve(&cfg).effective;
        assert_eq!(
            effective.rules[ids::RULE_STRICT_EQUALITY],
            RulePolicy::enabled(Severity::Warning)
        );
        let max = &effective.rules[ids::RULE_MAX_LINE_LENGTH];
        assert!(!max.enabled);
        assert_eq!(max.severity, Some(Severity::Error));
    }

    #[test]
    fn invalid_severity_is_a_configuration_error() {
        let mut cfg = StyleguardConfigV1::default();
        cfg.severity_overrides
            .insert(ids::RULE_COMMA_SPACING.to_string(), "fatal".to_string());
        let err = resolve_config(&cfg, Overrides::default()).expect_err("bad severity");
        assert_eq!(
            err,
            ConfigurationError::InvalidSeverity {
                rule_id: ids::RULE_COMMA_SPACING.to_string(),
                value: "fatal".to_string(),
            }
        );
    }

    #[test]
    fn invalid_scalars_are_rejected() {
        let cfg = StyleguardConfigV1 {
            fail_on: Some("info".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_config(&cfg, Overrides::default()),
            Err(ConfigurationError::InvalidValue { key: "fail_on", .. })
        ));

        let cfg = StyleguardConfigV1 {
            max_line_length: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            resolve_config(&cfg, Overrides::default()),
            Err(ConfigurationError::InvalidValue {
                key: "max_line_length",
                ..
            })
        ));

        let cfg = StyleguardConfigV1 {
            exclude: vec!["src/[".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            resolve_config(&cfg, Overrides::default()),
            Err(ConfigurationError::InvalidValue { key: "exclude", .. })
        ));
    }
}
