use crate::fingerprint::fingerprint_for_violation;
use crate::policy::EffectiveConfig;
use crate::registry::{Rule, RuleContext, RuleRegistry};
use crate::report::ScanResult;
use styleguard_scan::{Directive, DirectiveKind, LineRecord, Source};
use styleguard_types::{
    ConfigurationError, Location, RepoPath, ScanStatus, Severity, SeverityCounts, Violation,
};

/// A named text buffer to evaluate.
#[derive(Clone, Copy, Debug)]
pub struct ScanInput<'a> {
    pub path: &'a RepoPath,
    pub text: &'a str,
}

/// Scan an anonymous in-memory buffer.
pub fn scan(
    registry: &RuleRegistry,
    cfg: &EffectiveConfig,
    text: &str,
) -> Result<ScanResult, ConfigurationError> {
    let path = RepoPath::new("<buffer>");
    evaluate(registry, cfg, &ScanInput { path: &path, text })
}

/// Evaluate every active rule against every line of `input`.
///
/// Violations come out rule-major (rule id ascending), then line-minor
/// (line, then column). Fails before scanning if the configuration names a rule
/// the registry does not know.
pub fn evaluate(
    registry: &RuleRegistry,
    cfg: &EffectiveConfig,
    input: &ScanInput<'_>,
) -> Result<ScanResult, ConfigurationError> {
    let active = active_rules(registry, cfg)?;

    let source = Source::new(input.text);
    let ctx = RuleContext {
        max_line_length: cfg.max_line_length,
    };

    let mut violations = Vec::new();
    let mut suppressed = 0u32;

    for (rule, severity) in active {
        suppressed += evaluate_rule(rule, severity, &source, &ctx, input.path, &mut violations);
    }

    let counts = SeverityCounts::from_violations(&violations);
    let status = compute_status(&violations, cfg.fail_on);

    Ok(ScanResult {
        path: input.path.clone(),
        status,
        violations,
        counts,
        lines_scanned: source.lines().count() as u32,
        suppressed,
    })
}

/// Check that every rule the configuration names is registered, enabled or not.
pub fn validate_config(
    registry: &RuleRegistry,
    cfg: &EffectiveConfig,
) -> Result<(), ConfigurationError> {
    for id in cfg.rules.keys() {
        registry.lookup(id)?;
    }
    Ok(())
}

fn active_rules<'r>(
    registry: &'r RuleRegistry,
    cfg: &EffectiveConfig,
) -> Result<Vec<(&'r Rule, Severity)>, ConfigurationError> {
    validate_config(registry, cfg)?;

    Ok(registry
        .iter()
        .filter_map(|rule| {
            cfg.rule_policy(&rule.id)
                .map(|policy| (rule, policy.severity.unwrap_or(rule.severity)))
        })
        .collect())
}

/// One pass over the buffer for a single rule. Returns the number of suppressed hits.
fn evaluate_rule(
    rule: &Rule,
    severity: Severity,
    source: &Source<'_>,
    ctx: &RuleContext,
    path: &RepoPath,
    out: &mut Vec<Violation>,
) -> u32 {
    let mut suppressed = 0;
    let mut pending: Option<Directive> = None;

    for line in source.lines() {
        let carried = pending.take();
        if let Some(d) = &line.directive
            && d.kind == DirectiveKind::DisableNextLine
        {
            pending = Some(d.clone());
        }

        let mut hits = rule.matcher.matches(&line, ctx);
        if hits.is_empty() {
            continue;
        }
        if is_suppressed(&line, carried.as_ref(), &rule.id) {
            suppressed += hits.len() as u32;
            continue;
        }

        hits.sort_by_key(|h| h.column);
        for hit in hits {
            let code = hit.code.unwrap_or(rule.code.as_str());
            let fingerprint =
                fingerprint_for_violation(&rule.id, code, path.as_str(), line.number, &hit.snippet);
            out.push(Violation {
                rule_id: rule.id.clone(),
                code: code.to_string(),
                severity,
                message: hit.message.unwrap_or_else(|| rule.message.clone()),
                location: Location {
                    line: line.number,
                    column: hit.column,
                },
                snippet: hit.snippet,
                fingerprint: Some(fingerprint),
            });
        }
    }

    suppressed
}

fn is_suppressed(line: &LineRecord<'_>, carried: Option<&Directive>, rule_id: &str) -> bool {
    let same_line = line
        .directive
        .as_ref()
        .is_some_and(|d| d.kind == DirectiveKind::DisableLine && d.covers(rule_id));
    same_line || carried.is_some_and(|d| d.covers(rule_id))
}

fn compute_status(violations: &[Violation], fail_on: Severity) -> ScanStatus {
    if violations.iter().any(|v| v.severity >= fail_on) {
        ScanStatus::Fail
    } else {
        ScanStatus::Pass
    }
}
