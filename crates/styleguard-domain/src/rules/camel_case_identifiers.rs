use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_CAMEL_CASE_IDENTIFIERS,
        ids::CODE_SNAKE_CASE_IDENTIFIER,
        Severity::Warning,
        "identifier is not camelCase",
        check,
    )
}

/// Every name the line declares, including later declarators of a
/// comma-separated `var`/`let`/`const` list.
pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    line.bindings
        .iter()
        .filter(|b| is_snake_case(&b.name))
        .map(|b| {
            let column = line.code_column(b.offset);
            Hit::new(column, line.snippet(column, b.name.chars().count()))
                .with_message(format!("identifier `{}` should be camelCase", b.name))
        })
        .collect()
}

/// Inner underscores plus at least one lowercase letter. SCREAMING_CASE and
/// `_private` / `trailing_` markers pass.
fn is_snake_case(name: &str) -> bool {
    let core = name.trim_matches('_');
    core.contains('_') && core.chars().any(|c| c.is_lowercase())
}
