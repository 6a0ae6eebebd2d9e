use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_NO_TRAILING_WHITESPACE,
        ids::CODE_TRAILING_WHITESPACE,
        Severity::Warning,
        "line ends with whitespace",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    let trimmed = line.text.trim_end_matches(char::is_whitespace);
    if trimmed.len() == line.text.len() {
        return Vec::new();
    }
    vec![Hit::new(
        line.text_column(trimmed.len()),
        &line.text[trimmed.len()..],
    )]
}
