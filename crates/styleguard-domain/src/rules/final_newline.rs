use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_FINAL_NEWLINE,
        ids::CODE_MISSING_FINAL_NEWLINE,
        Severity::Warning,
        "file does not end with a newline",
        check,
    )
}

/// Only the last line of a buffer can be unterminated.
pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    if line.terminated || line.text.is_empty() {
        return Vec::new();
    }
    vec![Hit::new(line.char_len() + 1, "")]
}
