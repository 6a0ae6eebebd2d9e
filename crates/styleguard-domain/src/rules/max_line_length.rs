use super::SNIPPET_MAX;
use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_MAX_LINE_LENGTH,
        ids::CODE_LINE_TOO_LONG,
        Severity::Warning,
        "line exceeds the maximum length",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, ctx: &RuleContext) -> Vec<Hit> {
    let len = line.char_len();
    if len <= ctx.max_line_length {
        return Vec::new();
    }
    let column = ctx.max_line_length + 1;
    vec![
        Hit::new(column, line.snippet(column, SNIPPET_MAX)).with_message(format!(
            "line is {len} characters long (max {})",
            ctx.max_line_length
        )),
    ]
}
