use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_NO_MIXED_INDENTATION,
        ids::CODE_MIXED_INDENTATION,
        Severity::Error,
        "indentation mixes tabs and spaces",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    // Blank lines are left to the trailing-whitespace rule.
    if line.is_blank() || !line.indent.is_mixed() {
        return Vec::new();
    }

    let lead = line.snippet(1, line.indent.width() as usize);
    if is_comment_continuation(lead, &line.text[lead.len()..]) {
        return Vec::new();
    }

    vec![Hit::new(1, lead)]
}

/// `\t\t * text` inside a tab-indented block comment.
fn is_comment_continuation(lead: &str, rest: &str) -> bool {
    lead.trim_start_matches('\t') == " " && rest.starts_with('*')
}
