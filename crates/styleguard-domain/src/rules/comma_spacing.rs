use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_COMMA_SPACING,
        ids::CODE_MISSING_SPACE_AFTER_COMMA,
        Severity::Warning,
        "missing space after comma",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut chars = line.code.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != ',' {
            continue;
        }
        // Sparse arrays (`[a,,b]`) and trailing commas are not spacing problems.
        if let Some(&(_, next)) = chars.peek()
            && !next.is_whitespace()
            && !matches!(next, ',' | ')' | ']')
        {
            let column = line.code_column(i);
            hits.push(Hit::new(column, line.snippet(column, 2)));
        }
    }

    hits
}
