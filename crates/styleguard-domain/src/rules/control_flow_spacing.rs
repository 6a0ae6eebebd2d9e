use crate::registry::{Hit, Rule, RuleContext};
use regex::Regex;
use std::sync::LazyLock;
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

static KEYWORD_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(if|for|while|switch|catch|with)\(").expect("keyword/paren regex is valid")
});

static BRACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\)|\b(?:else|try|finally|do))\{").expect("brace regex is valid")
});

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_CONTROL_FLOW_SPACING,
        ids::CODE_MISSING_SPACE_BEFORE_PAREN,
        Severity::Warning,
        "control-flow keyword is not followed by a space",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    let mut hits = Vec::new();

    for caps in KEYWORD_PAREN.captures_iter(&line.code) {
        let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let column = line.code_column(whole.start());
        hits.push(
            Hit::new(column, line.snippet(column, whole.as_str().chars().count()))
                .with_code(ids::CODE_MISSING_SPACE_BEFORE_PAREN)
                .with_message(format!("missing space after `{}`", keyword.as_str())),
        );
    }

    for m in BRACE.find_iter(&line.code) {
        let column = line.code_column(m.start());
        hits.push(
            Hit::new(column, line.snippet(column, m.as_str().chars().count()))
                .with_code(ids::CODE_MISSING_SPACE_BEFORE_BRACE)
                .with_message("missing space before `{`"),
        );
    }

    hits.sort_by_key(|h| h.column);
    hits
}
