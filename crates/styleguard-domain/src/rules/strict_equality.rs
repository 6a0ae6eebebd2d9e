use crate::registry::{Hit, Rule, RuleContext};
use styleguard_scan::LineRecord;
use styleguard_types::{ids, Severity};

pub fn rule() -> Rule {
    Rule::builtin(
        ids::RULE_STRICT_EQUALITY,
        ids::CODE_LOOSE_EQUALITY,
        Severity::Error,
        "use strict equality",
        check,
    )
}

pub fn check(line: &LineRecord<'_>, _ctx: &RuleContext) -> Vec<Hit> {
    let bytes = line.code.as_bytes();
    let mut hits = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        let first = bytes[i];
        if (first == b'=' || first == b'!') && bytes[i + 1] == b'=' {
            if bytes.get(i + 2) == Some(&b'=') {
                // `===` / `!==`
                i += 3;
                continue;
            }
            let (loose, strict) = if first == b'=' {
                ("==", "===")
            } else {
                ("!=", "!==")
            };
            let column = line.code_column(i);
            hits.push(
                Hit::new(column, line.snippet(column, 2))
                    .with_message(format!("use `{strict}` instead of `{loose}`")),
            );
            i += 2;
        } else {
            i += 1;
        }
    }

    hits
}
