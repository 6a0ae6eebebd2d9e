//! Inline suppression directives.
//!
//! Recognized forms (inside a `//` or `/* */` comment):
//! - `styleguard-disable-line [rule, ...]` suppresses violations on the same line
//! - `styleguard-disable-next-line [rule, ...]` suppresses violations on the following line
//!
//! Without rule ids every rule is suppressed. Anything after ` -- ` is a free-form reason.

const DISABLE_NEXT_LINE: &str = "styleguard-disable-next-line";
const DISABLE_LINE: &str = "styleguard-disable-line";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveKind {
    DisableLine,
    DisableNextLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Rule ids the directive applies to; empty means all rules.
    pub rules: Vec<String>,
}

impl Directive {
    pub fn covers(&self, rule_id: &str) -> bool {
        self.rules.is_empty() || self.rules.iter().any(|r| r == rule_id)
    }
}

/// Parse the suppression directive carried by a line, if any.
pub fn parse_directive(text: &str) -> Option<Directive> {
    let (kind, idx, marker) = if let Some(idx) = text.find(DISABLE_NEXT_LINE) {
        (DirectiveKind::DisableNextLine, idx, DISABLE_NEXT_LINE)
    } else if let Some(idx) = text.find(DISABLE_LINE) {
        (DirectiveKind::DisableLine, idx, DISABLE_LINE)
    } else {
        return None;
    };

    let before = text[..idx].trim_end();
    if !(before.ends_with("//") || before.ends_with("/*")) {
        return None;
    }

    let after = &text[idx + marker.len()..];
    if after.chars().next().is_some_and(|c| !c.is_whitespace()) {
        return None;
    }

    let mut args = after.trim();
    if let Some(stripped) = args.strip_suffix("*/") {
        args = stripped.trim_end();
    }
    if let Some(pos) = args.find("--") {
        args = &args[..pos];
    }

    let rules = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Some(Directive { kind, rules })
}
