//! Built-in line rules.
//!
//! Each module exposes `rule()` (the registry definition) and a `check` function
//! evaluated against one line record at a time.

use crate::registry::Rule;

mod camel_case_identifiers;
mod comma_spacing;
mod control_flow_spacing;
mod final_newline;
mod max_line_length;
mod no_mixed_indentation;
mod no_trailing_whitespace;
mod strict_equality;


/// Longest snippet attached to a violation, in characters.
const SNIPPET_MAX: usize = 40;

pub fn builtin_rules() -> Vec<Rule> {
    vec![
        camel_case_identifiers::rule(),
        comma_spacing::rule(),
        control_flow_spacing::rule(),
        final_newline::rule(),
        max_line_length::rule(),
        no_mixed_indentation::rule(),
        no_trailing_whitespace::rule(),
        strict_equality::rule(),
    ]
}
