//! Stable identifiers for rules and finding codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_NO_TRAILING_WHITESPACE: &str = "style.no_trailing_whitespace";
pub const RULE_NO_MIXED_INDENTATION: &str = "style.no_mixed_indentation";
pub const RULE_CONTROL_FLOW_SPACING: &str = "style.control_flow_spacing";
pub const RULE_STRICT_EQUALITY: &str = "style.strict_equality";
pub const RULE_MAX_LINE_LENGTH: &str = "style.max_line_length";
pub const RULE_FINAL_NEWLINE: &str = "style.final_newline";
pub const RULE_COMMA_SPACING: &str = "style.comma_spacing";
pub const RULE_CAMEL_CASE_IDENTIFIERS: &str = "style.camel_case_identifiers";

// Codes: style.no_trailing_whitespace
pub const CODE_TRAILING_WHITESPACE: &str = "trailing_whitespace";

// Codes: style.no_mixed_indentation
pub const CODE_MIXED_INDENTATION: &str = "mixed_indentation";

// Codes: style.control_flow_spacing
pub const CODE_MISSING_SPACE_BEFORE_PAREN: &str = "missing_space_before_paren";
pub const CODE_MISSING_SPACE_BEFORE_BRACE: &str = "missing_space_before_brace";

// Codes: style.strict_equality
pub const CODE_LOOSE_EQUALITY: &str = "loose_equality";

// Codes: style.max_line_length
pub const CODE_LINE_TOO_LONG: &str = "line_too_long";

// Codes: style.final_newline
pub const CODE_MISSING_FINAL_NEWLINE: &str = "missing_final_newline";

// Codes: style.comma_spacing
pub const CODE_MISSING_SPACE_AFTER_COMMA: &str = "missing_space_after_comma";

// Codes: style.camel_case_identifiers
pub const CODE_SNAKE_CASE_IDENTIFIER: &str = "snake_case_identifier";

// Custom pattern rules
pub const CODE_PATTERN_MATCH: &str = "pattern_match";
