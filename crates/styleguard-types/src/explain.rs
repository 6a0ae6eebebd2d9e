//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why the convention exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a violation.
    pub before: &'static str,
    /// Code that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_NO_TRAILING_WHITESPACE => Some(explain_no_trailing_whitespace()),
        ids::RULE_NO_MIXED_INDENTATION => Some(explain_no_mixed_indentation()),
        ids::RULE_CONTROL_FLOW_SPACING => Some(explain_control_flow_spacing()),
        ids::RULE_STRICT_EQUALITY => Some(explain_strict_equality()),
        ids::RULE_MAX_LINE_LENGTH => Some(explain_max_line_length()),
        ids::RULE_FINAL_NEWLINE => Some(explain_final_newline()),
        ids::RULE_COMMA_SPACING => Some(explain_comma_spacing()),
        ids::RULE_CAMEL_CASE_IDENTIFIERS => Some(explain_camel_case_identifiers()),

        // Codes
        ids::CODE_TRAILING_WHITESPACE => Some(retitle(
            explain_no_trailing_whitespace(),
            "Trailing Whitespace",
        )),
        ids::CODE_MIXED_INDENTATION => Some(retitle(
            explain_no_mixed_indentation(),
            "Mixed Indentation",
        )),
        ids::CODE_MISSING_SPACE_BEFORE_PAREN => Some(explain_missing_space_before_paren()),
        ids::CODE_MISSING_SPACE_BEFORE_BRACE => Some(explain_missing_space_before_brace()),
        ids::CODE_LOOSE_EQUALITY => Some(retitle(explain_strict_equality(), "Loose Equality")),
        ids::CODE_LINE_TOO_LONG => Some(retitle(explain_max_line_length(), "Line Too Long")),
        ids::CODE_MISSING_FINAL_NEWLINE => Some(retitle(
            explain_final_newline(),
            "Missing Final Newline",
        )),
        ids::CODE_MISSING_SPACE_AFTER_COMMA => Some(retitle(
            explain_comma_spacing(),
            "Missing Space After Comma",
        )),
        ids::CODE_SNAKE_CASE_IDENTIFIER => Some(retitle(
            explain_camel_case_identifiers(),
            "snake_case Identifier",
        )),
        ids::CODE_PATTERN_MATCH => Some(explain_pattern_match()),

        _ => None,
    }
}

/// List all built-in rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_NO_TRAILING_WHITESPACE,
        ids::RULE_NO_MIXED_INDENTATION,
        ids::RULE_CONTROL_FLOW_SPACING,
        ids::RULE_STRICT_EQUALITY,
        ids::RULE_MAX_LINE_LENGTH,
        ids::RULE_FINAL_NEWLINE,
        ids::RULE_COMMA_SPACING,
        ids::RULE_CAMEL_CASE_IDENTIFIERS,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_TRAILING_WHITESPACE,
        ids::CODE_MIXED_INDENTATION,
        ids::CODE_MISSING_SPACE_BEFORE_PAREN,
        ids::CODE_MISSING_SPACE_BEFORE_BRACE,
        ids::CODE_LOOSE_EQUALITY,
        ids::CODE_LINE_TOO_LONG,
        ids::CODE_MISSING_FINAL_NEWLINE,
        ids::CODE_MISSING_SPACE_AFTER_COMMA,
        ids::CODE_SNAKE_CASE_IDENTIFIER,
        ids::CODE_PATTERN_MATCH,
    ]
}

fn retitle(mut exp: Explanation, title: &'static str) -> Explanation {
    exp.title = title;
    exp
}

// --- Rule-level explanations ---

fn explain_no_trailing_whitespace() -> Explanation {
    Explanation {
        title: "No Trailing Whitespace",
        description: "\
Detects spaces or tabs at the end of a line.

Trailing whitespace is invisible in most editors, so it:
- Produces noisy diffs when someone's editor strips it
- Hides in code review and creeps back in file by file",
        remediation: "\
Delete the whitespace after the last visible character. Most editors can do this
on save; for example `\"files.trimTrailingWhitespace\": true` in VS Code or
`trim_trailing_whitespace = true` in `.editorconfig`.",
        examples: ExamplePair {
            before: "var total = 0;   \nreturn total;",
            after: "var total = 0;\nreturn total;",
        },
    }
}

fn explain_no_mixed_indentation() -> Explanation {
    Explanation {
        title: "No Mixed Indentation",
        description: "\
Detects lines whose leading whitespace contains both tabs and spaces.

Never mix spaces and tabs. A file that mixes them renders differently for every
reader whose tab width differs, and alignment silently breaks.

A tab-indented block-comment continuation (`\\t * text`) is allowed.",
        remediation: "\
Pick one indentation style for the project, preferably soft indents (spaces),
and convert the line. Setting `indent_style` in `.editorconfig` keeps editors
consistent.",
        examples: ExamplePair {
            before: "function foo() {\n\t  return bar;\n}",
            after: "function foo() {\n  return bar;\n}",
        },
    }
}

fn explain_control_flow_spacing() -> Explanation {
    Explanation {
        title: "Control Flow Spacing",
        description: "\
Detects control-flow keywords glued to their parenthesis or brace.

Use whitespace to improve readability: `if`, `for`, `while`, `switch`, `catch`
and `with` are followed by a space before `(`, and a block's opening brace is
separated from the preceding `)` or keyword (`else`, `try`, `finally`, `do`).
Keeping keywords visually distinct from function calls makes control flow easy
to scan.",
        remediation: "\
Insert a single space after the keyword and before the opening brace:

    if ( condition ) {
      // statements
    }",
        examples: ExamplePair {
            before: "if(condition){\n  doSomething();\n}else{\n  doOther();\n}",
            after: "if ( condition ) {\n  doSomething();\n} else {\n  doOther();\n}",
        },
    }
}

fn explain_strict_equality() -> Explanation {
    Explanation {
        title: "Strict Equality",
        description: "\
Detects `==` and `!=` comparisons.

Loose equality applies type coercion, so `\"\" == 0` and `null == undefined` are
both true. Strict equality (`===`, `!==`) compares without coercion and states
the intended type explicitly.",
        remediation: "\
Replace `==` with `===` and `!=` with `!==`. If coercion is genuinely wanted,
convert the operand explicitly first (`Number(x) === 0`).",
        examples: ExamplePair {
            before: "if ( foo == \"bar\" ) {\n  // ...\n}",
            after: "if ( foo === \"bar\" ) {\n  // ...\n}",
        },
    }
}

fn explain_max_line_length() -> Explanation {
    Explanation {
        title: "Maximum Line Length",
        description: "\
Detects lines longer than the configured maximum (80 characters by default).

Long lines force horizontal scrolling and make side-by-side diffs hard to read.
The limit is configured with `max_line_length` in styleguard.toml.",
        remediation: "\
Break the expression over several lines, introduce an intermediate variable, or
move long string literals into named constants.",
        examples: ExamplePair {
            before: "var message = \"this string is long enough that the line runs well past the eighty column limit\";",
            after: "var message = \"this string is long enough that the line \" +\n  \"runs well past the eighty column limit\";",
        },
    }
}

fn explain_final_newline() -> Explanation {
    Explanation {
        title: "Final Newline",
        description: "\
Detects files whose last line is not terminated by a newline.

POSIX tools treat a missing final newline as an incomplete line; concatenating
such files joins the last and first lines, and diffs show a spurious
\"No newline at end of file\" marker.",
        remediation: "\
End the file with a single newline. `insert_final_newline = true` in
`.editorconfig` does this automatically.",
        examples: ExamplePair {
            before: "module.exports = foo;<EOF>",
            after: "module.exports = foo;\n<EOF>",
        },
    }
}

fn explain_comma_spacing() -> Explanation {
    Explanation {
        title: "Comma Spacing",
        description: "\
Detects commas directly followed by another token.

Commas in argument lists, array literals and declarations are followed by a
single space so that each element reads as a separate unit.",
        remediation: "Insert a space after each comma.",
        examples: ExamplePair {
            before: "foo(a,b,c);\nvar list = [1,2,3];",
            after: "foo(a, b, c);\nvar list = [1, 2, 3];",
        },
    }
}

fn explain_camel_case_identifiers() -> Explanation {
    Explanation {
        title: "camelCase Identifiers",
        description: "\
Detects variables and functions declared with snake_case names.

Name variables and functions in camelCase; reserve SCREAMING_CASE for constants
and PascalCase for constructors. Leading or trailing underscores (conventional
markers for private members) are ignored.",
        remediation: "\
Rename the identifier to camelCase and update its references.",
        examples: ExamplePair {
            before: "var user_name = \"rick\";\nfunction get_user() {}",
            after: "var userName = \"rick\";\nfunction getUser() {}",
        },
    }
}

// --- Code-level explanations ---

fn explain_missing_space_before_paren() -> Explanation {
    Explanation {
        title: "Missing Space Before Parenthesis",
        description: "\
A control-flow keyword (`if`, `for`, `while`, `switch`, `catch`, `with`) is
immediately followed by `(`, which makes it read like a function call.",
        remediation: "Insert a space between the keyword and the parenthesis.",
        examples: ExamplePair {
            before: "while(x < 10) {\n  x++;\n}",
            after: "while (x < 10) {\n  x++;\n}",
        },
    }
}

fn explain_missing_space_before_brace() -> Explanation {
    Explanation {
        title: "Missing Space Before Brace",
        description: "\
A block's opening brace is glued to the preceding `)` or keyword.",
        remediation: "Insert a space before the opening brace.",
        examples: ExamplePair {
            before: "if (ready){\n  go();\n} else{\n  wait();\n}",
            after: "if (ready) {\n  go();\n} else {\n  wait();\n}",
        },
    }
}

fn explain_pattern_match() -> Explanation {
    Explanation {
        title: "Custom Pattern Match",
        description: "\
A line matched a custom rule declared in `[[custom_rules]]` of styleguard.toml.
The rule's message describes the convention it enforces.",
        remediation: "\
Follow the custom rule's message, or remove the rule from the configuration if
the convention no longer applies.",
        examples: ExamplePair {
            before: "console.log(\"debug\");",
            after: "logger.debug(\"debug\");",
        },
    }
}
