//! Minimal JavaScript lexical masking.
//!
//! Produces a "code view" of each line in which comment bodies and the contents of
//! string literals are replaced with spaces, so syntax rules do not fire inside them.
//! Every input character maps to exactly one output character, keeping columns aligned.
//!
//! Template literal text is masked but `${ ... }` interpolations stay code, so rules
//! see the expressions inside them.
//!
//! Regular-expression literals are not recognized and are treated as code.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Code,
    /// Inside `/* ... */`; may span lines.
    BlockComment,
    /// Inside a backtick template literal; may span lines.
    Template,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Lexer {
    state: State,
    /// Open `${` interpolations, innermost last, each with its count of unclosed `{`.
    interpolations: Vec<u32>,
}

impl Lexer {
    pub(crate) fn mask_line(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut chars = line.chars().peekable();
        // Single- and double-quoted strings never continue past the end of a line.
        let mut quote: Option<char> = None;

        while let Some(c) = chars.next() {
            match self.state {
                State::BlockComment => {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        out.push_str("  ");
                        self.state = State::Code;
                    } else {
                        out.push(' ');
                    }
                }
                State::Template => match c {
                    '\\' => {
                        out.push(' ');
                        if chars.next().is_some() {
                            out.push(' ');
                        }
                    }
                    '`' => {
                        out.push('`');
                        self.state = State::Code;
                    }
                    '$' if chars.peek() == Some(&'{') => {
                        chars.next();
                        out.push_str("${");
                        self.interpolations.push(0);
                        self.state = State::Code;
                    }
                    _ => out.push(' '),
                },
                State::Code => match quote {
                    Some(q) => {
                        if c == '\\' {
                            out.push(' ');
                            if chars.next().is_some() {
                                out.push(' ');
                            }
                        } else if c == q {
                            out.push(c);
                            quote = None;
                        } else {
                            out.push(' ');
                        }
                    }
                    None => match c {
                        '/' if chars.peek() == Some(&'/') => {
                            out.push(' ');
                            for _ in chars.by_ref() {
                                out.push(' ');
                            }
                        }
                        '/' if chars.peek() == Some(&'*') => {
                            chars.next();
                            out.push_str("  ");
                            self.state = State::BlockComment;
                        }
                        '\'' | '"' => {
                            quote = Some(c);
                            out.push(c);
                        }
                        '`' => {
                            out.push('`');
                            self.state = State::Template;
                        }
                        '{' => {
                            if let Some(open) = self.interpolations.last_mut() {
                                *open += 1;
                            }
                            out.push('{');
                        }
                        '}' => {
                            match self.interpolations.last().copied() {
                                Some(0) => {
                                    self.interpolations.pop();
                                    self.state = State::Template;
                                }
                                Some(_) => {
                                    if let Some(open) = self.interpolations.last_mut() {
                                        *open -= 1;
                                    }
                                }
                                None => {}
                            }
                            out.push('}');
                        }
                        _ => out.push(c),
                    },
                },
            }
        }

        out
    }
}
