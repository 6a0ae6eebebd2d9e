//! Names introduced by `var`, `let`, `const` and `function`.
//!
//! Works on the code view, so comments and string contents never produce names.
//! A declaration statement may span lines: the tracker keeps its phase and bracket
//! depth between calls, the same way the lexer keeps block-comment state.
//!
//! Destructuring patterns are skipped, not unpacked.

/// A declared name on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Byte offset of the name in the line's code view.
    pub offset: usize,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    /// After a declaration keyword or a top-level comma; the next identifier is a name.
    Name,
    /// Skipping an initializer. `depth` counts brackets opened since the name.
    Initializer { depth: u32 },
}

/// Trailing characters that keep a depth-0 initializer going onto the next line.
const CONTINUES: &str = ",=+-*/%&|^!<>?:.([{";

#[derive(Clone, Debug, Default)]
pub(crate) struct DeclarationTracker {
    phase: Phase,
    function_name_next: bool,
}

impl DeclarationTracker {
    pub(crate) fn scan_line(&mut self, code: &str) -> Vec<Binding> {
        let mut bindings = Vec::new();
        let mut last_significant: Option<char> = None;
        let mut chars = code.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }

            if is_ident_start(c) {
                let mut end = start + c.len_utf8();
                while let Some(&(i, n)) = chars.peek() {
                    if !is_ident_continue(n) {
                        break;
                    }
                    end = i + n.len_utf8();
                    chars.next();
                }
                self.on_word(start, &code[start..end], &mut bindings);
                last_significant = code[start..end].chars().last();
                continue;
            }

            if c.is_ascii_digit() {
                while chars
                    .peek()
                    .is_some_and(|&(_, n)| is_ident_continue(n) || n == '.')
                {
                    chars.next();
                }
                self.function_name_next = false;
                if self.phase == Phase::Name {
                    self.phase = Phase::Idle;
                }
                last_significant = Some('0');
                continue;
            }

            self.on_punct(c);
            last_significant = Some(c);
        }

        // No trailing operator or comma: the statement ended by semicolon insertion.
        if self.phase == (Phase::Initializer { depth: 0 })
            && !last_significant.is_some_and(|c| CONTINUES.contains(c))
        {
            self.phase = Phase::Idle;
        }

        bindings
    }

    fn on_word(&mut self, offset: usize, word: &str, bindings: &mut Vec<Binding>) {
        if std::mem::take(&mut self.function_name_next) {
            bindings.push(Binding {
                offset,
                name: word.to_string(),
            });
            return;
        }

        match word {
            "var" | "let" | "const" => self.phase = Phase::Name,
            "function" => self.function_name_next = true,
            _ if self.phase == Phase::Name => {
                bindings.push(Binding {
                    offset,
                    name: word.to_string(),
                });
                self.phase = Phase::Initializer { depth: 0 };
            }
            _ => {}
        }
    }

    fn on_punct(&mut self, c: char) {
        // `function* name` declares a generator.
        if c != '*' {
            self.function_name_next = false;
        }

        self.phase = match (self.phase, c) {
            (Phase::Name, '{' | '[') => Phase::Initializer { depth: 1 },
            (Phase::Name, _) => Phase::Idle,
            (Phase::Initializer { depth }, '(' | '[' | '{') => {
                Phase::Initializer { depth: depth + 1 }
            }
            (Phase::Initializer { depth: 0 }, ')' | ']' | '}' | ';') => Phase::Idle,
            (Phase::Initializer { depth }, ')' | ']' | '}') => {
                Phase::Initializer { depth: depth - 1 }
            }
            (Phase::Initializer { depth: 0 }, ',') => Phase::Name,
            (phase, _) => phase,
        };
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
