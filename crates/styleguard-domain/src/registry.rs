//! Rule definitions and the registry that owns them.
//!
//! The registry is populated once at startup (built-ins plus any configured custom
//! rules) and shared read-only by every scan afterwards.

use crate::rules;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use styleguard_scan::LineRecord;
use styleguard_types::{ConfigurationError, Severity};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate rule identifier: {id}")]
pub struct DuplicateRuleError {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule identifier: {id}")]
pub struct UnknownRuleError {
    pub id: String,
}

impl From<UnknownRuleError> for ConfigurationError {
    fn from(err: UnknownRuleError) -> Self {
        ConfigurationError::UnknownRule(err.id)
    }
}

/// Per-scan options visible to line checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleContext {
    pub max_line_length: u32,
}

/// A single match produced by a rule on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// 1-based character column.
    pub column: u32,
    pub snippet: String,
    /// Overrides the rule's default code.
    pub code: Option<&'static str>,
    /// Overrides the rule's default message.
    pub message: Option<String>,
}

impl Hit {
    pub fn new(column: u32, snippet: impl Into<String>) -> Self {
        Self {
            column,
            snippet: snippet.into(),
            code: None,
            message: None,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

pub type LineCheck = fn(&LineRecord<'_>, &RuleContext) -> Vec<Hit>;

/// Which view of a line a pattern runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchTarget {
    /// The raw line text.
    #[default]
    Text,
    /// The code view: comments and string contents blanked.
    Code,
}

#[derive(Clone)]
pub enum Matcher {
    Line(LineCheck),
    Pattern { regex: Regex, target: MatchTarget },
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Line(_) => f.write_str("Line(..)"),
            Matcher::Pattern { regex, target } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("target", target)
                .finish(),
        }
    }
}

impl Matcher {
    pub fn matches(&self, line: &LineRecord<'_>, ctx: &RuleContext) -> Vec<Hit> {
        match self {
            Matcher::Line(check) => check(line, ctx),
            Matcher::Pattern { regex, target } => {
                let haystack = match target {
                    MatchTarget::Text => line.text,
                    MatchTarget::Code => line.code.as_str(),
                };
                regex
                    .find_iter(haystack)
                    .filter(|m| !m.is_empty())
                    .map(|m| {
                        let column = match target {
                            MatchTarget::Text => line.text_column(m.start()),
                            MatchTarget::Code => line.code_column(m.start()),
                        };
                        let len = m.as_str().chars().count();
                        Hit::new(column, line.snippet(column, len))
                    })
                    .collect()
            }
        }
    }
}

/// A named, declarative check against source text. Immutable once registered.
#[derive(Clone, Debug)]
pub struct Rule {
    pub id: String,
    /// Default finding code; individual hits may refine it.
    pub code: String,
    /// Default severity when the configuration does not override it.
    pub severity: Severity,
    pub message: String,
    pub matcher: Matcher,
}

impl Rule {
    pub fn builtin(
        id: &str,
        code: &str,
        severity: Severity,
        message: &str,
        check: LineCheck,
    ) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            severity,
            message: message.to_string(),
            matcher: Matcher::Line(check),
        }
    }

    pub fn pattern(
        id: impl Into<String>,
        code: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        regex: Regex,
        target: MatchTarget,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            severity,
            message: message.into(),
            matcher: Matcher::Pattern { regex, target },
        }
    }
}

/// Mapping from rule identifier to rule definition, iterated in identifier order.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh registry holding every built-in rule.
    pub fn with_builtins() -> Self {
        Self {
            rules: rules::builtin_rules()
                .into_iter()
                .map(|rule| (rule.id.clone(), rule))
                .collect(),
        }
    }

    /// Add a rule. Fails without modifying the registry if the id is taken.
    pub fn register(&mut self, rule: Rule) -> Result<(), DuplicateRuleError> {
        if self.rules.contains_key(&rule.id) {
            return Err(DuplicateRuleError { id: rule.id });
        }
        self.rules.insert(rule.id.clone(), rule);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&Rule, UnknownRuleError> {
        self.rules
            .get(id)
            .ok_or_else(|| UnknownRuleError { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Process-wide registry of built-in rules, initialized on first use.
pub fn builtin_registry() -> &'static RuleRegistry {
    static BUILTINS: OnceLock<RuleRegistry> = OnceLock::new();
    BUILTINS.get_or_init(RuleRegistry::with_builtins)
}
