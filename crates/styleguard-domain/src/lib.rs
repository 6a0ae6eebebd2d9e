//! Pure rule evaluation (no IO).
//!
//! Input: a text buffer, a rule registry and an effective configuration.
//! Output: violations + pass/fail status + summary counts.

#![forbid(unsafe_code)]

pub mod policy;
pub mod registry;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, scan, validate_config, ScanInput};
pub use registry::{
    builtin_registry, DuplicateRuleError, Hit, MatchTarget, Matcher, Rule, RuleContext,
    RuleRegistry, UnknownRuleError,
};
