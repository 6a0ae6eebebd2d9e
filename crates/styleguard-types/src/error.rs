use thiserror::Error;

/// Problems with what the caller asked for, detected before any output is produced.
///
/// A scan that hits one of these is aborted; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unsupported output format: {0} (expected text|json|markdown|github)")]
    UnsupportedFormat(String),

    #[error("unknown rule identifier: {0}")]
    UnknownRule(String),

    #[error("invalid severity for {rule_id}: {value} (expected warning|error)")]
    InvalidSeverity { rule_id: String, value: String },

    #[error("invalid pattern for {rule_id}: {reason}")]
    InvalidPattern { rule_id: String, reason: String },

    #[error("invalid value for {key}: {value} ({expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
