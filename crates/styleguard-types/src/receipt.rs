use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for styleguard reports.
pub const SCHEMA_REPORT_V1: &str = "styleguard.report.v1";

/// Severity is intentionally small: a style breach either warns or fails the build.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Parse a user-supplied severity. `warn` is accepted as an alias of `warning`.
    pub fn parse(v: &str) -> Option<Severity> {
        match v {
            "warning" | "warn" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a violation inside its buffer. Both fields are 1-based; `column`
/// counts characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub rule_id: String,
    pub code: String,
    pub severity: Severity,
    pub message: String,
    pub location: Location,

    /// The offending text, taken verbatim from the source line.
    pub snippet: String,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `rule_id + code + path + line + snippet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Pass,
    Fail,
}

impl ScanStatus {
    /// A collection fails when any member fails.
    pub fn combine(self, other: ScanStatus) -> ScanStatus {
        match (self, other) {
            (ScanStatus::Pass, ScanStatus::Pass) => ScanStatus::Pass,
            _ => ScanStatus::Fail,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut counts = SeverityCounts::default();
        for v in violations {
            counts.add(v.severity);
        }
        counts
    }

    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Warning => self.warning += 1,
            Severity::Error => self.error += 1,
        }
    }

    pub fn merge(&mut self, other: SeverityCounts) {
        self.warning += other.warning;
        self.error += other.error;
    }

    pub fn total(&self) -> u32 {
        self.warning + self.error
    }
}

/// Outcome of scanning one buffer, as it appears in the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileResult {
    pub path: RepoPath,
    pub status: ScanStatus,
    pub lines_scanned: u32,
    #[serde(default)]
    pub suppressed: u32,
    pub violations: Vec<Violation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Styleguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct StyleguardData {
    pub profile: String,
    pub rules_active: Vec<String>,
    pub files_scanned: u32,
    pub lines_scanned: u32,
    pub violations_total: u32,
    pub suppressed: u32,
    pub counts: SeverityCounts,
}

/// Envelope written by `styleguard check --report-out`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleguardReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: ScanStatus,
    pub files: Vec<FileResult>,
    pub data: StyleguardData,
}
