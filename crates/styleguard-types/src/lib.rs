//! Stable DTOs and IDs used across the styleguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes for the built-in rules
//! - canonical repo-relative path handling
//! - explain registry for remediation guidance
//! - the configuration error shared by settings, engine and renderers

#![forbid(unsafe_code)]

pub mod error;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use error::ConfigurationError;
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::RepoPath;
pub use receipt::{
    FileResult, Location, ScanStatus, Severity, SeverityCounts, StyleguardData, StyleguardReport,
    ToolMeta, Violation, SCHEMA_REPORT_V1,
};
