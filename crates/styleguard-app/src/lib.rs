//! Use case orchestration for styleguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings,
//! repo, domain and render layers. The CLI crate depends on this; it only handles
//! argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod rules;

pub use check::{
    load_config, run_check, status_exit_code, CheckInput, CheckOutput, SourceSelection,
};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{render_report, run_render};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use rules::{format_rules, run_rules, RuleSummary};
