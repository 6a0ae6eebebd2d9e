//! Render use cases: any output format from in-memory or saved reports.

use crate::report::{parse_report_json, to_renderable};
use styleguard_render::OutputFormat;
use styleguard_types::StyleguardReport;

pub fn render_report(report: &StyleguardReport, format: OutputFormat) -> String {
    styleguard_render::render(&to_renderable(report), format)
}

/// Re-render the JSON text of a saved report.
pub fn run_render(report_json: &str, format: OutputFormat) -> anyhow::Result<String> {
    let report = parse_report_json(report_json)?;
    Ok(render_report(&report, format))
}
