use crate::{RenderableData, RenderableReport, RenderableVerdictStatus};

/// Human-readable output: a path header per file with violations, one
/// `<line>:<column> [<severity>] <message>` line per violation, then a summary.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for file in report.files.iter().filter(|f| !f.findings.is_empty()) {
        out.push_str(&file.path);
        out.push('\n');
        for f in &file.findings {
            out.push_str(&format!(
                "{}:{} [{}] {}\n",
                f.location.line,
                f.location.col,
                f.severity.as_str(),
                f.message
            ));
        }
        out.push('\n');
    }

    out.push_str(&summary_line(report.verdict, &report.data));
    out.push('\n');
    out
}

pub(crate) fn summary_line(verdict: RenderableVerdictStatus, data: &RenderableData) -> String {
    let verdict = match verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let files = plural(data.files_scanned, "file");

    let mut line = if data.violations_total() == 0 {
        format!("{verdict}: no violations in {files}")
    } else {
        format!(
            "{verdict}: {} ({}, {}) in {files}",
            plural(data.violations_total(), "violation"),
            plural(data.errors, "error"),
            plural(data.warnings, "warning"),
        )
    };
    if data.suppressed > 0 {
        line.push_str(&format!(", {} suppressed", data.suppressed));
    }
    line
}

fn plural(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
