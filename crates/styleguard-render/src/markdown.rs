use crate::text::summary_line;
use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

/// Markdown suitable for a pull request comment.
pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Styleguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files scanned: {}\n- Lines scanned: {}\n- Violations: {} ({} errors, {} warnings)\n",
        verdict,
        report.data.files_scanned,
        report.data.lines_scanned,
        report.data.violations_total(),
        report.data.errors,
        report.data.warnings,
    ));
    if report.data.suppressed > 0 {
        out.push_str(&format!("- Suppressed: {}\n", report.data.suppressed));
    }
    out.push('\n');

    if report.data.violations_total() == 0 {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in report.findings() {
        let sev = match f.severity {
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {} (`{}`:{}:{})\n",
            sev, f.rule_id, f.code, f.message, f.location.path, f.location.line, f.location.col
        ));
        if !f.snippet.trim().is_empty() {
            out.push_str(&format!("  - snippet: `{}`\n", f.snippet.trim()));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "_{}_\n",
        summary_line(report.verdict, &report.data)
    ));
    out
}
