use crate::{RenderableReport, RenderableSeverity};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::[{rule_id}:{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .findings()
        .map(|f| {
            let level = match f.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
            };
            let message = escape_data(&format!("[{}:{}] {}", f.rule_id, f.code, f.message));
            format!(
                "::{} file={},line={},col={}::{}",
                level,
                escape_property(&f.location.path),
                f.location.line,
                f.location.col,
                message
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
