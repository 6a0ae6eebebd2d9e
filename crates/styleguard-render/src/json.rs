use crate::RenderableReport;
use serde_json::{json, Value};

/// One JSON object per violation, in report order.
pub fn render_json_records(report: &RenderableReport) -> String {
    let records: Vec<Value> = report
        .findings()
        .map(|f| {
            json!({
                "path": f.location.path,
                "line": f.location.line,
                "column": f.location.col,
                "severity": f.severity.as_str(),
                "rule_id": f.rule_id,
                "code": f.code,
                "message": f.message,
                "snippet": f.snippet,
            })
        })
        .collect();

    format!("{:#}\n", Value::Array(records))
}
