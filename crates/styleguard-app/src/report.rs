use anyhow::Context;
use styleguard_render::{
    RenderableData, RenderableFile, RenderableFinding, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use styleguard_types::{
    FileResult, ScanStatus, Severity, StyleguardReport, Violation, SCHEMA_REPORT_V1,
};

/// Parse a report previously written with `--report-out`.
pub fn parse_report_json(text: &str) -> anyhow::Result<StyleguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse styleguard report")
}

pub fn serialize_report(report: &StyleguardReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &StyleguardReport) -> RenderableReport {
    RenderableReport {
        verdict: renderable_status(report.status),
        files: report.files.iter().map(renderable_file).collect(),
        data: RenderableData {
            files_scanned: report.data.files_scanned,
            lines_scanned: report.data.lines_scanned,
            warnings: report.data.counts.warning,
            errors: report.data.counts.error,
            suppressed: report.data.suppressed,
        },
    }
}

fn renderable_status(status: ScanStatus) -> RenderableVerdictStatus {
    match status {
        ScanStatus::Pass => RenderableVerdictStatus::Pass,
        ScanStatus::Fail => RenderableVerdictStatus::Fail,
    }
}

fn renderable_file(file: &FileResult) -> RenderableFile {
    RenderableFile {
        path: file.path.as_str().to_string(),
        verdict: renderable_status(file.status),
        findings: file
            .violations
            .iter()
            .map(|v| renderable_finding(file.path.as_str(), v))
            .collect(),
    }
}

fn renderable_finding(path: &str, v: &Violation) -> RenderableFinding {
    RenderableFinding {
        severity: match v.severity {
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        rule_id: v.rule_id.clone(),
        code: v.code.clone(),
        message: v.message.clone(),
        location: RenderableLocation {
            path: path.to_string(),
            line: v.location.line,
            col: v.location.column,
        },
        snippet: v.snippet.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguard_types::{
        ids, Location, RepoPath, SeverityCounts, StyleguardData, ToolMeta,
    };
    use time::macros::datetime;

    fn sample_report() -> StyleguardReport {
        let violation = Violation {
            rule_id: ids::RULE_STRICT_EQUALITY.to_string(),
            code: ids::CODE_LOOSE_EQUALITY.to_string(),
            severity: Severity::Error,
            message: "use `===` instead of `==`".to_string(),
            location: Location { line: 3, column: 7 },
            snippet: "==".to_string(),
            fingerprint: None,
        };
        StyleguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "styleguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            status: ScanStatus::Fail,
            files: vec![FileResult {
                path: RepoPath::new("src/app.js"),
                status: ScanStatus::Fail,
                lines_scanned: 10,
                suppressed: 0,
                violations: vec![violation],
            }],
            data: StyleguardData {
                profile: "default".to_string(),
                rules_active: vec![ids::RULE_STRICT_EQUALITY.to_string()],
                files_scanned: 1,
                lines_scanned: 10,
                violations_total: 1,
                suppressed: 0,
                counts: SeverityCounts {
                    warning: 0,
                    error: 1,
                },
            },
        }
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\"started_at\": \"2026-01-02T03:04:05Z\""));
        assert_eq!(parse_report_json(&text).expect("parse"), report);
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema":"other.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_keeps_paths_and_counts() {
        let renderable = to_renderable(&sample_report());
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(renderable.data.errors, 1);
        let finding = renderable.findings().next().expect("finding");
        assert_eq!(finding.location.path, "src/app.js");
        assert_eq!((finding.location.line, finding.location.col), (3, 7));
        assert_eq!(finding.severity, RenderableSeverity::Error);
    }
}
