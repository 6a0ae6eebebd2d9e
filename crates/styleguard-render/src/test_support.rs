use crate::{
    RenderableData, RenderableFile, RenderableFinding, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};

fn finding(
    severity: RenderableSeverity,
    rule_id: &str,
    code: &str,
    message: &str,
    line: u32,
    col: u32,
    snippet: &str,
) -> RenderableFinding {
    RenderableFinding {
        severity,
        rule_id: rule_id.to_string(),
        code: code.to_string(),
        message: message.to_string(),
        location: RenderableLocation {
            path: "src/app.js".to_string(),
            line,
            col,
        },
        snippet: snippet.to_string(),
    }
}

/// Two files, one of them failing with a warning and an error.
pub(crate) fn sample_report() -> RenderableReport {
    RenderableReport {
        verdict: RenderableVerdictStatus::Fail,
        files: vec![
            RenderableFile {
                path: "src/app.js".to_string(),
                verdict: RenderableVerdictStatus::Fail,
                findings: vec![
                    finding(
                        RenderableSeverity::Warning,
                        "style.no_trailing_whitespace",
                        "trailing_whitespace",
                        "line ends with whitespace",
                        2,
                        11,
                        "  ",
                    ),
                    finding(
                        RenderableSeverity::Error,
                        "style.strict_equality",
                        "loose_equality",
                        "use `===` instead of `==`",
                        4,
                        7,
                        "==",
                    ),
                ],
            },
            RenderableFile {
                path: "src/clean.js".to_string(),
                verdict: RenderableVerdictStatus::Pass,
                findings: Vec::new(),
            },
        ],
        data: RenderableData {
            files_scanned: 2,
            lines_scanned: 12,
            warnings: 1,
            errors: 1,
            suppressed: 1,
        },
    }
}
