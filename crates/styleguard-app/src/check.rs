//! The `check` use case: load sources, evaluate rules and produce a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use styleguard_domain::report::ScanResult;
use styleguard_domain::{RuleRegistry, ScanInput};
use styleguard_repo::{SourceFile, SourceFilter};
use styleguard_settings::{Overrides, ResolvedConfig, StyleguardConfigV1};
use styleguard_types::{
    ConfigurationError, ScanStatus, SeverityCounts, StyleguardData, StyleguardReport, ToolMeta,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// Which buffers to scan.
#[derive(Clone, Debug)]
pub enum SourceSelection {
    /// Walk the root with the configured include/exclude globs.
    Discover,
    /// Named files or directories, plus an optional stdin buffer scanned first.
    Explicit {
        paths: Vec<Utf8PathBuf>,
        stdin: Option<String>,
    },
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Root that relative paths and discovery globs are resolved against.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub sources: SourceSelection,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: StyleguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse config text, treating blank input as "no config file".
pub fn load_config(config_text: &str) -> anyhow::Result<StyleguardConfigV1> {
    if config_text.trim().is_empty() {
        return Ok(StyleguardConfigV1::default());
    }
    styleguard_settings::parse_config_toml(config_text).context("parse config")
}

/// Run the check use case: parse config, build the registry, load sources, scan, report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = load_config(input.config_text)?;
    let registry = styleguard_settings::build_registry(&cfg).context("build rule registry")?;
    let resolved = styleguard_settings::resolve_config(&cfg, input.overrides.clone())
        .context("resolve config")?;
    styleguard_domain::validate_config(&registry, &resolved.effective)?;

    debug!(
        profile = %resolved.effective.profile,
        rules = resolved.effective.active_rule_ids().len(),
        "configuration resolved"
    );

    let sources = load_sources(input.repo_root, &resolved, input.sources)?;
    let results = scan_sources(&registry, &resolved, &sources)?;

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(&resolved, results, started_at, finished_at);

    info!(
        files = report.data.files_scanned,
        violations = report.data.violations_total,
        suppressed = report.data.suppressed,
        status = ?report.status,
        "check complete"
    );

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn load_sources(
    repo_root: &Utf8Path,
    resolved: &ResolvedConfig,
    selection: SourceSelection,
) -> anyhow::Result<Vec<SourceFile>> {
    let filter = SourceFilter::new(&resolved.include, &resolved.exclude)?;

    let (paths, stdin) = match selection {
        SourceSelection::Discover => {
            let paths = styleguard_repo::discover_sources(repo_root, &filter)
                .context("discover sources")?;
            (paths, None)
        }
        SourceSelection::Explicit { paths, stdin } => {
            let paths = styleguard_repo::expand_paths(repo_root, &paths, &filter)
                .context("expand paths")?;
            (paths, stdin)
        }
    };

    let mut sources = Vec::with_capacity(paths.len() + 1);
    if let Some(text) = stdin {
        sources.push(SourceFile {
            path: styleguard_types::RepoPath::stdin(),
            text,
        });
    }
    for loaded in styleguard_repo::read_sources(repo_root, &paths) {
        let file =
            loaded.inspect_err(|err| warn!(error = %format!("{err:#}"), "unreadable source"))?;
        sources.push(file);
    }

    debug!(files = sources.len(), "sources loaded");
    Ok(sources)
}

/// Scan every buffer in parallel. Results keep input order.
fn scan_sources(
    registry: &RuleRegistry,
    resolved: &ResolvedConfig,
    sources: &[SourceFile],
) -> Result<Vec<ScanResult>, ConfigurationError> {
    sources
        .par_iter()
        .map(|source| {
            let result = styleguard_domain::evaluate(
                registry,
                &resolved.effective,
                &ScanInput {
                    path: &source.path,
                    text: &source.text,
                },
            )?;
            debug!(
                path = %source.path,
                violations = result.violations.len(),
                "scanned"
            );
            Ok(result)
        })
        .collect()
}

fn build_report(
    resolved: &ResolvedConfig,
    results: Vec<ScanResult>,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> StyleguardReport {
    let mut status = ScanStatus::Pass;
    let mut counts = SeverityCounts::default();
    let mut lines_scanned = 0u32;
    let mut suppressed = 0u32;

    for r in &results {
        status = status.combine(r.status);
        counts.merge(r.counts);
        lines_scanned += r.lines_scanned;
        suppressed += r.suppressed;
    }

    let data = StyleguardData {
        profile: resolved.effective.profile.clone(),
        rules_active: resolved.effective.active_rule_ids(),
        files_scanned: results.len() as u32,
        lines_scanned,
        violations_total: counts.total(),
        suppressed,
        counts,
    };

    StyleguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "styleguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        status,
        files: results.into_iter().map(ScanResult::into_file_result).collect(),
        data,
    }
}

/// Map status to exit code: 0 = pass, 2 = fail.
pub fn status_exit_code(status: ScanStatus) -> i32 {
    match status {
        ScanStatus::Pass => 0,
        ScanStatus::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguard_types::{ids, Severity};
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(root: &Utf8Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn stdin_only(text: &str) -> SourceSelection {
        SourceSelection::Explicit {
            paths: Vec::new(),
            stdin: Some(text.to_string()),
        }
    }

    #[test]
    fn discovers_and_scans_in_sorted_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root, "src/b.js", "var x = 1;  \n");
        write_file(&root, "src/a.js", "var y = 2;\n");
        write_file(&root, "node_modules/lib/index.js", "if(x) {}\n");

        let out = run_check(CheckInput {
            repo_root: &root,
            config_text: "",
            overrides: Overrides::default(),
            sources: SourceSelection::Discover,
        })
        .expect("check");

        let report = out.report;
        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.js", "src/b.js"]);
        assert_eq!(report.status, ScanStatus::Fail);
        assert_eq!(report.data.files_scanned, 2);
        assert_eq!(report.data.lines_scanned, 2);
        assert_eq!(report.data.violations_total, 1);
        assert_eq!(report.data.counts.warning, 1);
        assert_eq!(report.files[0].status, ScanStatus::Pass);
        assert_eq!(
            report.files[1].violations[0].rule_id,
            ids::RULE_NO_TRAILING_WHITESPACE
        );
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.data.profile, "default");
    }

    #[test]
    fn empty_selection_passes() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let out = run_check(CheckInput {
            repo_root: &root,
            config_text: "",
            overrides: Overrides::default(),
            sources: SourceSelection::Discover,
        })
        .expect("check");
        assert_eq!(out.report.status, ScanStatus::Pass);
        assert!(out.report.files.is_empty());
        assert_eq!(status_exit_code(out.report.status), 0);
    }

    #[test]
    fn stdin_buffer_is_scanned_with_pseudo_path() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let out = run_check(CheckInput {
            repo_root: &root,
            config_text: "",
            overrides: Overrides {
                rules: Some(vec![ids::RULE_CONTROL_FLOW_SPACING.to_string()]),
                ..Default::default()
            },
            sources: stdin_only("if(x) foo();\n"),
        })
        .expect("check");

        assert_eq!(out.report.files.len(), 1);
        let file = &out.report.files[0];
        assert_eq!(file.path.as_str(), "<stdin>");
        assert_eq!(file.violations.len(), 1);
        assert_eq!(file.violations[0].location.line, 1);
        assert_eq!(status_exit_code(out.report.status), 2);
        assert_eq!(
            out.report.data.rules_active,
            vec![ids::RULE_CONTROL_FLOW_SPACING.to_string()]
        );
    }

    #[test]
    fn fail_on_error_lets_warnings_pass() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let out = run_check(CheckInput {
            repo_root: &root,
            config_text: "fail_on = \"error\"\n",
            overrides: Overrides::default(),
            sources: stdin_only("var a = 1;   \n"),
        })
        .expect("check");
        assert_eq!(out.report.data.violations_total, 1);
        assert_eq!(out.report.status, ScanStatus::Pass);
        assert_eq!(out.resolved_config.effective.fail_on, Severity::Error);
    }

    #[test]
    fn unknown_rule_aborts_with_configuration_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = run_check(CheckInput {
            repo_root: &root,
            config_text: "rules = [\"style.no_such_rule\"]\n",
            overrides: Overrides::default(),
            sources: SourceSelection::Discover,
        })
        .expect_err("unknown rule");
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::UnknownRule(
                "style.no_such_rule".to_string()
            ))
        );
    }

    #[test]
    fn unknown_rule_in_severity_overrides_is_rejected() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = run_check(CheckInput {
            repo_root: &root,
            config_text: "[severity_overrides]\n\"style.typo\" = \"error\"\n",
            overrides: Overrides::default(),
            sources: stdin_only("ok();\n"),
        })
        .expect_err("unknown rule");
        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::UnknownRule(id)) if id == "style.typo"
        ));
    }

    #[test]
    fn custom_rules_from_config_are_applied() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let config = r#"
rules = ["custom.no_debugger"]

[[custom_rules]]
id = "custom.no_debugger"
pattern = "\\bdebugger\\b"
target = "code"
severity = "error"
message = "remove debugger statements"
"#;
        let out = run_check(CheckInput {
            repo_root: &root,
            config_text: config,
            overrides: Overrides::default(),
            sources: stdin_only("// debugger\ndebugger;\n"),
        })
        .expect("check");
        let violations = &out.report.files[0].violations;
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 2);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].code, ids::CODE_PATTERN_MATCH);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = run_check(CheckInput {
            repo_root: &root,
            config_text: "",
            overrides: Overrides::default(),
            sources: SourceSelection::Explicit {
                paths: vec![Utf8PathBuf::from("missing.js")],
                stdin: None,
            },
        })
        .expect_err("missing file");
        assert!(format!("{err:#}").contains("missing.js"));
    }

    #[test]
    fn invalid_config_is_reported_with_context() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = run_check(CheckInput {
            repo_root: &root,
            config_text: "profile = [",
            overrides: Overrides::default(),
            sources: SourceSelection::Discover,
        })
        .expect_err("bad toml");
        assert!(format!("{err:#}").starts_with("parse config"));
    }
}
