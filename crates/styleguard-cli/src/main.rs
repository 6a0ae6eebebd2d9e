//! CLI entry point for styleguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `styleguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use styleguard_app::{
    format_explanation, format_not_found, format_rules, render_report, run_check, run_explain,
    run_render, run_rules, serialize_report, status_exit_code, CheckInput, ExplainOutput,
    SourceSelection,
};
use styleguard_render::OutputFormat;
use styleguard_settings::Overrides;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "styleguard",
    version,
    about = "Line-oriented style linter for JavaScript sources"
)]
struct Cli {
    /// Root directory; relative paths, discovery and the config file resolve against it.
    #[arg(long, default_value = ".", global = true)]
    root: Utf8PathBuf,

    /// Path to the styleguard config TOML, relative to the root.
    #[arg(long, default_value = "styleguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (default|strict|relaxed).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Lowest severity that fails the check (warning|error).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// More log output on stderr (-v info, -vv debug). STYLEGUARD_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan files and report style violations.
    Check {
        /// Files or directories to scan; `-` reads stdin. Defaults to discovery under the root.
        paths: Vec<Utf8PathBuf>,

        /// Output format: text, json, markdown (md), github (gha).
        #[arg(long, default_value = "text")]
        format: String,

        /// Where to write the rendered output (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Where to write the JSON report envelope.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Only run this rule (repeatable).
        #[arg(long = "rule", value_name = "RULE_ID")]
        rules: Vec<String>,

        /// Maximum line length in characters.
        #[arg(long)]
        max_line_length: Option<u32>,
    },

    /// List registered rules with their default severity.
    Rules,

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g., "style.strict_equality") or code (e.g., "loose_equality").
        identifier: String,
    },

    /// Re-render a saved JSON report.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format: text, json, markdown (md), github (gha).
        #[arg(long, default_value = "text")]
        format: String,

        /// Where to write the output (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("styleguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("STYLEGUARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Check {
            paths,
            format,
            output,
            report_out,
            rules,
            max_line_length,
        } => {
            let format: OutputFormat = format.parse()?;
            let overrides = Overrides {
                profile: cli.profile.clone(),
                fail_on: cli.fail_on.clone(),
                rules: (!rules.is_empty()).then(|| rules.clone()),
                max_line_length: *max_line_length,
            };
            cmd_check(
                &cli,
                paths,
                format,
                output.as_deref(),
                report_out.as_deref(),
                overrides,
            )
        }
        Commands::Rules => cmd_rules(&cli),
        Commands::Explain { identifier } => Ok(cmd_explain(identifier)),
        Commands::Render {
            report,
            format,
            output,
        } => {
            let format: OutputFormat = format.parse()?;
            cmd_render(report, format, output.as_deref())
        }
    }
}

/// Missing config file is allowed (defaults apply).
fn read_config(cli: &Cli) -> anyhow::Result<String> {
    let path = cli.root.join(&cli.config);
    if !path.exists() {
        debug!(path = %path, "no config file, using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(&path).with_context(|| format!("read config: {path}"))
}

fn cmd_check(
    cli: &Cli,
    paths: &[Utf8PathBuf],
    format: OutputFormat,
    output: Option<&Utf8Path>,
    report_out: Option<&Utf8Path>,
    overrides: Overrides,
) -> anyhow::Result<i32> {
    if !cli.root.is_dir() {
        anyhow::bail!("root does not exist: {}", cli.root);
    }
    let config_text = read_config(cli)?;

    let sources = if paths.is_empty() {
        SourceSelection::Discover
    } else {
        let stdin = if paths.iter().any(|p| p.as_str() == "-") {
            let file = styleguard_repo::read_stdin_source(std::io::stdin().lock())?;
            Some(file.text)
        } else {
            None
        };
        SourceSelection::Explicit {
            paths: paths.iter().filter(|p| p.as_str() != "-").cloned().collect(),
            stdin,
        }
    };

    let out = run_check(CheckInput {
        repo_root: &cli.root,
        config_text: &config_text,
        overrides,
        sources,
    })?;

    if let Some(path) = report_out {
        let bytes = serialize_report(&out.report)?;
        write_file(path, &bytes).context("write report json")?;
    }

    let rendered = render_report(&out.report, format);
    emit(output, &rendered)?;

    Ok(status_exit_code(out.report.status))
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<i32> {
    let config_text = read_config(cli)?;
    let rules = run_rules(&config_text)?;
    print!("{}", format_rules(&rules));
    Ok(0)
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            1
        }
    }
}

fn cmd_render(
    report_path: &Utf8Path,
    format: OutputFormat,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let rendered = run_render(&report_text, format)?;
    emit(output, &rendered)?;
    Ok(0)
}

fn emit(output: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => write_file(path, text.as_bytes()).context("write output"),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {path}"))?;
    Ok(())
}
