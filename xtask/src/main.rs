//! Developer tasks (schema generation, conformance checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(styleguard_types::StyleguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    styleguard_settings::config_json_schema()
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "styleguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "styleguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Fails when any schema in `schemas/` is missing or differs from the generated one.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the styleguard binary on tests/fixtures and validate reports");
    eprintln!("  explain-coverage  Validate all rule IDs and codes have explanations");
}

/// Repo-relative, forward slashes, no `..`. `<stdin>` is the only non-file path.
fn is_clean_path(path: &str) -> bool {
    if path == "<stdin>" {
        return true;
    }
    !(path.starts_with('/')
        || path.contains('\\')
        || path.split('/').any(|seg| seg == "..")
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Run the built binary against every fixture directory and check each report
/// against the generated report schema and path hygiene.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema())?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let bin = project_root().join("target").join("debug").join("styleguard");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "styleguard binary not found at {}.\n\
            Run `cargo build -p styleguard-cli` first.",
            bin.display()
        );
    }

    let fixtures_dir = project_root().join("tests").join("fixtures");
    let mut errors = Vec::new();
    let mut fixture_count = 0;

    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    for fixture_dir in entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&bin)
            .arg("--root")
            .arg(&fixture_dir)
            .arg("check")
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run styleguard on fixture '{}'", name))?;

        // 0 and 2 both write a report; 1 means the run itself failed.
        if output.status.code() == Some(1) || !report_out.exists() {
            errors.push(format!(
                "fixture '{}': styleguard exited with {:?}: {}",
                name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_out)?)
            .with_context(|| format!("Failed to parse report for fixture '{}'", name))?;

        for err in compiled.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }

        if let Some(files) = report.get("files").and_then(|v| v.as_array()) {
            for (i, file) in files.iter().enumerate() {
                if let Some(path) = file.get("path").and_then(|v| v.as_str())
                    && !is_clean_path(path)
                {
                    errors.push(format!(
                        "fixture '{}': files[{}].path '{}' is not clean",
                        name, i, path
                    ));
                }
            }
        }

        fixture_count += 1;
        println!("  ✓ fixture '{}' produces a valid report", name);
    }

    if fixture_count == 0 && errors.is_empty() {
        bail!("No fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", fixture_count);
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    use styleguard_types::explain;

    let rule_ids = explain::all_rule_ids();
    let codes = explain::all_codes();
    let mut errors = Vec::new();

    for (kind, ids) in [("Rule ID", rule_ids), ("Code", codes)] {
        for id in ids {
            match explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", rule_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", styleguard_types::SCHEMA_REPORT_V1);
            println!("{}", styleguard_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
