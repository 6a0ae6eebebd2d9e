use std::process::Command;

#[test]
fn xtask_help_runs() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe).arg("help").output().expect("run xtask");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn xtask_explain_coverage_passes() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("explain-coverage")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("8 rule IDs have explanations"));
}

#[test]
fn xtask_print_schema_ids() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("print-schema-ids")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "styleguard.report.v1\nstyleguard.config.v1\n"
    );
}

#[test]
fn xtask_rejects_unknown_command() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe).arg("frobnicate").output().expect("run xtask");
    assert!(!output.status.success());
}
