use std::process::Command;

use pretty_assertions::assert_eq;

fn sqlcmdvars() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sqlcmdvars"))
}

#[test]
fn translates_script() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deploy.sql");
    let output = dir.path().join("plain.sql");
    std::fs::write(
        &input,
        ":setvar DB \"mydb\"\nSELECT * FROM $(DB).table;\n:on error exit\n",
    )
    .unwrap();

    let run = sqlcmdvars()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(run.status.success());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "SELECT * FROM mydb.table;\r\n"
    );
    let log = String::from_utf8_lossy(&run.stderr);
    assert!(log.contains("found variable"), "stderr: {log}");
    assert!(log.contains("\"DB\""), "stderr: {log}");
}

#[test]
fn missing_output_flag_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deploy.sql");
    std::fs::write(&input, "SELECT 1;\n").unwrap();

    let run = sqlcmdvars().arg("--input").arg(&input).output().unwrap();

    assert!(!run.status.success());
    let err = String::from_utf8_lossy(&run.stderr);
    assert!(err.contains("--output"), "stderr: {err}");
}

#[test]
fn missing_both_flags_names_both() {
    let run = sqlcmdvars().output().unwrap();

    assert!(!run.status.success());
    let err = String::from_utf8_lossy(&run.stderr);
    assert!(err.contains("--input"), "stderr: {err}");
    assert!(err.contains("--output"), "stderr: {err}");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.sql");
    let output = dir.path().join("plain.sql");

    let run = sqlcmdvars()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!run.status.success());
    assert!(!output.exists());
    let err = String::from_utf8_lossy(&run.stderr);
    assert!(err.contains("opening input"), "stderr: {err}");
}
