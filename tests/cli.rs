use std::process::Command;

fn run(bin: &str, args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (
        output.status.code(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn submit_wrong_arity_prints_usage() {
    let usage = "Usage: submit <problem_id> <code_file> <token>\n";
    for args in [
        &[] as &[&str],
        &["1000"],
        &["1000", "solution.cpp"],
        &["1000", "solution.cpp", "abc123", "extra"],
        &["1000", "solution.cpp", "abc123", "--help"],
        &["--help"],
        &["-V"],
    ] {
        assert_eq!(
            run(env!("CARGO_BIN_EXE_submit"), args),
            (Some(1), usage.to_owned()),
            "{args:?}"
        );
    }
}

#[test]
fn status_wrong_arity_prints_usage() {
    let usage = "Usage: status <submission_id> <token>\n";
    for args in [
        &[] as &[&str],
        &["42"],
        &["42", "abc123", "extra"],
        &["42", "abc123", "--help"],
        &["-h"],
        &["--"],
    ] {
        assert_eq!(
            run(env!("CARGO_BIN_EXE_status"), args),
            (Some(1), usage.to_owned()),
            "{args:?}"
        );
    }
}

#[test]
fn submit_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("solution.cpp");
    let (code, stdout) = run(
        env!("CARGO_BIN_EXE_submit"),
        &["1000", missing.to_str().unwrap(), "-h"],
    );
    assert_eq!(code, Some(1));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert!(lines[0].starts_with("Error reading file: "), "{stdout}");
    assert_eq!(lines[1], "Submission failed");
}
