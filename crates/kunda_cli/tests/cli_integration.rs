//! End-to-end tests of the `kunda` binary.

use std::io::Write;

use assert_cmd::Command;

fn kunda() -> Command {
    let mut cmd = Command::cargo_bin("kunda").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prompts_and_reads_stdin() {
    let output = kunda().write_stdin("Li,14,14,9\n").output().unwrap();
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.starts_with("Enter Lagna (e.g., Li,14,14,9 or 14,14,9): "), "{out}");
    assert!(out.contains("3. Kunda Degrees: 253.102500 (SA)"), "{out}");
    assert!(out.contains("Target Sign | Degree Adjustment | Time Adjustment"));
}

#[test]
fn positional_argument_skips_prompt() {
    let output = kunda().arg("14,14,9").output().unwrap();
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(!out.contains("Enter Lagna"));
    assert!(out.contains("2. Lagna Decimal Degrees: 14.235833"), "{out}");
    assert!(out.contains("3. Kunda Degrees: 73.102500 (GE)"), "{out}");
    assert!(out.contains("Possible Kunda placements for this Lagna: AR, LE, LI, SA"));
}

#[test]
fn correct_placement_verdict() {
    let output = kunda().arg("Ar,15,0,0").output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Kunda is correctly placed within the target signs."));
}

#[test]
fn wrong_field_count_fails() {
    let output = kunda().write_stdin("Li,14\n").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err = stderr_of(&output);
    assert!(err.starts_with("Error: invalid input format"), "{err}");
    assert!(!stdout_of(&output).contains("Calculation Steps"));
}

#[test]
fn non_numeric_fails() {
    let output = kunda().arg("Li,abc,14,9").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: invalid degrees value 'abc'"));
}

#[test]
fn empty_stdin_fails() {
    let output = kunda().write_stdin("").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: invalid input format"));
}

#[test]
fn unknown_sign_warns_when_lenient() {
    let output = kunda().arg("Zz,14,14,9").output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("unrecognized sign 'ZZ', Mesha assumed"));
    assert!(stderr_of(&output).contains("unrecognized sign code"));
}

#[test]
fn strict_sign_flag_rejects() {
    let output = kunda().args(["--strict-sign", "Zz,14,14,9"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: unknown sign code 'ZZ'"));
}

#[test]
fn negative_degrees_accepted_as_argument() {
    let output = kunda().arg("-1,0,0").output().unwrap();
    assert!(output.status.success(), "{}", stderr_of(&output));
    // -1 * 81 = -81 -> 279 (Makara)
    assert!(stdout_of(&output).contains("3. Kunda Degrees: 279.000000 (CP)"));
}

#[test]
fn config_file_applies_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "range-policy = \"strict\"").unwrap();
    let output = kunda()
        .arg("--config")
        .arg(file.path())
        .arg("Li,45,0,0")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: degrees out of range: 45"));
}

#[test]
fn missing_config_file_fails() {
    let output = kunda()
        .args(["--config", "/nonexistent/kunda.toml", "Li,14,14,9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: config error: cannot read"));
}

#[test]
fn nan_lagna_prints_without_suggestion() {
    let output = kunda().arg("NaN,0,0").output().unwrap();
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("3. Kunda Degrees: NaN (n/a)"), "{out}");
    assert!(out.contains("minutes and NaN seconds"), "{out}");
    assert!(!out.contains("Nearest target"), "{out}");
}

#[test]
fn nan_lagna_rejected_with_strict_range() {
    let output = kunda().args(["--strict-range", "NaN,0,0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("Error:"));
}

#[test]
fn rectified_lagna_rounded_to_second() {
    let output = kunda().arg("TA,0,23,0").output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("rectified Lagna TA 1°40'0''"));
}
