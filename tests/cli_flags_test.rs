use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_stroke-risk");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("stroke-risk {}", env!("CARGO_PKG_VERSION")),
        "Version output should match Cargo.toml"
    );
}

#[test]
fn test_short_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_stroke-risk");

    let output = Command::new(binary_path)
        .arg("-V")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("stroke-risk "));
}

#[test]
fn test_help_flag_prints_usage() {
    let binary_path = env!("CARGO_BIN_EXE_stroke-risk");

    let output = Command::new(binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url <URL>"));
    assert!(stdout.contains("STROKE_RISK_URL"));
}

#[test]
fn test_missing_url_value_fails() {
    let binary_path = env!("CARGO_BIN_EXE_stroke-risk");

    let output = Command::new(binary_path)
        .arg("--url")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success(), "--url without a value should fail");
}

#[test]
fn test_health_flag_reports_offline_service() {
    let binary_path = env!("CARGO_BIN_EXE_stroke-risk");

    let output = Command::new(binary_path)
        .args(["--health", "--url", "http://127.0.0.1:1"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http://127.0.0.1:1 is offline"));
}
