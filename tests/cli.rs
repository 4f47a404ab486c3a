use assert_cmd::Command;

#[test]
fn rejects_non_tty_stdin() -> Result<(), Box<dyn std::error::Error>> {
    // assert_cmd pipes stdin, so the binary never sees a terminal
    let output = Command::cargo_bin("typist")?.output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin must be a tty"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn rejects_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("typist")?.arg("--words").output()?;

    assert!(!output.status.success());
    Ok(())
}

#[test]
fn prints_version() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("typist")?.arg("--version").output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("typist"));
    Ok(())
}
