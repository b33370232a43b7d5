use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const MISSING: &str = r#"let str = NSLocalizedString("key", value: "value", comment: "comment1")"#;
const VALID: &str = r#"let str = NSLocalizedString("key", bundle: .module, value: "value", comment: "comment")"#;
const WRONG: &str = r#"let str = NSLocalizedString("key", bundle: .main, value: "value", comment: "comment")"#;

#[test]
fn test_single_file_with_violation() -> Result<()> {
    let test = CliTest::with_file("Strings.swift", MISSING)?;

    let mut cmd = test.check_command();
    cmd.arg("Strings.swift");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        format!(
            "1 violations found.\nStrings.swift:1:11: error: Missing parameter `bundle:`\n{}\n{}^\n",
            MISSING,
            " ".repeat(10)
        )
    );

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file("Strings.swift", VALID)?;

    let mut cmd = test.check_command();
    cmd.arg("Strings.swift");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "0 violations found.\n");

    Ok(())
}

#[test]
fn test_directory_is_scanned_recursively() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Sources/App/B.swift", WRONG)?;
    test.write_file("Sources/App/A.swift", MISSING)?;
    test.write_file("Sources/App/Valid.swift", VALID)?;
    test.write_file("Sources/App/Notes.md", MISSING)?;
    test.write_file("Sources/.build/Hidden.swift", MISSING)?;

    let mut cmd = test.check_command();
    cmd.arg("Sources");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        format!(
            "2 violations found.\n\
             Sources/App/A.swift:1:11: error: Missing parameter `bundle:`\n{}\n{}^\n\n\
             Sources/App/B.swift:1:36: error: Incorrect value for parameter `bundle:`\n{}\n{}^\n",
            MISSING,
            " ".repeat(10),
            WRONG,
            " ".repeat(35)
        )
    );

    Ok(())
}

#[test]
fn test_all_includes_valid_calls() -> Result<()> {
    let test = CliTest::with_file("Strings.swift", VALID)?;

    let mut cmd = test.check_command();
    cmd.args(["Strings.swift", "--all"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("0 violations found.\n"));
    assert!(
        output
            .stdout
            .contains("Strings.swift:1:11: note: Valid call")
    );

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("Strings.swift", WRONG)?;

    let mut cmd = test.check_command();
    cmd.args(["Strings.swift", "--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json[0]["file"], "Strings.swift");
    assert_eq!(json[0]["line"], 1);
    assert_eq!(json[0]["column"], 36);
    assert_eq!(json[0]["kind"], "invalid-argument-value");
    assert_eq!(json[0]["sourceLine"], WRONG);

    Ok(())
}

#[test]
fn test_missing_path_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.arg("Nope");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("File doesn't exist at path: Nope"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", r#"{ "ignores": ["**/Generated/**"] }"#)?;
    test.write_file("Sources/Generated/Strings.swift", MISSING)?;
    test.write_file("Sources/App.swift", VALID)?;

    let mut cmd = test.check_command();
    cmd.arg(test.root().join("Sources"));
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "0 violations found.\n");

    Ok(())
}

#[test]
fn test_config_literal_ignore_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", r#"{ "ignores": ["Sources/Generated"] }"#)?;
    test.write_file("Sources/Generated/Strings.swift", MISSING)?;
    test.write_file("Sources/App.swift", VALID)?;

    for root in [".", "Sources"] {
        let mut cmd = test.check_command();
        cmd.arg(root);
        let output = run(cmd)?;

        assert_eq!(output.code, Some(0), "checking {root}");
        assert_eq!(output.stdout, "0 violations found.\n");
    }

    Ok(())
}

#[test]
fn test_unreadable_file_does_not_stop_batch() -> Result<()> {
    let test = CliTest::with_file("Sources/A.swift", MISSING)?;
    test.write_bytes("Sources/B.swift", &[0xff, 0xfe, 0x00])?;

    let mut cmd = test.check_command();
    cmd.arg("Sources");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.starts_with("1 violations found.\n"));
    assert!(output.stdout.contains("Sources/A.swift:1:11: error: Missing parameter `bundle:`"));
    assert!(output.stderr.contains("warning: Skipping Sources/B.swift"));

    Ok(())
}

#[test]
fn test_only_unreadable_files_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("Sources/B.swift", &[0xff, 0xfe, 0x00])?;

    let mut cmd = test.check_command();
    cmd.arg("Sources");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "0 violations found.\n");
    assert!(output.stderr.contains("warning: Skipping Sources/B.swift"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("App.swift", VALID)?;
    test.write_file(".bundlelintrc.json", r#"{ "acceptedValues": [] }"#)?;

    let mut cmd = test.check_command();
    cmd.arg("App.swift");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("acceptedValues"));

    Ok(())
}

#[test]
fn test_pattern_overrides() -> Result<()> {
    let test = CliTest::with_file(
        "Strings.swift",
        r#"let s = F("k", bundle: .main, value: "v", comment: "c")"#,
    )?;

    let mut cmd = test.check_command();
    cmd.args(["Strings.swift", "--function", "F", "--accept", ".main"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "0 violations found.\n");

    Ok(())
}

#[test]
fn test_verbose_lists_parsed_files() -> Result<()> {
    let test = CliTest::with_file("Sources/A.swift", VALID)?;

    let mut cmd = test.check_command();
    cmd.args(["Sources", "-v"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("Parsing: Sources/A.swift..."));
    assert!(output.stderr.contains("Checked 1 file - no violations found"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
