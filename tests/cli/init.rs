use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .bundlelintrc.json"));

    let content = test.read_file(".bundlelintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["targetFunction"], "NSLocalizedString");
    assert_eq!(parsed["requiredLabel"], "bundle");
    assert_eq!(
        parsed["acceptedValues"],
        serde_json::json!([".module", "Bundle.module"])
    );

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::with_file(".bundlelintrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("already exists"));
    assert_eq!(test.read_file(".bundlelintrc.json")?, "{}");

    Ok(())
}
