use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .glotmarkrc.json\n");

    let content = test.read_file(".glotmarkrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["templateDirs", "templateExts", "localeRoot", "domain"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotmarkrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "error: .glotmarkrc.json already exists\n");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("app/views.py", r#"title = _("Welcome")"#)?;

    let output = test.make_command().output()?;

    assert!(
        output.status.success(),
        "make should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.read_file("locale/django.pot")?.contains(r#"msgid "Welcome""#));

    Ok(())
}
