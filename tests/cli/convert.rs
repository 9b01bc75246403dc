use anyhow::Result;
use serde_json::json;

use crate::{CliTest, mo_bytes, stderr};

#[test]
fn test_convert_strips_metadata() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locale/fr/LC_MESSAGES/django.mo",
        mo_bytes(&[
            ("", "Content-Type: text/plain; charset=UTF-8\n"),
            ("Cancel", "Annuler"),
            ("Save", "Enregistrer"),
        ]),
    )?;

    let output = test
        .command()
        .args(["convert", "locale/fr/LC_MESSAGES/django.mo", "out/fr.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("out/fr.json")?,
        json!({ "Cancel": "Annuler", "Save": "Enregistrer" })
    );

    Ok(())
}

#[test]
fn test_convert_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["convert", "missing.mo", "out.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Could not load compiled catalog missing.mo"));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_convert_corrupt_catalog() -> Result<()> {
    let test = CliTest::with_file("broken.mo", "this is not a catalog")?;

    let output = test
        .command()
        .args(["convert", "broken.mo", "out.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("bad magic number"));

    Ok(())
}
