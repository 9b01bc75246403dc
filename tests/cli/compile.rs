use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const FRENCH_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

msgid "Save"
msgstr "Enregistrer"
"#;

const GERMAN_PO: &str = r#"msgid ""
msgstr ""
"Language: de\n"
"Content-Type: text/plain; charset=UTF-8\n"

msgid "Save"
msgstr "Speichern"
"#;

#[test]
fn test_compile_writes_json_catalogs() -> Result<()> {
    let test = CliTest::with_file("locale/fr/LC_MESSAGES/django.po", FRENCH_PO)?;
    test.write_file("locale/de/LC_MESSAGES/djangojs.po", GERMAN_PO)?;

    let output = test.compile_command().args(["-o", "static/i18n"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Converted 2 catalogs");

    assert!(test.root().join("locale/fr/LC_MESSAGES/django.mo").exists());
    assert_eq!(
        test.read_json("static/i18n/fr/LC_MESSAGES/django.json")?,
        json!({ "Save": "Enregistrer" })
    );
    assert_eq!(
        test.read_json("static/i18n/de/LC_MESSAGES/djangojs.json")?,
        json!({ "Save": "Speichern" })
    );

    Ok(())
}

#[test]
fn test_compile_defaults_to_locale_root() -> Result<()> {
    let test = CliTest::with_file("locale/fr/LC_MESSAGES/django.po", FRENCH_PO)?;

    let output = test.compile_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("locale/fr/LC_MESSAGES/django.json")?,
        json!({ "Save": "Enregistrer" })
    );

    Ok(())
}

#[test]
fn test_compile_locale_filter_and_verbose() -> Result<()> {
    let test = CliTest::with_file("locale/fr/LC_MESSAGES/django.po", FRENCH_PO)?;
    test.write_file("locale/de/LC_MESSAGES/django.po", GERMAN_PO)?;

    let output = test
        .compile_command()
        .args(["-l", "de", "-o", "out", "-v"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("[underi18n] converting"));
    assert!(test.root().join("out/de/LC_MESSAGES/django.json").exists());
    assert!(!test.root().join("out/fr").exists());

    Ok(())
}

#[test]
fn test_compile_missing_locale_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.compile_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: Failed to find catalogs in"));

    Ok(())
}
