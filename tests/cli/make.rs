use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const BUTTONS: &str = "<button><%_ Save _%></button>\n<button><%_ Cancel _%></button>\n<%_ Save _%>";

#[test]
fn test_make_extracts_markers_and_calls() -> Result<()> {
    let test = CliTest::with_file("static/templates/buttons.tpl", BUTTONS)?;
    test.write_file("app/views.py", "def view():\n    return _(\"Welcome\")\n")?;
    test.write_file("static/loose.tpl", "<%_ Not registered _%>")?;

    let output = test
        .make_command()
        .args(["-t", "static/templates", "-x", "tpl", "-l", "fr"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let po = test.read_file("locale/fr/LC_MESSAGES/django.po")?;
    assert!(po.contains(r#"msgid " Save ""#));
    assert!(po.contains(r#"msgid " Cancel ""#));
    assert!(po.contains(r#"msgid "Welcome""#));
    assert!(po.contains("app/views.py:2"));
    assert!(!po.contains("Not registered"));
    assert_eq!(po.matches(r#"msgid " Save ""#).count(), 1);

    let out = stdout(&output);
    assert!(out.contains("created"));
    assert!(out.contains("Extracted 3 messages"));

    Ok(())
}

#[test]
fn test_make_keeps_existing_translations() -> Result<()> {
    let test = CliTest::with_file("templates/buttons.tpl", "<%_Save_%>")?;
    test.write_file(
        "locale/fr/LC_MESSAGES/django.po",
        "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\nmsgid \"Save\"\nmsgstr \"Enregistrer\"\n",
    )?;

    let output = test
        .make_command()
        .args(["-t", "templates", "-x", "tpl"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let po = test.read_file("locale/fr/LC_MESSAGES/django.po")?;
    assert!(po.contains(r#"msgstr "Enregistrer""#));
    assert_eq!(po.matches(r#"msgid "Save""#).count(), 1);

    Ok(())
}

#[test]
fn test_make_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".glotmarkrc.json",
        r#"{ "templateDirs": ["client"], "templateExts": ["ejs"], "domain": "djangojs", "locales": ["de"] }"#,
    )?;
    test.write_file("client/list.ejs", "<li><%_ Delete _%></li>")?;

    let output = test.make_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        test.read_file("locale/de/LC_MESSAGES/djangojs.po")?
            .contains(r#"msgid " Delete ""#)
    );
    assert!(test.root().join("locale/djangojs.pot").exists());

    Ok(())
}

#[test]
fn test_make_missing_template_dir_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .make_command()
        .args(["-t", "does/not/exist", "-x", "tpl"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Cannot resolve scan directory"));
    assert!(stderr(&output).contains("does/not/exist"));

    Ok(())
}
