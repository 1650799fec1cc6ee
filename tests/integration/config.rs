//! Config file discovery and its effect on generated styles.

use std::fs;

use crate::common::{TestProject, read_snapshot};
use dsforge::models::{FontName, LineHeight};
use dsforge::test_utils::ConfigFixture;

#[test]
fn config_fonts_and_line_height_apply() {
    let project = TestProject::with_config(&ConfigFixture::custom_fonts()).unwrap();

    project
        .dsforge()
        .args(["typography", "Body", "--factor", "1.25"])
        .assert()
        .success();

    let document = project.read_document().unwrap();
    assert_eq!(document.text_styles.len(), 9);
    for style in &document.text_styles {
        assert_eq!(style.font_name, FontName::regular("Roboto"));
        assert_eq!(
            style.line_height,
            LineHeight::Percent {
                value: 150.0,
            }
        );
    }
}

#[test]
fn config_fallback_list_replaces_defaults() {
    let project = TestProject::with_config(&ConfigFixture::custom_fonts()).unwrap();

    project
        .dsforge()
        .args(["text-style", "Note", "--size", "10", "--family", "Papyrus"])
        .assert()
        .success();

    // only Arial is configured as a fallback
    let document = project.read_document().unwrap();
    assert_eq!(document.text_styles[0].font_name, FontName::regular("Arial"));
}

#[test]
fn config_names_the_document() {
    let project = TestProject::new().unwrap();
    fs::write(project.config_path(), "document = \"tokens/system.json\"\n").unwrap();

    project
        .bare_dsforge()
        .arg("--config")
        .arg(project.config_path())
        .args(["spacing", "Spacing", "--factor", "2"])
        .assert()
        .success();

    let written = project.root().join("tokens").join("system.json");
    assert_eq!(read_snapshot(&written).unwrap().variables.len(), 9);
    assert!(!project.document_path().exists());
}

#[test]
fn document_flag_wins_over_config() {
    let project = TestProject::new().unwrap();
    fs::write(project.config_path(), "document = \"ignored.json\"\n").unwrap();

    project.dsforge().args(["spacing", "Spacing", "--factor", "2"]).assert().success();

    assert!(project.document_path().exists());
    assert!(!project.root().join("ignored.json").exists());
}

#[test]
fn config_from_environment_variable() {
    let project = TestProject::with_config(&ConfigFixture::custom_fonts()).unwrap();

    project
        .bare_dsforge()
        .env("DSFORGE_CONFIG", project.config_path())
        .args(["typography", "Caption", "--base-size", "12", "--factor", "1.1"])
        .assert()
        .success();

    // no --document either, so the default file in the working directory is used
    let document = project.read_document().unwrap();
    assert!(document.text_styles.iter().all(|s| s.font_name.family == "Roboto"));
}

#[test]
fn missing_config_uses_defaults() {
    let project = TestProject::new().unwrap();
    assert!(!project.config_path().exists());

    project.dsforge().args(["typography", "Body", "--factor", "1.2"]).assert().success();

    let document = project.read_document().unwrap();
    assert!(document.text_styles.iter().all(|s| s.font_name == FontName::new("Inter", "Regular")));
}
