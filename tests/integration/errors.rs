//! Exit codes and user-facing error output.

use predicates::prelude::*;
use std::fs;

use crate::common::TestProject;
use dsforge::test_utils::{ConfigFixture, DocumentFixture};

#[test]
fn unknown_preset_suggests_closest() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["preset", "modrn"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown typography preset: modrn"))
        .stderr(predicate::str::contains("Did you mean 'modern'?"));

    assert!(!project.document_path().exists());
}

#[test]
fn unknown_anchor_lists_steps() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["spacing", "Spacing", "--factor", "1.5", "--anchor", "mdd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown anchor 'mdd'"))
        .stderr(predicate::str::contains("Did you mean 'md'?"));
}

#[test]
fn invalid_color_is_rejected_before_any_change() {
    let project = TestProject::with_document(&DocumentFixture::existing_colors()).unwrap();
    let before = fs::read_to_string(project.document_path()).unwrap();

    project
        .dsforge()
        .args(["color", "bad", "Brand", "#GGGGGG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex color '#GGGGGG'"));

    assert_eq!(fs::read_to_string(project.document_path()).unwrap(), before);
}

#[test]
fn degenerate_factor_is_rejected() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["spacing", "Gaps", "--base", "16", "--factor", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid factor 0: must be a positive number"));
    assert!(!project.document_path().exists());

    project
        .dsforge()
        .args(["typography", "Body", "--base-size", "16", "--factor", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid factor NaN"));

    // a huge factor overflows instead of writing null into the document
    project
        .dsforge()
        .args(["spacing", "Gaps", "--base", "16", "--factor", "1e200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflow"));

    project.dsforge().args(["spacing", "Gaps", "--base", "16", "--factor", "2"]).assert().success();
    project.dsforge().arg("query").assert().success();
}

#[test]
fn empty_namespace_is_an_invalid_path() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["color", "main", "/primary", "#007AFF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resource path '/primary'"));
}

#[test]
fn no_font_available() {
    let project = TestProject::with_document(&DocumentFixture::without_fonts()).unwrap();

    project
        .dsforge()
        .args(["text-style", "Body", "--size", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not load any font. Please ensure Inter, Roboto, Arial, or Helvetica is available.",
        ));
}

#[test]
fn invalid_config_is_reported() {
    let project = TestProject::with_config(&ConfigFixture::invalid_line_height()).unwrap();

    project
        .dsforge()
        .arg("query")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line_height_percent must be a positive number"));

    let project = TestProject::with_config(&ConfigFixture::invalid_syntax()).unwrap();
    project.dsforge().arg("query").assert().failure().stderr(predicate::str::contains(
        "Configuration error",
    ));
}

#[test]
fn corrupt_document_is_reported() {
    let project = TestProject::new().unwrap();
    fs::write(project.document_path(), "{ not json").unwrap();

    project
        .dsforge()
        .arg("query")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse document"));
}

#[test]
fn conflicting_flags_are_rejected_by_clap() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["-v", "-q", "query"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    project
        .dsforge()
        .args(["text-style", "X", "--line-height", "120", "--line-height-px", "20"])
        .assert()
        .failure();
}
