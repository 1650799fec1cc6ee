//! Generator commands and the documents they leave behind.

use predicates::prelude::*;

use crate::common::TestProject;
use dsforge::models::{FontName, LetterSpacing, LineHeight, TextCase, VariableValue};
use dsforge::test_utils::DocumentFixture;

#[test]
fn design_system_creates_default_set() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .arg("design-system")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Design system created: 2 collections, 42 variables, 40 text styles",
        ));

    let document = project.read_document().unwrap();
    let names: Vec<&str> = document.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Spacing", "Colors"]);
    assert_eq!(document.variables.len(), 42);
    assert_eq!(document.text_styles.len(), 40);
}

#[test]
fn design_system_twice_creates_nothing_new() {
    let project = TestProject::new().unwrap();

    project.dsforge().arg("design-system").assert().success();
    let first = project.read_document().unwrap();
    project.dsforge().arg("design-system").assert().success();
    let second = project.read_document().unwrap();

    assert_eq!(first.collections, second.collections);
    assert_eq!(first.variables, second.variables);
    assert_eq!(first.text_styles, second.text_styles);
}

#[test]
fn spacing_command_writes_scale() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["spacing", "Spacing/tight", "--base", "4", "--factor", "2", "--anchor", "3xs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spacing scale Spacing/tight created (9 variables)"));

    let document = project.read_document().unwrap();
    let xs = document.variables.iter().find(|v| v.name == "tight/xs").unwrap();
    assert_eq!(xs.values_by_mode.values().next(), Some(&VariableValue::Float(16.0)));
}

#[test]
fn failed_batch_keeps_what_it_created() {
    let project = TestProject::with_document(&DocumentFixture::conflicting_spacing()).unwrap();

    project
        .dsforge()
        .args(["spacing", "Spacing/golden", "--base", "16", "--factor", "1.618"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Variable 'golden/md' expects"));

    // steps before the conflict were committed and saved
    let document = project.read_document().unwrap();
    let names: Vec<&str> = document.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["golden/md", "golden/3xs", "golden/2xs", "golden/xs", "golden/sm"]);
    let md = &document.variables[0];
    assert_eq!(md.values_by_mode.get("1:0"), Some(&VariableValue::String("medium".to_string())));

    // the saved document is still readable
    project.dsforge().arg("query").assert().success();
}

#[test]
fn color_command_reuses_existing_collection() {
    let project = TestProject::with_document(&DocumentFixture::existing_colors()).unwrap();

    project
        .dsforge()
        .args(["color", "success", "Colors/semantic", "#34C759", "#30D158"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color semantic/success created in Colors"));

    let document = project.read_document().unwrap();
    assert_eq!(document.collections.len(), 1);
    let success = document.variables.iter().find(|v| v.name == "semantic/success").unwrap();
    assert_eq!(success.values_by_mode.len(), 2);
}

#[test]
fn typography_and_preset_commands() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["typography", "Body", "--base-size", "16", "--factor", "1.125"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Typography scale Body created (9 styles)"));

    project
        .dsforge()
        .args(["preset", "classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Typography preset classic created (19 styles)"));

    // the classic preset restyled the existing Body scale rather than duplicating it
    let document = project.read_document().unwrap();
    assert_eq!(document.text_styles.len(), 19);
    let body = document.text_styles.iter().find(|s| s.name == "Body/base").unwrap();
    assert_eq!(body.font_size, 16.0);
    let lg = document.text_styles.iter().find(|s| s.name == "Body/lg").unwrap();
    assert_eq!(lg.font_size, 19.0);
}

#[test]
fn text_style_command_sets_every_property() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args([
            "text-style",
            "Hero/Title",
            "--size",
            "48",
            "--family",
            "Inter",
            "--style",
            "Bold",
            "--line-height-px",
            "56",
            "--letter-spacing",
            "-2",
            "--text-case",
            "upper",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text style Hero/Title created"));

    let document = project.read_document().unwrap();
    let hero = &document.text_styles[0];
    assert_eq!(hero.font_size, 48.0);
    assert_eq!(hero.font_name, FontName::new("Inter", "Bold"));
    assert_eq!(
        hero.line_height,
        LineHeight::Pixels {
            value: 56.0,
        }
    );
    assert_eq!(
        hero.letter_spacing,
        LetterSpacing::Percent {
            value: -2.0,
        }
    );
    assert_eq!(hero.text_case, Some(TextCase::Upper));
}

#[test]
fn text_style_falls_back_to_available_font() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["text-style", "Label", "--size", "12", "--family", "Papyrus"])
        .assert()
        .success();

    let document = project.read_document().unwrap();
    // Inter Regular is the first fallback and is installed by default
    assert_eq!(document.text_styles[0].font_name, FontName::new("Inter", "Regular"));
}

#[tokio::test]
async fn saved_document_loads_through_the_store() {
    use dsforge::store::DocumentStore;

    let project = TestProject::new().unwrap();
    project.dsforge().args(["spacing", "Spacing", "--factor", "1.5"]).assert().success();

    let store = project.load_store().await.unwrap();
    let spacing = store.find_collection("Spacing").await.unwrap().unwrap();
    assert_eq!(spacing.variable_ids.len(), 9);

    // ids keep counting after reload, so a new collection gets a fresh one
    let next = store.create_collection("Colors").await.unwrap();
    assert!(store.list_variables().await.unwrap().iter().all(|v| v.id != next.id));
    assert_ne!(next.id, spacing.id);
}
