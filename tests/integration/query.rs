//! The query command.

use predicates::prelude::*;
use serde_json::Value;

use crate::common::TestProject;
use dsforge::test_utils::DocumentFixture;

#[test]
fn query_lists_fixture_contents() {
    let project = TestProject::with_document(&DocumentFixture::existing_colors()).unwrap();

    project
        .dsforge()
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collections:"))
        .stdout(predicate::str::contains("Colors 1 variables, modes: Light, Dark"))
        .stdout(predicate::str::contains("primary/main COLOR"))
        .stdout(predicate::str::contains("Body/base 16px Inter Regular"));
}

#[test]
fn query_empty_document() {
    let project = TestProject::new().unwrap();

    project
        .dsforge()
        .args(["query", "collections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    // reading never creates the document
    assert!(!project.document_path().exists());
}

#[test]
fn query_variables_as_json() {
    let project = TestProject::with_document(&DocumentFixture::existing_colors()).unwrap();

    let output = project.dsforge().args(["query", "variables", "--json"]).output().unwrap();
    assert!(output.status.success());

    let variables: Value = serde_json::from_slice(&output.stdout).unwrap();
    let main = &variables[0];
    assert_eq!(main["name"], "primary/main");
    assert_eq!(main["type"], "COLOR");
    assert_eq!(main["folder"], "primary");
    assert_eq!(main["collection"], "VariableCollectionId:1");
}

#[test]
fn query_all_as_json_after_generation() {
    let project = TestProject::new().unwrap();
    project.dsforge().args(["preset", "ui"]).assert().success();

    let output = project.dsforge().args(["query", "--json"]).output().unwrap();
    let data: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(data["collections"].as_array().map(Vec::len), Some(0));
    assert_eq!(data["textStyles"].as_array().map(Vec::len), Some(12));
}
