//! Variable builder and color tokens against documents that already hold data.

use std::sync::Arc;

use dsforge::core::DsforgeError;
use dsforge::models::{ResolvedType, VariableValue};
use dsforge::session::Session;
use dsforge::store::{DocumentStore, MemoryDocument};
use dsforge::systems::color_token;
use dsforge::test_utils::{DocumentFixture, FlakyDocument};
use dsforge::variables::{VariableBuilder, hex_to_rgb};

fn hexes(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

#[tokio::test]
async fn color_token_fills_every_mode_of_an_existing_collection() {
    let store = Arc::new(DocumentFixture::existing_colors().store().unwrap());
    let mut session = Session::new(Arc::clone(&store));

    let built = color_token(&mut session, "main", "Colors/primary", &hexes(&["#007AFF", "#0A84FF"]))
        .await
        .unwrap();

    // found, not recreated
    assert_eq!(built.collection.id, "VariableCollectionId:1");
    assert_eq!(built.variable.id, "VariableID:2");
    assert_eq!(store.list_variables().await.unwrap().len(), 1);

    assert_eq!(built.variable.values_by_mode.len(), 2);
    assert_eq!(
        built.variable.values_by_mode.get("1:1"),
        Some(&VariableValue::Color(hex_to_rgb("#0A84FF").unwrap()))
    );
}

#[tokio::test]
async fn fewer_values_than_modes_leaves_later_modes_alone() {
    let store = Arc::new(DocumentFixture::existing_colors().store().unwrap());
    let mut session = Session::new(Arc::clone(&store));

    let built = color_token(&mut session, "accent", "Colors/primary", &hexes(&["#FF9500"]))
        .await
        .unwrap();
    assert_eq!(built.variable.name, "primary/accent");
    assert_eq!(built.variable.values_by_mode.len(), 1);
    assert!(built.variable.values_by_mode.contains_key("1:0"));
}

#[tokio::test]
async fn hex_digits_are_case_insensitive_but_must_be_six() {
    let store = Arc::new(MemoryDocument::new());
    let mut session = Session::new(Arc::clone(&store));

    let built = color_token(&mut session, "white", "Colors", &hexes(&["#ffffff"])).await.unwrap();
    let value = built.variable.values_by_mode.values().next().unwrap();
    assert_eq!(value, &VariableValue::Color(hex_to_rgb("#FFFFFF").unwrap()));

    let err = color_token(&mut session, "black", "Colors", &hexes(&["#000"])).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DsforgeError>(),
        Some(DsforgeError::InvalidColor { .. })
    ));
    assert_eq!(store.list_variables().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_token_does_not_undo_earlier_ones() {
    let store = Arc::new(FlakyDocument::new(MemoryDocument::new()));
    store.reject("semantic/error").await;
    let mut session = Session::new(Arc::clone(&store));

    color_token(&mut session, "success", "Colors/semantic", &hexes(&["#34C759"])).await.unwrap();
    let err = color_token(&mut session, "error", "Colors/semantic", &hexes(&["#FF3B30"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<DsforgeError>(),
        Some(DsforgeError::CreateFailed { .. })
    ));

    let names: Vec<String> =
        store.list_variables().await.unwrap().into_iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["semantic/success"]);
}

#[tokio::test]
async fn builder_types_are_checked_by_the_store() {
    let mut session = Session::new(Arc::new(MemoryDocument::new()));
    VariableBuilder::new()
        .collection("Tokens")
        .variable("radius", ResolvedType::Float)
        .numbers([4.0])
        .build(&mut session)
        .await
        .unwrap();

    // same name, wrong kind of value
    let result = VariableBuilder::new()
        .collection("Tokens")
        .variable("radius", ResolvedType::Float)
        .strings(["4px"])
        .build(&mut session)
        .await;
    assert!(result.is_err());
}
