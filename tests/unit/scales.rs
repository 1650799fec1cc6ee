//! Spacing and typography scale generation.

use std::sync::Arc;

use dsforge::core::DsforgeError;
use dsforge::models::{ResolvedType, VariableValue};
use dsforge::session::Session;
use dsforge::store::{DocumentStore, MemoryDocument};
use dsforge::systems::{scale_sizes, spacing_system, spacing_values};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn spacing_anchor_defaults_to_md() {
    let values = spacing_values(16.0, 1.618, None).unwrap();
    let steps: Vec<&str> = values.iter().map(|(step, _)| *step).collect();
    assert_eq!(steps, vec!["3xs", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl"]);

    assert!(close(values[4].1, 16.0));
    assert!(close(values[5].1, 16.0 * 1.618));
    assert!(close(values[3].1, 16.0 / 1.618));
    assert!(close(values[0].1, 16.0 * 1.618_f64.powi(-4)));
}

#[test]
fn spacing_values_are_not_rounded() {
    let values = spacing_values(16.0, 1.25, None).unwrap();
    assert!(close(values[5].1, 20.0));
    assert!(close(values[6].1, 25.0));
    assert!(close(values[7].1, 31.25));
}

#[test]
fn spacing_anchor_moves_the_base() {
    let values = spacing_values(4.0, 2.0, Some("3xs")).unwrap();
    let expected = [4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0];
    for ((_, actual), expected) in values.iter().zip(expected) {
        assert!(close(*actual, expected));
    }

    // empty anchor means the default
    assert_eq!(spacing_values(16.0, 2.0, Some("")).unwrap(), spacing_values(16.0, 2.0, None).unwrap());
}

#[test]
fn unknown_anchor_is_rejected() {
    let err = spacing_values(16.0, 2.0, Some("mid")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DsforgeError>(),
        Some(DsforgeError::UnknownAnchor { .. })
    ));

    // typography steps differ from spacing steps
    assert!(scale_sizes(16.0, 1.2, Some("md")).is_err());
    assert!(scale_sizes(16.0, 1.2, Some("5xl")).is_ok());
}

#[test]
fn typography_sizes_are_rounded() {
    let sizes = scale_sizes(16.0, 1.125, None).unwrap();
    let values: Vec<f64> = sizes.iter().map(|(_, size)| *size).collect();
    assert_eq!(values, vec![13.0, 14.0, 16.0, 18.0, 20.0, 23.0, 26.0, 29.0, 32.0]);
    assert_eq!(sizes[0].0, "xs");
    assert_eq!(sizes[8].0, "5xl");
}

#[tokio::test]
async fn spacing_system_is_idempotent() {
    let store = Arc::new(MemoryDocument::new());
    let mut session = Session::new(Arc::clone(&store));

    let first = spacing_system(&mut session, "Spacing/golden", 16.0, 1.618, None).await.unwrap();
    let second = spacing_system(&mut session, "Spacing/golden", 16.0, 1.5, None).await.unwrap();

    assert_eq!(store.list_collections().await.unwrap().len(), 1);
    assert_eq!(store.list_variables().await.unwrap().len(), 9);
    assert_eq!(
        first.iter().map(|v| &v.id).collect::<Vec<_>>(),
        second.iter().map(|v| &v.id).collect::<Vec<_>>()
    );

    // the second run overwrote values in place
    let lg = &second[5];
    assert_eq!(lg.name, "golden/lg");
    assert_eq!(lg.resolved_type, ResolvedType::Float);
    assert_eq!(lg.values_by_mode.values().next(), Some(&VariableValue::Float(24.0)));
}

#[tokio::test]
async fn spacing_without_folder_uses_bare_steps() {
    let store = Arc::new(MemoryDocument::new());
    let mut session = Session::new(Arc::clone(&store));

    let variables = spacing_system(&mut session, "Gaps", 8.0, 2.0, None).await.unwrap();
    assert_eq!(variables[4].name, "md");

    let collection = store.find_collection("Gaps").await.unwrap().unwrap();
    assert_eq!(collection.variable_ids.len(), 9);
}

#[tokio::test]
async fn spacing_with_bad_anchor_creates_nothing() {
    let store = Arc::new(MemoryDocument::new());
    let mut session = Session::new(Arc::clone(&store));

    assert!(spacing_system(&mut session, "Spacing/x", 16.0, 2.0, Some("huge")).await.is_err());
    assert!(store.list_collections().await.unwrap().is_empty());
}
