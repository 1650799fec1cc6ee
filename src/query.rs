//! Read-only views of a document.
//!
//! The summaries here are what the CLI prints and what `variables-update` and
//! `design-system-created` messages carry, so they serialize with camelCase
//! field names.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Mode, ResolvedType, TextStyle, VariableValue};
use crate::path::folder_of;
use crate::store::DocumentStore;

/// Group name for text styles without a `/` in their name.
pub const UNGROUPED_STYLES: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub modes: Vec<Mode>,
    /// Number of variables in the collection.
    pub variables: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resolved_type: ResolvedType,
    /// Id of the owning collection.
    pub collection: String,
    pub values: BTreeMap<String, VariableValue>,
    /// Everything before the last `/` of the name.
    pub folder: Option<String>,
}

/// Everything [`all`] returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    pub collections: Vec<CollectionSummary>,
    pub variables: Vec<VariableSummary>,
    pub text_styles: Vec<TextStyle>,
}

pub async fn collections<S: DocumentStore>(store: &S) -> Result<Vec<CollectionSummary>> {
    let collections = store.list_collections().await?;
    let variables = store.list_variables().await?;

    Ok(collections
        .into_iter()
        .map(|c| {
            let count = variables.iter().filter(|v| v.variable_collection_id == c.id).count();
            CollectionSummary {
                id: c.id,
                name: c.name,
                modes: c.modes,
                variables: count,
            }
        })
        .collect())
}

pub async fn variables<S: DocumentStore>(store: &S) -> Result<Vec<VariableSummary>> {
    Ok(store
        .list_variables()
        .await?
        .into_iter()
        .map(|v| VariableSummary {
            folder: folder_of(&v.name).map(str::to_string),
            id: v.id,
            name: v.name,
            resolved_type: v.resolved_type,
            collection: v.variable_collection_id,
            values: v.values_by_mode,
        })
        .collect())
}

pub async fn text_styles<S: DocumentStore>(store: &S) -> Result<Vec<TextStyle>> {
    store.list_text_styles().await
}

/// Collections, variables, and text styles in one snapshot.
pub async fn all<S: DocumentStore>(store: &S) -> Result<DocumentData> {
    Ok(DocumentData {
        collections: collections(store).await?,
        variables: variables(store).await?,
        text_styles: text_styles(store).await?,
    })
}

/// Count text styles by the first segment of their name.
///
/// Styles without a `/` are counted under [`UNGROUPED_STYLES`].
#[must_use]
pub fn style_groups(styles: &[TextStyle]) -> BTreeMap<String, usize> {
    let mut groups = BTreeMap::new();
    for style in styles {
        let group = match style.name.split_once('/') {
            Some((group, _)) => group,
            None => UNGROUPED_STYLES,
        };
        *groups.entry(group.to_string()).or_insert(0) += 1;
    }
    groups
}
