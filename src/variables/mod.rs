//! Variable construction.
//!
//! [`VariableBuilder`] collects a variable's configuration as an immutable
//! value: every setter consumes the builder and returns the updated copy, and
//! nothing touches the document until [`build`](VariableBuilder::build).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dsforge::models::ResolvedType;
//! use dsforge::session::Session;
//! use dsforge::store::MemoryDocument;
//! use dsforge::variables::VariableBuilder;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(Arc::new(MemoryDocument::new()));
//! let built = VariableBuilder::new()
//!     .collection("Colors/primary")
//!     .variable("main", ResolvedType::Color)
//!     .hex(["#007AFF", "#0A84FF"])
//!     .build(&mut session)
//!     .await?;
//! assert_eq!(built.variable.name, "primary/main");
//! # Ok(())
//! # }
//! ```

mod color;

pub use color::{hex_to_rgb, rgb_from_bytes};

use anyhow::{Context, Result};

use crate::core::DsforgeError;
use crate::models::{CollectionHandle, ResolvedType, Variable, VariableValue};
use crate::path::{ResourcePath, qualify};
use crate::session::Session;
use crate::store::DocumentStore;

/// Values queued on a builder, converted at build time.
#[derive(Debug, Clone, PartialEq)]
enum ValueSpec {
    Hex(Vec<String>),
    Rgb(Vec<[u8; 3]>),
    Numbers(Vec<f64>),
    Strings(Vec<String>),
}

impl ValueSpec {
    fn into_values(self) -> Result<Vec<VariableValue>, DsforgeError> {
        match self {
            Self::Hex(colors) => colors
                .iter()
                .map(|hex| hex_to_rgb(hex).map(VariableValue::Color))
                .collect(),
            Self::Rgb(colors) => {
                Ok(colors.into_iter().map(|c| VariableValue::Color(rgb_from_bytes(c))).collect())
            }
            Self::Numbers(values) => Ok(values.into_iter().map(VariableValue::Float).collect()),
            Self::Strings(values) => Ok(values.into_iter().map(VariableValue::String).collect()),
        }
    }
}

/// Immutable configuration for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBuilder {
    collection: Option<String>,
    folder: Option<String>,
    name: Option<String>,
    resolved_type: ResolvedType,
    values: Option<ValueSpec>,
}

impl Default for VariableBuilder {
    fn default() -> Self {
        Self {
            collection: None,
            folder: None,
            name: None,
            resolved_type: ResolvedType::Color,
            values: None,
        }
    }
}

/// What [`VariableBuilder::build`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltVariable {
    pub variable: Variable,
    pub collection: CollectionHandle,
}

impl VariableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target collection path; its sub-path becomes the variable's folder.
    #[must_use]
    pub fn collection(mut self, path: impl Into<String>) -> Self {
        self.collection = Some(path.into());
        self.folder = None;
        self
    }

    /// Variable name and type.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, resolved_type: ResolvedType) -> Self {
        self.name = Some(name.into());
        self.resolved_type = resolved_type;
        self
    }

    /// Override the folder taken from the collection path.
    #[must_use]
    pub fn folder(mut self, path: impl Into<String>) -> Self {
        self.folder = Some(path.into());
        self
    }

    /// One `#RRGGBB` color per mode.
    #[must_use]
    pub fn hex<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.values = Some(ValueSpec::Hex(colors.into_iter().map(Into::into).collect()));
        self
    }

    /// One 0–255 RGB triple per mode.
    #[must_use]
    pub fn rgb(mut self, colors: impl IntoIterator<Item = [u8; 3]>) -> Self {
        self.values = Some(ValueSpec::Rgb(colors.into_iter().collect()));
        self
    }

    /// One number per mode.
    #[must_use]
    pub fn numbers(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.values = Some(ValueSpec::Numbers(values.into_iter().collect()));
        self
    }

    /// One string per mode.
    #[must_use]
    pub fn strings<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.values = Some(ValueSpec::Strings(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Stored variable name: `folder/name`, or `name` without a folder.
    fn qualified_name(&self, path: &ResourcePath) -> Option<String> {
        let folder = self.folder.as_deref().or(path.sub_path.as_deref());
        self.name.as_deref().map(|name| qualify(folder, name))
    }

    /// Resolve the collection, find or create the variable, and assign values.
    ///
    /// Value `i` goes to mode `i` of the collection; extra values are ignored.
    pub async fn build<S: DocumentStore>(self, session: &mut Session<S>) -> Result<BuiltVariable> {
        let collection_path = self.collection.as_deref().ok_or_else(|| DsforgeError::Other {
            message: "variable builder needs a collection".to_string(),
        })?;
        let path = ResourcePath::parse(collection_path)?;
        let name = self.qualified_name(&path).ok_or_else(|| DsforgeError::Other {
            message: "variable builder needs a variable name".to_string(),
        })?;
        // Convert before any side effect so a bad literal creates nothing
        let values = self.values.clone().map(ValueSpec::into_values).transpose()?;

        let collection = session.collections().get(&path.namespace).await?;
        let mut variable =
            get_or_create_variable(session.store(), &name, &collection, self.resolved_type).await?;

        if let Some(values) = values {
            variable = set_values(session.store(), variable, &collection, values).await?;
        }

        Ok(BuiltVariable {
            variable,
            collection,
        })
    }
}

/// Find `name` in `collection`, or create it.
pub async fn get_or_create_variable<S: DocumentStore>(
    store: &S,
    name: &str,
    collection: &CollectionHandle,
    resolved_type: ResolvedType,
) -> Result<Variable> {
    let variables = store.list_variables().await?;
    if let Some(existing) =
        variables.into_iter().find(|v| v.name == name && v.variable_collection_id == collection.id)
    {
        tracing::debug!("Found existing variable: {name} in collection: {}", collection.name);
        return Ok(existing);
    }

    tracing::debug!("Creating new variable: {name} in collection: {}", collection.name);
    store
        .create_variable(name, &collection.id, resolved_type)
        .await
        .with_context(|| format!("Failed to create variable '{name}'"))
}

/// Assign `values[i]` to `collection.modes[i]`, in order.
pub async fn set_values<S: DocumentStore>(
    store: &S,
    mut variable: Variable,
    collection: &CollectionHandle,
    values: Vec<VariableValue>,
) -> Result<Variable> {
    if values.len() > collection.modes.len() {
        tracing::debug!(
            "Variable {} has {} values but collection {} has {} modes; extra values ignored",
            variable.name,
            values.len(),
            collection.name,
            collection.modes.len()
        );
    }

    for (mode, value) in collection.modes.iter().zip(values) {
        variable = store.set_variable_value(&variable.id, &mode.mode_id, value).await?;
    }
    Ok(variable)
}
