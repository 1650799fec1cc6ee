//! In-memory design document with JSON persistence.
//!
//! [`MemoryDocument`] implements [`DocumentStore`] over a [`DocumentSnapshot`]
//! guarded by an async mutex. The lock is only held for the duration of a
//! single store call and never across another `.await`.
//!
//! Naming rules mirror a design tool's: names are non-empty, do not start or
//! end with `/`, collection and text style names are unique, and variable
//! names are unique within their collection. Fonts must be loaded with
//! [`DocumentStore::load_font`] before a text style can use them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tokio::fs;
use tokio::sync::Mutex;

use super::DocumentStore;
use crate::constants::DEFAULT_MODE_NAME;
use crate::core::DsforgeError;
use crate::models::{
    CollectionHandle, FontName, LetterSpacing, LineHeight, Mode, ResolvedType, TextStyle,
    TextStyleProperties, Variable, VariableValue,
};
use crate::path::PATH_DELIMITER;

/// Serializable contents of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub collections: Vec<CollectionHandle>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
    /// Fonts the document can provide to [`DocumentStore::load_font`].
    #[serde(default = "default_installed_fonts")]
    pub installed_fonts: Vec<FontName>,
    #[serde(default)]
    next_id: u64,
}

fn default_installed_fonts() -> Vec<FontName> {
    vec![
        FontName::new("Inter", "Regular"),
        FontName::new("Inter", "Medium"),
        FontName::new("Inter", "SemiBold"),
        FontName::new("Inter", "Bold"),
        FontName::regular("Roboto"),
        FontName::regular("Arial"),
        FontName::regular("Helvetica"),
    ]
}

impl DocumentSnapshot {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn collection_mut(&mut self, id: &str) -> Result<&mut CollectionHandle> {
        self.collections.iter_mut().find(|c| c.id == id).ok_or_else(|| {
            DsforgeError::NotFound {
                kind: "collection".to_string(),
                id: id.to_string(),
            }
            .into()
        })
    }
}

/// An in-memory [`DocumentStore`].
#[derive(Debug)]
pub struct MemoryDocument {
    state: Mutex<DocumentSnapshot>,
    loaded_fonts: Mutex<HashSet<FontName>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document with the default installed fonts.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(DocumentSnapshot {
            installed_fonts: default_installed_fonts(),
            ..Default::default()
        })
    }

    /// An empty document that can only provide `fonts`.
    #[must_use]
    pub fn with_fonts(fonts: Vec<FontName>) -> Self {
        Self::from_snapshot(DocumentSnapshot {
            installed_fonts: fonts,
            ..Default::default()
        })
    }

    #[must_use]
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Self {
        Self {
            state: Mutex::new(snapshot),
            loaded_fonts: Mutex::new(HashSet::new()),
        }
    }

    /// Load a document from a JSON file, or start a fresh one if it does not exist.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Document {} not found, starting a new one", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read document from {}", path.display()))?;
        let snapshot: DocumentSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse document from {}", path.display()))?;

        tracing::debug!(
            "Loaded document {} ({} collections, {} variables, {} text styles)",
            path.display(),
            snapshot.collections.len(),
            snapshot.variables.len(),
            snapshot.text_styles.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the document to a JSON file, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create document directory: {}", parent.display())
            })?;
        }

        let content = {
            let state = self.state.lock().await;
            serde_json::to_string_pretty(&*state).context("Failed to serialize document")?
        };

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write document to {}", path.display()))
    }

    /// A copy of the current document contents.
    pub async fn snapshot(&self) -> DocumentSnapshot {
        self.state.lock().await.clone()
    }

    /// Remove a collection and its variables, as a user editing the document would.
    pub async fn delete_collection(&self, collection_id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        let before = state.collections.len();
        state.collections.retain(|c| c.id != collection_id);
        if state.collections.len() == before {
            return Err(DsforgeError::NotFound {
                kind: "collection".to_string(),
                id: collection_id.to_string(),
            }
            .into());
        }
        state.variables.retain(|v| v.variable_collection_id != collection_id);
        Ok(())
    }
}

fn validate_name(kind: &str, name: &str) -> Result<(), DsforgeError> {
    let reason = if name.trim().is_empty() {
        "name is empty"
    } else if name.starts_with(PATH_DELIMITER) || name.ends_with(PATH_DELIMITER) {
        "name must not start or end with '/'"
    } else {
        return Ok(());
    };

    Err(DsforgeError::InvalidName {
        kind: kind.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Turn a validation failure into the store's creation error.
fn creation_error(kind: &str, name: &str, error: DsforgeError) -> DsforgeError {
    DsforgeError::CreateFailed {
        kind: kind.to_string(),
        name: name.to_string(),
        reason: error.to_string(),
    }
}

/// A creation error whose source is the [`DsforgeError::DuplicateName`] it hit.
fn duplicate_error(kind: &str, name: &str) -> anyhow::Error {
    let duplicate = DsforgeError::DuplicateName {
        kind: kind.to_string(),
        name: name.to_string(),
    };
    anyhow::Error::new(duplicate).context(DsforgeError::CreateFailed {
        kind: kind.to_string(),
        name: name.to_string(),
        reason: "name already in use".to_string(),
    })
}

fn non_finite_error(name: &str, value: f64) -> DsforgeError {
    DsforgeError::InvalidNumber {
        name: name.to_string(),
        value,
        reason: "documents only store finite numbers".to_string(),
    }
}

impl DocumentStore for MemoryDocument {
    async fn list_collections(&self) -> Result<Vec<CollectionHandle>> {
        Ok(self.state.lock().await.collections.clone())
    }

    async fn find_collection(&self, name: &str) -> Result<Option<CollectionHandle>> {
        let state = self.state.lock().await;
        Ok(state.collections.iter().find(|c| c.name == name).cloned())
    }

    async fn create_collection(&self, name: &str) -> Result<CollectionHandle> {
        validate_name("collection", name).map_err(|e| creation_error("collection", name, e))?;

        let mut state = self.state.lock().await;
        if state.collections.iter().any(|c| c.name == name) {
            return Err(duplicate_error("collection", name));
        }

        let id = state.allocate_id();
        let collection = CollectionHandle {
            id: format!("VariableCollectionId:{id}"),
            name: name.to_string(),
            modes: vec![Mode {
                mode_id: format!("{id}:0"),
                name: DEFAULT_MODE_NAME.to_string(),
            }],
            variable_ids: Vec::new(),
        };
        state.collections.push(collection.clone());
        Ok(collection)
    }

    async fn add_mode(&self, collection_id: &str, name: &str) -> Result<CollectionHandle> {
        let mut state = self.state.lock().await;
        let collection = state.collection_mut(collection_id)?;
        let numeric = collection.id.rsplit(':').next().unwrap_or_default().to_string();
        let mode_id = format!("{numeric}:{}", collection.modes.len());
        collection.modes.push(Mode {
            mode_id,
            name: name.to_string(),
        });
        Ok(collection.clone())
    }

    async fn list_variables(&self) -> Result<Vec<Variable>> {
        Ok(self.state.lock().await.variables.clone())
    }

    async fn create_variable(
        &self,
        name: &str,
        collection_id: &str,
        resolved_type: ResolvedType,
    ) -> Result<Variable> {
        validate_name("variable", name).map_err(|e| creation_error("variable", name, e))?;

        let mut state = self.state.lock().await;
        if state
            .variables
            .iter()
            .any(|v| v.name == name && v.variable_collection_id == collection_id)
        {
            return Err(duplicate_error("variable", name));
        }

        let id = format!("VariableID:{}", state.allocate_id());
        state.collection_mut(collection_id)?.variable_ids.push(id.clone());

        let variable = Variable {
            id,
            name: name.to_string(),
            variable_collection_id: collection_id.to_string(),
            resolved_type,
            values_by_mode: BTreeMap::new(),
        };
        state.variables.push(variable.clone());
        Ok(variable)
    }

    async fn set_variable_value(
        &self,
        variable_id: &str,
        mode_id: &str,
        value: VariableValue,
    ) -> Result<Variable> {
        if let Some(number) = value.non_finite() {
            return Err(non_finite_error("variable value", number).into());
        }

        let mut state = self.state.lock().await;
        let state = &mut *state;

        let variable = state.variables.iter_mut().find(|v| v.id == variable_id).ok_or_else(|| {
            DsforgeError::NotFound {
                kind: "variable".to_string(),
                id: variable_id.to_string(),
            }
        })?;

        let collection = state
            .collections
            .iter()
            .find(|c| c.id == variable.variable_collection_id)
            .ok_or_else(|| DsforgeError::NotFound {
                kind: "collection".to_string(),
                id: variable.variable_collection_id.clone(),
            })?;

        if !collection.modes.iter().any(|m| m.mode_id == mode_id) {
            return Err(DsforgeError::UnknownMode {
                collection: collection.name.clone(),
                mode_id: mode_id.to_string(),
            }
            .into());
        }

        if value.resolved_type() != variable.resolved_type {
            return Err(DsforgeError::TypeMismatch {
                variable: variable.name.clone(),
                expected: variable.resolved_type.to_string(),
                actual: value.resolved_type().to_string(),
            }
            .into());
        }

        variable.values_by_mode.insert(mode_id.to_string(), value);
        Ok(variable.clone())
    }

    async fn list_text_styles(&self) -> Result<Vec<TextStyle>> {
        Ok(self.state.lock().await.text_styles.clone())
    }

    async fn create_text_style(&self, name: &str) -> Result<TextStyle> {
        validate_name("text style", name).map_err(|e| creation_error("text style", name, e))?;

        let mut state = self.state.lock().await;
        if state.text_styles.iter().any(|s| s.name == name) {
            return Err(duplicate_error("text style", name));
        }

        let style = TextStyle {
            id: format!("S:{}", state.allocate_id()),
            name: name.to_string(),
            font_size: 12.0,
            font_name: FontName::default(),
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::Percent {
                value: 0.0,
            },
            text_case: None,
            text_decoration: None,
        };
        state.text_styles.push(style.clone());
        Ok(style)
    }

    async fn update_text_style(
        &self,
        style_id: &str,
        properties: TextStyleProperties,
    ) -> Result<TextStyle> {
        if let Some((field, number)) = properties.non_finite() {
            return Err(non_finite_error(field, number).into());
        }
        if let Some(font) = &properties.font_name {
            if !self.loaded_fonts.lock().await.contains(font) {
                return Err(DsforgeError::FontUnavailable {
                    family: font.family.clone(),
                    style: font.style.clone(),
                }
                .into());
            }
        }

        let mut state = self.state.lock().await;
        let style = state.text_styles.iter_mut().find(|s| s.id == style_id).ok_or_else(|| {
            DsforgeError::NotFound {
                kind: "text style".to_string(),
                id: style_id.to_string(),
            }
        })?;

        properties.apply_to(style);
        Ok(style.clone())
    }

    async fn load_font(&self, font: &FontName) -> Result<()> {
        let installed = self.state.lock().await.installed_fonts.contains(font);
        if !installed {
            return Err(DsforgeError::FontUnavailable {
                family: font.family.clone(),
                style: font.style.clone(),
            }
            .into());
        }

        self.loaded_fonts.lock().await.insert(font.clone());
        Ok(())
    }
}
