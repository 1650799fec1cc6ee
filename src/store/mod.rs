//! Backing-store abstraction for design documents.
//!
//! A [`DocumentStore`] is the only way dsforge touches durable state. Every
//! method is an async suspension point that may fail; implementations report
//! failures as [`DsforgeError`](crate::core::DsforgeError) values
//! (`LookupFailed`, `CreateFailed`, `NotFound`, ...) wrapped in
//! `anyhow::Error`.
//!
//! [`MemoryDocument`] is the bundled implementation: an in-memory document
//! that can be persisted to JSON.

pub mod memory;

pub use memory::{DocumentSnapshot, MemoryDocument};

use anyhow::Result;
use std::future::Future;

use crate::models::{
    CollectionHandle, FontName, ResolvedType, TextStyle, TextStyleProperties, Variable,
    VariableValue,
};

/// Async CRUD surface of a design document.
pub trait DocumentStore: Send + Sync + 'static {
    /// All variable collections in the document.
    fn list_collections(&self) -> impl Future<Output = Result<Vec<CollectionHandle>>> + Send;

    /// The collection whose name is exactly `name`, if any.
    fn find_collection(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<CollectionHandle>>> + Send;

    /// Create a collection with a single default mode.
    fn create_collection(&self, name: &str) -> impl Future<Output = Result<CollectionHandle>> + Send;

    /// Append a mode to a collection and return the updated handle.
    fn add_mode(
        &self,
        collection_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<CollectionHandle>> + Send;

    /// All variables in the document, across collections.
    fn list_variables(&self) -> impl Future<Output = Result<Vec<Variable>>> + Send;

    /// Create a variable inside a collection.
    fn create_variable(
        &self,
        name: &str,
        collection_id: &str,
        resolved_type: ResolvedType,
    ) -> impl Future<Output = Result<Variable>> + Send;

    /// Set the value of a variable for one mode of its collection.
    fn set_variable_value(
        &self,
        variable_id: &str,
        mode_id: &str,
        value: VariableValue,
    ) -> impl Future<Output = Result<Variable>> + Send;

    /// All text styles in the document.
    fn list_text_styles(&self) -> impl Future<Output = Result<Vec<TextStyle>>> + Send;

    /// Create a text style with default properties.
    fn create_text_style(&self, name: &str) -> impl Future<Output = Result<TextStyle>> + Send;

    /// Apply a partial update to a text style.
    fn update_text_style(
        &self,
        style_id: &str,
        properties: TextStyleProperties,
    ) -> impl Future<Output = Result<TextStyle>> + Send;

    /// Make a font available for text styles.
    ///
    /// Fails with `FontUnavailable` when the document cannot provide it.
    fn load_font(&self, font: &FontName) -> impl Future<Output = Result<()>> + Send;
}
