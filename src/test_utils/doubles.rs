//! Instrumented backing-store doubles.
//!
//! [`RecordingSource`] is a [`ResourceSource`] that counts every primitive
//! call and can be told to fail lookups or creations for specific names.
//! [`FlakyDocument`] wraps a [`MemoryDocument`] and rejects creation of chosen
//! names, for exercising partial-batch behavior of the generators.

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::cache::{NamedResource, ResourceSource};
use crate::core::DsforgeError;
use crate::models::{
    CollectionHandle, FontName, ResolvedType, TextStyle, TextStyleProperties, Variable,
    VariableValue,
};
use crate::store::{DocumentStore, MemoryDocument};

/// Minimal named resource held by [`RecordingSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeResource {
    pub id: String,
    pub name: String,
}

impl FakeResource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl NamedResource for FakeResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A [`ResourceSource`] that records calls and injects failures.
#[derive(Debug, Default)]
pub struct RecordingSource {
    resources: Mutex<Vec<FakeResource>>,
    failing_creates: Mutex<HashSet<String>>,
    failing_lookups: Mutex<HashSet<String>>,
    renames: Mutex<HashMap<String, String>>,
    failing_list: AtomicBool,
    list_calls: AtomicUsize,
    find_calls: AtomicUsize,
    create_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl RecordingSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that already holds resources with the given names.
    #[must_use]
    pub fn with_resources(names: &[&str]) -> Self {
        let resources = names
            .iter()
            .enumerate()
            .map(|(i, name)| FakeResource::new(format!("existing-{i}"), *name))
            .collect();
        Self {
            resources: Mutex::new(resources),
            ..Self::default()
        }
    }

    /// Make every `create(name)` fail until [`allow_create`](Self::allow_create).
    pub async fn fail_create(&self, name: &str) {
        self.failing_creates.lock().await.insert(name.to_string());
    }

    pub async fn allow_create(&self, name: &str) {
        self.failing_creates.lock().await.remove(name);
    }

    /// Make every `find_by_name(name)` fail.
    pub async fn fail_lookup(&self, name: &str) {
        self.failing_lookups.lock().await.insert(name.to_string());
    }

    /// Make `list_all` fail until [`allow_list`](Self::allow_list).
    pub fn fail_list(&self) {
        self.failing_list.store(true, Ordering::SeqCst);
    }

    pub fn allow_list(&self) {
        self.failing_list.store(false, Ordering::SeqCst);
    }

    /// Have `create(requested)` return a resource named `actual`.
    pub async fn rename_on_create(&self, requested: &str, actual: &str) {
        self.renames.lock().await.insert(requested.to_string(), actual.to_string());
    }

    /// Replace the store contents, simulating out-of-band edits.
    pub async fn replace_all(&self, resources: Vec<FakeResource>) {
        *self.resources.lock().await = resources;
    }

    pub async fn resources(&self) -> Vec<FakeResource> {
        self.resources.lock().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl ResourceSource for RecordingSource {
    type Handle = FakeResource;

    fn kind(&self) -> &'static str {
        "resource"
    }

    async fn list_all(&self) -> Result<Vec<FakeResource>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_list.load(Ordering::SeqCst) {
            return Err(DsforgeError::LookupFailed {
                kind: "resource".to_string(),
                name: "*".to_string(),
                reason: "injected listing failure".to_string(),
            }
            .into());
        }
        Ok(self.resources.lock().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<FakeResource>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_lookups.lock().await.contains(name) {
            return Err(DsforgeError::LookupFailed {
                kind: "resource".to_string(),
                name: name.to_string(),
                reason: "injected lookup failure".to_string(),
            }
            .into());
        }
        Ok(self.resources.lock().await.iter().find(|r| r.name == name).cloned())
    }

    async fn create(&self, name: &str) -> Result<FakeResource> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_creates.lock().await.contains(name) {
            return Err(DsforgeError::CreateFailed {
                kind: "resource".to_string(),
                name: name.to_string(),
                reason: "injected creation failure".to_string(),
            }
            .into());
        }

        let stored_name =
            self.renames.lock().await.get(name).cloned().unwrap_or_else(|| name.to_string());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let resource = FakeResource::new(format!("created-{id}"), stored_name);
        self.resources.lock().await.push(resource.clone());
        Ok(resource)
    }
}

/// A [`MemoryDocument`] that refuses to create resources with chosen names.
#[derive(Debug, Default)]
pub struct FlakyDocument {
    inner: MemoryDocument,
    rejected: Mutex<HashSet<String>>,
    create_calls: AtomicUsize,
}

impl FlakyDocument {
    #[must_use]
    pub fn new(inner: MemoryDocument) -> Self {
        Self {
            inner,
            rejected: Mutex::new(HashSet::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Reject any collection, variable, or text style creation named `name`.
    pub async fn reject(&self, name: &str) {
        self.rejected.lock().await.insert(name.to_string());
    }

    pub const fn inner(&self) -> &MemoryDocument {
        &self.inner
    }

    /// Number of create calls of any kind, including rejected ones.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    async fn check(&self, kind: &str, name: &str) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.rejected.lock().await.contains(name) {
            return Err(DsforgeError::CreateFailed {
                kind: kind.to_string(),
                name: name.to_string(),
                reason: "rejected by test store".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl DocumentStore for FlakyDocument {
    async fn list_collections(&self) -> Result<Vec<CollectionHandle>> {
        self.inner.list_collections().await
    }

    async fn find_collection(&self, name: &str) -> Result<Option<CollectionHandle>> {
        self.inner.find_collection(name).await
    }

    async fn create_collection(&self, name: &str) -> Result<CollectionHandle> {
        self.check("collection", name).await?;
        self.inner.create_collection(name).await
    }

    async fn add_mode(&self, collection_id: &str, name: &str) -> Result<CollectionHandle> {
        self.inner.add_mode(collection_id, name).await
    }

    async fn list_variables(&self) -> Result<Vec<Variable>> {
        self.inner.list_variables().await
    }

    async fn create_variable(
        &self,
        name: &str,
        collection_id: &str,
        resolved_type: ResolvedType,
    ) -> Result<Variable> {
        self.check("variable", name).await?;
        self.inner.create_variable(name, collection_id, resolved_type).await
    }

    async fn set_variable_value(
        &self,
        variable_id: &str,
        mode_id: &str,
        value: VariableValue,
    ) -> Result<Variable> {
        self.inner.set_variable_value(variable_id, mode_id, value).await
    }

    async fn list_text_styles(&self) -> Result<Vec<TextStyle>> {
        self.inner.list_text_styles().await
    }

    async fn create_text_style(&self, name: &str) -> Result<TextStyle> {
        self.check("text style", name).await?;
        self.inner.create_text_style(name).await
    }

    async fn update_text_style(
        &self,
        style_id: &str,
        properties: TextStyleProperties,
    ) -> Result<TextStyle> {
        self.inner.update_text_style(style_id, properties).await
    }

    async fn load_font(&self, font: &FontName) -> Result<()> {
        self.inner.load_font(font).await
    }
}
