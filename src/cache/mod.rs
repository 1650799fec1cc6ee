//! Name-keyed idempotent resource cache.
//!
//! [`NamespacedResourceCache`] answers "does a resource named X already exist,
//! and if not, create it" for one resource kind, with at most one
//! find-or-create round trip per distinct name per session. It is the single
//! source of truth for namespace handles while a batch of generators runs, so
//! many callers naming `"Colors"` in sequence share one collection instead of
//! racing to create several.
//!
//! # Backing store
//!
//! The cache only composes the three primitives of a [`ResourceSource`]:
//! list everything, find by exact name, and create by name. Each is an async
//! suspension point that may fail. [`CollectionSource`] adapts a
//! [`DocumentStore`] so collections can be cached.
//!
//! # Lifecycle
//!
//! - Created empty at session start.
//! - [`get`](NamespacedResourceCache::get) adds entries on miss-then-found and
//!   miss-then-create.
//! - [`refresh`](NamespacedResourceCache::refresh) replaces every entry with the
//!   store's current listing; call it before a batch whenever the store may
//!   have changed out of band.
//! - [`clear`](NamespacedResourceCache::clear) drops everything.
//!
//! # Failure semantics
//!
//! Errors from the store propagate unchanged and nothing is memoized for the
//! failed name, so the next `get` starts from scratch. There are no retries.
//!
//! # Concurrency
//!
//! `get` and `refresh` take `&mut self`, so two in-flight resolutions of the
//! same unresolved name cannot race against one cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dsforge::cache::{CollectionSource, NamespacedResourceCache};
//! use dsforge::store::MemoryDocument;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = Arc::new(MemoryDocument::new());
//! let mut cache = NamespacedResourceCache::new(CollectionSource::new(store));
//!
//! let (colors, path) = cache.resolve("Colors/primary").await?;
//! assert_eq!(colors.name, "Colors");
//! assert_eq!(path.qualify("main"), "primary/main");
//!
//! // Second lookup is served from the cache
//! let again = cache.get("Colors").await?;
//! assert_eq!(again.id, colors.id);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::core::DsforgeError;
use crate::models::CollectionHandle;
use crate::path::ResourcePath;
use crate::store::DocumentStore;

/// A backing-store entity addressable by a unique name.
pub trait NamedResource {
    /// Name, unique within the resource kind.
    fn name(&self) -> &str;

    /// Store-assigned identifier.
    fn id(&self) -> &str;
}

impl NamedResource for CollectionHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The three backing-store primitives the cache is built on.
pub trait ResourceSource: Send + Sync {
    /// Handle type returned by the store.
    type Handle: NamedResource + Clone + Send + Sync + std::fmt::Debug;

    /// Resource kind used in logs and errors, e.g. "collection".
    fn kind(&self) -> &'static str;

    /// Every resource of this kind currently in the store.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Self::Handle>>> + Send;

    /// The resource named exactly `name` (case-sensitive), if any.
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<Self::Handle>>> + Send;

    /// Create a resource named `name`.
    fn create(&self, name: &str) -> impl Future<Output = Result<Self::Handle>> + Send;
}

/// Variable collections of a [`DocumentStore`] as a [`ResourceSource`].
#[derive(Debug)]
pub struct CollectionSource<S> {
    store: Arc<S>,
}

impl<S> Clone for CollectionSource<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> CollectionSource<S> {
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            store,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: DocumentStore> ResourceSource for CollectionSource<S> {
    type Handle = CollectionHandle;

    fn kind(&self) -> &'static str {
        "collection"
    }

    async fn list_all(&self) -> Result<Vec<CollectionHandle>> {
        self.store.list_collections().await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CollectionHandle>> {
        self.store.find_collection(name).await
    }

    async fn create(&self, name: &str) -> Result<CollectionHandle> {
        self.store.create_collection(name).await
    }
}

/// Session-scoped name → handle memoization for one resource kind.
#[derive(Debug)]
pub struct NamespacedResourceCache<R: ResourceSource> {
    source: R,
    entries: HashMap<String, R::Handle>,
    hits: usize,
    misses: usize,
}

impl<R: ResourceSource> NamespacedResourceCache<R> {
    /// An empty cache over `source`.
    pub fn new(source: R) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The backing source.
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Resolve `name` to a handle, finding or creating it on a miss.
    ///
    /// Repeated calls for the same name return the cached handle without
    /// touching the store until the next [`clear`](Self::clear) or
    /// [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// Lookup and creation failures are returned exactly as the store raised
    /// them and leave the cache unchanged. A handle whose name differs from
    /// `name` is rejected with [`DsforgeError::NameMismatch`].
    pub async fn get(&mut self, name: &str) -> Result<R::Handle> {
        let kind = self.source.kind();

        if let Some(handle) = self.entries.get(name) {
            self.hits += 1;
            tracing::debug!("Cache HIT for {kind}: {name}");
            return Ok(handle.clone());
        }

        self.misses += 1;
        tracing::debug!("Cache MISS for {kind}: {name}, checking store");

        let handle = match self.source.find_by_name(name).await? {
            Some(existing) => {
                tracing::debug!("Found existing {kind} in store: {name}");
                existing
            }
            None => {
                tracing::debug!("Creating new {kind}: {name}");
                self.source.create(name).await?
            }
        };

        if handle.name() != name {
            return Err(DsforgeError::NameMismatch {
                kind: kind.to_string(),
                requested: name.to_string(),
                actual: handle.name().to_string(),
            }
            .into());
        }

        self.entries.insert(name.to_string(), handle.clone());
        Ok(handle)
    }

    /// Parse `path` and resolve its namespace.
    ///
    /// Returns the namespace handle together with the parsed path, whose
    /// [`qualify`](ResourcePath::qualify) names children inside it.
    pub async fn resolve(&mut self, path: &str) -> Result<(R::Handle, ResourcePath)> {
        let parsed = ResourcePath::parse(path)?;
        let handle = self.get(&parsed.namespace).await?;
        Ok((handle, parsed))
    }

    /// Drop every entry. Does not touch the store.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} cache ({} entries)", self.source.kind(), self.entries.len());
        self.entries.clear();
    }

    /// Replace the cache contents with the store's current listing.
    ///
    /// Entries for resources deleted out of band disappear; resources created
    /// out of band become hits. If listing fails the cache stays empty.
    pub async fn refresh(&mut self) -> Result<()> {
        let kind = self.source.kind();
        tracing::debug!("Refreshing {kind} cache");
        self.clear();

        let resources = self.source.list_all().await?;
        let total = resources.len();
        for resource in resources {
            tracing::debug!("Cached existing {kind}: {}", resource.name());
            // The first resource listed under a name wins, matching find_by_name
            self.entries.entry(resource.name().to_string()).or_insert(resource);
        }

        tracing::debug!("Cache refreshed with {total} {kind}(s)");
        Ok(())
    }

    /// Whether `name` is currently cached.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The cached handle for `name`, without consulting the store.
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&R::Handle> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(hits, misses)` since the cache was created.
    #[must_use]
    pub const fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Hit percentage since the cache was created.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}
