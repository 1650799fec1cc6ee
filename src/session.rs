//! Per-run orchestration state.
//!
//! A [`Session`] is created when a document is opened and dropped when the
//! run ends. It owns the collection cache, so cache lifetime equals session
//! lifetime; generators and handlers receive it by `&mut` rather than reaching
//! for shared global state.

use serde::Serialize;
use std::sync::Arc;

use crate::cache::{CollectionSource, NamespacedResourceCache};
use crate::config::DsforgeConfig;
use crate::store::DocumentStore;

/// Something the session wants the host UI to show or receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    /// A toast-style notification.
    Notify { message: String, error: bool },
    /// A message posted to the UI.
    PostMessage { payload: serde_json::Value },
}

/// Collection cache over a session's store.
pub type CollectionCache<S> = NamespacedResourceCache<CollectionSource<S>>;

/// State for one run against one document.
#[derive(Debug)]
pub struct Session<S: DocumentStore> {
    store: Arc<S>,
    collections: CollectionCache<S>,
    config: DsforgeConfig,
    events: Vec<HostEvent>,
    closed: bool,
}

impl<S: DocumentStore> Session<S> {
    /// Start a session with default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, DsforgeConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: DsforgeConfig) -> Self {
        let collections = NamespacedResourceCache::new(CollectionSource::new(Arc::clone(&store)));
        Self {
            store,
            collections,
            config,
            events: Vec::new(),
            closed: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub const fn config(&self) -> &DsforgeConfig {
        &self.config
    }

    /// The session's collection cache.
    pub const fn collections(&mut self) -> &mut CollectionCache<S> {
        &mut self.collections
    }

    /// Queue a notification for the host.
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.events.push(HostEvent::Notify {
            message,
            error: false,
        });
    }

    /// Queue an error notification for the host.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.events.push(HostEvent::Notify {
            message: message.into(),
            error: true,
        });
    }

    /// Queue a message for the UI.
    pub fn post_message(&mut self, payload: serde_json::Value) {
        self.events.push(HostEvent::PostMessage {
            payload,
        });
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued so far, without draining them.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Mark the session as finished; the host loop stops after this.
    pub fn close(&mut self) {
        tracing::debug!("Session closed");
        self.closed = true;
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}
