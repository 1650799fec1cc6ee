//! Message routing.

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::Handler;
use super::messages::message_type;
use crate::session::Session;
use crate::store::DocumentStore;

/// Maps message `type` strings to handlers.
pub struct Router<S: DocumentStore> {
    routes: HashMap<String, Box<dyn Handler<S>>>,
}

impl<S: DocumentStore> Default for Router<S> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }
}

impl<S: DocumentStore> fmt::Debug for Router<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("routes", &self.message_types()).finish()
    }
}

impl<S: DocumentStore> Router<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `message_type` to `handler`, replacing any earlier route.
    #[must_use]
    pub fn route(mut self, message_type: impl Into<String>, handler: impl Handler<S> + 'static) -> Self {
        let message_type = message_type.into();
        if self.routes.insert(message_type.clone(), Box::new(handler)).is_some() {
            tracing::debug!("Replaced handler for message type: {message_type}");
        }
        self
    }

    /// Whether a handler is registered for `message_type`.
    #[must_use]
    pub fn handles(&self, message_type: &str) -> bool {
        self.routes.contains_key(message_type)
    }

    /// Registered message types, sorted.
    #[must_use]
    pub fn message_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Run the handler for `message`'s `type`.
    ///
    /// An unknown type is logged and ignored.
    ///
    /// # Errors
    ///
    /// `InvalidMessage` when the message has no string `type`; otherwise
    /// whatever the handler returns.
    pub async fn dispatch(&self, session: &mut Session<S>, message: &Value) -> Result<()> {
        let message_type = message_type(message)?;
        match self.routes.get(message_type) {
            Some(handler) => handler.call(session, message).await,
            None => {
                tracing::warn!("Unknown message type: {message_type}");
                Ok(())
            }
        }
    }
}
