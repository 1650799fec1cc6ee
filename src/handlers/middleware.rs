//! Handler middleware.
//!
//! Each wrapper is itself a [`Handler`], so they nest:
//! `with_logging(name, with_error_reporting(name, handler))` logs around a
//! handler whose failures are also reported to the host.

use anyhow::Result;
use futures::future::BoxFuture;
use serde_json::Value;

use super::Handler;
use crate::session::Session;
use crate::store::DocumentStore;

/// Logs a handler's invocation and completion.
#[derive(Debug, Clone)]
pub struct Logging<H> {
    name: String,
    inner: H,
}

/// Queues an error notification when a handler fails, then re-raises.
#[derive(Debug, Clone)]
pub struct ErrorReporting<H> {
    name: String,
    inner: H,
}

/// Wrap `handler` so its runs are logged under `name`.
pub fn with_logging<H>(name: impl Into<String>, handler: H) -> Logging<H> {
    Logging {
        name: name.into(),
        inner: handler,
    }
}

/// Wrap `handler` so failures become `"Error: <message>"` notifications.
pub fn with_error_reporting<H>(name: impl Into<String>, handler: H) -> ErrorReporting<H> {
    ErrorReporting {
        name: name.into(),
        inner: handler,
    }
}

impl<S: DocumentStore, H: Handler<S>> Handler<S> for Logging<H> {
    fn call<'a>(&'a self, session: &'a mut Session<S>, message: &'a Value) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            tracing::debug!("Executing {} with args: {message}", self.name);
            let result = self.inner.call(session, message).await;
            if result.is_ok() {
                tracing::info!("Completed {}", self.name);
            }
            result
        })
    }
}

impl<S: DocumentStore, H: Handler<S>> Handler<S> for ErrorReporting<H> {
    fn call<'a>(&'a self, session: &'a mut Session<S>, message: &'a Value) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.inner.call(session, message).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    tracing::error!("Error in {}: {e:#}", self.name);
                    session.notify_error(format!("Error: {e}"));
                    Err(e)
                }
            }
        })
    }
}
