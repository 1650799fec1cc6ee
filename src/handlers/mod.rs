//! Host message handling.
//!
//! A host (the CLI's `serve` loop, or anything embedding the library) feeds
//! JSON messages to a [`Router`], which looks up the handler registered for
//! the message's `type` and runs it against the session. Handlers report back
//! through the session's event queue: notifications and posted messages.
//!
//! # Message types
//!
//! | Type                       | Payload                                  |
//! |----------------------------|------------------------------------------|
//! | `get-variables`            | none                                     |
//! | `create-design-system`     | none                                     |
//! | `create-custom-spacing`    | `path`, `base`, `factor`, `anchor?`      |
//! | `create-custom-typography` | `name`, `baseSize`, `factor`, `anchor?`  |
//! | `create-text-style`        | `name`, `properties`                     |
//! | `create-typography-preset` | `preset`                                 |
//! | `create-typography-system` | none                                     |
//! | `close`                    | none                                     |
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dsforge::handlers::default_router;
//! use dsforge::session::Session;
//! use dsforge::store::MemoryDocument;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let router = default_router();
//! let mut session = Session::new(Arc::new(MemoryDocument::new()));
//! router
//!     .dispatch(&mut session, &serde_json::json!({"type": "create-design-system"}))
//!     .await?;
//! for event in session.drain_events() {
//!     println!("{}", serde_json::to_string(&event)?);
//! }
//! # Ok(())
//! # }
//! ```

mod builtin;
pub mod messages;
mod middleware;
mod router;

pub use middleware::{ErrorReporting, Logging, with_error_reporting, with_logging};
pub use router::Router;

use anyhow::Result;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::session::Session;
use crate::store::DocumentStore;

/// Something that can handle a host message.
pub trait Handler<S: DocumentStore>: Send + Sync {
    fn call<'a>(&'a self, session: &'a mut Session<S>, message: &'a Value) -> BoxFuture<'a, Result<()>>;
}

/// A [`Handler`] backed by a function.
#[derive(Debug, Clone, Copy)]
pub struct FnHandler<F> {
    f: F,
}

/// Adapt a function returning a boxed future into a [`Handler`].
pub fn handler_fn<S, F>(f: F) -> FnHandler<F>
where
    S: DocumentStore,
    F: for<'a> Fn(&'a mut Session<S>, &'a Value) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    FnHandler {
        f,
    }
}

impl<S, F> Handler<S> for FnHandler<F>
where
    S: DocumentStore,
    F: for<'a> Fn(&'a mut Session<S>, &'a Value) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    fn call<'a>(&'a self, session: &'a mut Session<S>, message: &'a Value) -> BoxFuture<'a, Result<()>> {
        (self.f)(session, message)
    }
}

/// The standard wrapping for a registered handler.
fn decorated<S, F>(name: &str, f: F) -> Logging<ErrorReporting<FnHandler<F>>>
where
    S: DocumentStore,
    F: for<'a> Fn(&'a mut Session<S>, &'a Value) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    with_logging(name, with_error_reporting(name, handler_fn(f)))
}

/// A router with every built-in message type registered.
#[must_use]
pub fn default_router<S: DocumentStore>() -> Router<S> {
    use messages::{
        CLOSE, CREATE_CUSTOM_SPACING, CREATE_CUSTOM_TYPOGRAPHY, CREATE_DESIGN_SYSTEM,
        CREATE_TEXT_STYLE, CREATE_TYPOGRAPHY_PRESET, CREATE_TYPOGRAPHY_SYSTEM, GET_VARIABLES,
    };

    Router::new()
        .route(GET_VARIABLES, decorated(GET_VARIABLES, builtin::get_variables::<S>))
        .route(
            CREATE_DESIGN_SYSTEM,
            decorated(CREATE_DESIGN_SYSTEM, builtin::create_design_system::<S>),
        )
        .route(
            CREATE_CUSTOM_SPACING,
            decorated(CREATE_CUSTOM_SPACING, builtin::create_custom_spacing::<S>),
        )
        .route(
            CREATE_CUSTOM_TYPOGRAPHY,
            decorated(CREATE_CUSTOM_TYPOGRAPHY, builtin::create_custom_typography::<S>),
        )
        .route(CREATE_TEXT_STYLE, decorated(CREATE_TEXT_STYLE, builtin::create_text_style::<S>))
        .route(
            CREATE_TYPOGRAPHY_PRESET,
            decorated(CREATE_TYPOGRAPHY_PRESET, builtin::create_typography_preset::<S>),
        )
        .route(
            CREATE_TYPOGRAPHY_SYSTEM,
            decorated(CREATE_TYPOGRAPHY_SYSTEM, builtin::create_typography_system::<S>),
        )
        .route(CLOSE, decorated(CLOSE, builtin::close::<S>))
}
