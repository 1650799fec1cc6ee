//! dsforge - design-system generator
//!
//! Builds design-system primitives (spacing scales, color tokens, and
//! typography scales) inside a design document. The document owns all durable
//! state: variable collections, variables with per-mode values, and text
//! styles. dsforge only asks it to list, find, create, and update them through
//! the [`store::DocumentStore`] trait.
//!
//! # Architecture Overview
//!
//! Callers name things with slash paths such as `"Colors/primary"`. The first
//! segment is a collection; the rest is a folder prefix for the variables
//! created inside it. Collections are resolved through a session-scoped,
//! name-keyed cache so that many generators naming the same collection share
//! one, and a collection is never created twice in a session.
//!
//! ```text
//! "Colors/primary" ──► ResourcePath { namespace: "Colors", sub_path: "primary" }
//!                                │
//!                                ▼
//!                  NamespacedResourceCache::get("Colors")
//!                     hit ─► cached handle
//!                     miss ─► find_by_name ─► create
//!                                │
//!                                ▼
//!                  variable "primary/main" in collection "Colors"
//! ```
//!
//! # Core Modules
//!
//! ## Resource resolution
//! - [`cache`] - Name-keyed idempotent resource cache
//! - [`path`] - Slash path parsing and child name qualification
//! - [`store`] - Backing-store trait and the JSON-persisted in-memory document
//! - [`session`] - Per-run state: store handle, cache, outgoing host events
//!
//! ## Generators
//! - [`variables`] - Immutable variable builder and color parsing
//! - [`systems`] - Spacing, color, and typography generators, presets, and the
//!   default design system
//! - [`query`] - Read-only document summaries
//!
//! ## Host integration
//! - [`handlers`] - Message router and handler middleware
//! - [`cli`] - Command-line interface
//!
//! ## Supporting Modules
//! - [`config`] - User configuration (~/.dsforge/config.toml)
//! - [`constants`] - Scale steps and typography defaults
//! - [`core`] - Error types and user-friendly error reporting
//! - [`models`] - Document data models
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dsforge::session::Session;
//! use dsforge::store::MemoryDocument;
//! use dsforge::systems;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(Arc::new(MemoryDocument::new()));
//!
//! systems::spacing_system(&mut session, "Spacing/golden", 16.0, 1.618, None).await?;
//! systems::color_token(
//!     &mut session,
//!     "main",
//!     "Colors/primary",
//!     &["#007AFF".to_string(), "#0A84FF".to_string()],
//! )
//! .await?;
//! systems::typography_scale(&mut session, "Body", 16.0, 1.125, None).await?;
//! # Ok(())
//! # }
//! ```

// Resource resolution
pub mod cache;
pub mod path;
pub mod session;
pub mod store;

// Generators
pub mod query;
pub mod systems;
pub mod variables;

// Host integration
pub mod cli;
pub mod handlers;

// Supporting modules
pub mod config;
pub mod constants;
pub mod core;
pub mod models;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
