//! Test utilities for dsforge
//!
//! Helpers shared by unit tests and the `tests/` suites: logging setup,
//! instrumented backing-store doubles, and document/config fixtures.
//!
//! # Example
//!
//! ```rust,no_run
//! use dsforge::cache::NamespacedResourceCache;
//! use dsforge::test_utils::RecordingSource;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut cache = NamespacedResourceCache::new(RecordingSource::with_resources(&["Colors"]));
//! cache.get("Colors").await?;
//! assert_eq!(cache.source().create_calls(), 0);
//! # Ok(())
//! # }
//! ```

pub mod doubles;
pub mod fixtures;

pub use doubles::{FakeResource, FlakyDocument, RecordingSource};
pub use fixtures::{ConfigFixture, DocumentFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=dsforge=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
