//! Common utilities and traits for CLI commands

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::CliConfig;
use crate::config::DsforgeConfig;
use crate::session::Session;
use crate::store::{DocumentSnapshot, MemoryDocument};

/// Common trait for commands that operate on a document
pub trait CommandExecutor: Sized {
    /// Whether the document is written back after [`run`](Self::run).
    fn modifies_document(&self) -> bool {
        true
    }

    /// Open the document named by `config`, run, and save
    ///
    /// A command that fails partway still saves whatever it changed before
    /// failing, then returns its error. A command that failed without touching
    /// the document leaves the file alone.
    fn execute(self, config: &CliConfig) -> impl std::future::Future<Output = Result<()>> + Send
    where
        Self: Send,
    {
        async move {
            let mut context = CommandContext::open(config).await?;
            let modifies = self.modifies_document();
            let outcome = self.run(&mut context.session).await;
            if modifies {
                match &outcome {
                    Ok(()) => context.save().await?,
                    Err(_) if context.is_modified().await => {
                        tracing::debug!("Saving changes made before the command failed");
                        context.save().await?;
                    }
                    Err(_) => {}
                }
            }
            outcome
        }
    }

    /// Run against an open session
    fn run(
        self,
        session: &mut Session<MemoryDocument>,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// An open document and the session working on it
#[derive(Debug)]
pub struct CommandContext {
    /// Session over the document
    pub session: Session<MemoryDocument>,
    store: Arc<MemoryDocument>,
    document_path: PathBuf,
    opened: DocumentSnapshot,
}

impl CommandContext {
    /// Load configuration and the document it points at
    ///
    /// # Errors
    /// Returns an error if the configuration or the document cannot be read
    pub async fn open(config: &CliConfig) -> Result<Self> {
        let settings = DsforgeConfig::load_with_optional(config.config_path.clone())
            .await
            .context("Failed to load dsforge configuration")?;
        let document_path = settings.document_path(config.document_path.as_deref());
        tracing::debug!("Using document {}", document_path.display());

        let store = Arc::new(MemoryDocument::load_from(&document_path).await.with_context(|| {
            format!("Failed to open document: {}", document_path.display())
        })?);
        let opened = store.snapshot().await;
        let session = Session::with_config(Arc::clone(&store), settings);

        Ok(Self {
            session,
            store,
            document_path,
            opened,
        })
    }

    /// Whether the document differs from what was opened
    pub async fn is_modified(&self) -> bool {
        self.store.snapshot().await != self.opened
    }

    /// Write the document back to disk
    pub async fn save(&self) -> Result<()> {
        self.store.save_to(&self.document_path).await
    }

    #[must_use]
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}
