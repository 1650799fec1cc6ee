//! Common test utilities for dsforge integration tests
//!
//! [`TestProject`] owns a temporary directory holding the config file and the
//! design document, and builds `dsforge` commands pointed at both.

// Not every suite uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use dsforge::store::{DocumentSnapshot, MemoryDocument};
use dsforge::test_utils::{ConfigFixture, DocumentFixture};

/// A temporary project directory for CLI tests
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
    config_path: PathBuf,
    document_path: PathBuf,
}

impl TestProject {
    /// Empty project: no config file and no document yet
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            config_path: root.join("config.toml"),
            document_path: root.join("design-document.json"),
            root,
            _temp_dir: temp_dir,
        })
    }

    /// Project with the given config file written
    pub fn with_config(fixture: &ConfigFixture) -> Result<Self> {
        let project = Self::new()?;
        fixture.write_to(&project.root)?;
        Ok(project)
    }

    /// Project with the given document already on disk
    pub fn with_document(fixture: &DocumentFixture) -> Result<Self> {
        let project = Self::new()?;
        fixture.write_to(&project.root)?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// `dsforge` with `--config` and `--document` pointing into the project
    pub fn dsforge(&self) -> Command {
        let mut cmd = self.bare_dsforge();
        cmd.arg("--config").arg(&self.config_path).arg("--document").arg(&self.document_path);
        cmd
    }

    /// `dsforge` run inside the project with no path flags
    pub fn bare_dsforge(&self) -> Command {
        let mut cmd = Command::cargo_bin("dsforge").unwrap();
        cmd.current_dir(&self.root)
            .env("HOME", &self.root)
            .env("NO_COLOR", "1")
            .env_remove("DSFORGE_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Parse the document the CLI wrote
    pub fn read_document(&self) -> Result<DocumentSnapshot> {
        read_snapshot(&self.document_path)
    }

    /// Load the document as a store for API-level assertions
    pub async fn load_store(&self) -> Result<MemoryDocument> {
        MemoryDocument::load_from(&self.document_path).await
    }
}

/// Parse a document file written by dsforge
pub fn read_snapshot(path: &Path) -> Result<DocumentSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse document {}", path.display()))
}
