//! Integration test suite for dsforge
//!
//! End-to-end tests that run the `dsforge` binary against documents and
//! config files in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **commands**: Generator commands and their effect on the saved document
//! - **config**: Config file discovery, document location, and font settings
//! - **errors**: Exit codes and user-facing error messages
//! - **query**: Listing and JSON output of the query command
//! - **serve**: Host message loop over stdin/stdout

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod commands;
mod config;
mod errors;
mod query;
mod serve;
