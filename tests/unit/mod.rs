//! Unit test suite for dsforge
//!
//! Fast tests that exercise the library API directly against in-memory
//! stores. No process is spawned and no file is touched.
//!
//! # Running Unit Tests
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! # Test Organization
//!
//! - **cache**: Idempotent resolution, failure handling, and refresh of the name-keyed cache
//! - **scales**: Spacing and typography scale values and anchors
//! - **builder**: Variable builder against single- and multi-mode collections
//! - **typography**: Font fallback and partial-batch behavior of typography generators

mod builder;
mod scales;
mod typography;
