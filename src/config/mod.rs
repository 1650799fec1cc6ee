//! Configuration management for dsforge
//!
//! dsforge reads one optional TOML file of user settings ([`DsforgeConfig`]):
//! which document to operate on, the default and fallback fonts for text
//! styles, and the line height of generated typography scales. Command-line
//! flags override it, and a missing file means built-in defaults.
//!
//! # Lookup order
//!
//! 1. `--config <path>`
//! 2. `DSFORGE_CONFIG`
//! 3. `~/.dsforge/config.toml` (`%LOCALAPPDATA%\dsforge\config.toml` on Windows)

mod global;

pub use global::DsforgeConfig;
