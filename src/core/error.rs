//! Error handling for dsforge
//!
//! This module provides the error types and user-friendly error reporting for
//! dsforge. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling inside the library
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DsforgeError`] - Enumerated failure cases of document and generator operations
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Backing store**: [`DsforgeError::LookupFailed`], [`DsforgeError::CreateFailed`],
//!   [`DsforgeError::NotFound`], [`DsforgeError::DuplicateName`]
//! - **Cache invariants**: [`DsforgeError::NameMismatch`], [`DsforgeError::InvalidPath`]
//! - **Values**: [`DsforgeError::TypeMismatch`], [`DsforgeError::UnknownMode`],
//!   [`DsforgeError::InvalidColor`], [`DsforgeError::InvalidNumber`]
//! - **Generators**: [`DsforgeError::UnknownAnchor`], [`DsforgeError::UnknownPreset`]
//! - **Fonts**: [`DsforgeError::FontUnavailable`], [`DsforgeError::NoFontAvailable`]
//! - **Messaging and configuration**: [`DsforgeError::InvalidMessage`],
//!   [`DsforgeError::ConfigError`]
//!
//! Use [`user_friendly_error`](crate::core::user_friendly_error) to turn any
//! `anyhow::Error` into an [`ErrorContext`] for display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dsforge::core::{DsforgeError, ErrorContext};
//!
//! let error = DsforgeError::UnknownPreset {
//!     name: "modrn".to_string(),
//!     available: vec!["modern".to_string(), "classic".to_string()],
//! };
//! let context = ErrorContext::new(error).with_suggestion("Did you mean 'modern'?");
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for dsforge operations
///
/// Backing-store implementations raise [`LookupFailed`](Self::LookupFailed) and
/// [`CreateFailed`](Self::CreateFailed); the resource cache passes them through
/// untouched so callers can decide whether to retry, abort, or continue.
#[derive(Error, Debug, Clone)]
pub enum DsforgeError {
    /// A backing-store query failed
    #[error("Failed to look up {kind} '{name}': {reason}")]
    LookupFailed {
        /// Resource kind, e.g. "collection"
        kind: String,
        /// Name that was being looked up
        name: String,
        /// Reason reported by the store
        reason: String,
    },

    /// The backing store rejected a creation request
    #[error("Failed to create {kind} '{name}': {reason}")]
    CreateFailed {
        /// Resource kind, e.g. "collection"
        kind: String,
        /// Requested name
        name: String,
        /// Reason reported by the store
        reason: String,
    },

    /// A store returned a handle whose name differs from the requested one
    #[error("Store returned {kind} '{actual}' when '{requested}' was requested")]
    NameMismatch {
        /// Resource kind
        kind: String,
        /// Name passed to the cache
        requested: String,
        /// Name carried by the returned handle
        actual: String,
    },

    /// A namespace path could not be parsed
    #[error("Invalid resource path '{path}': {reason}")]
    InvalidPath {
        /// The offending path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// A resource name breaks the document's naming rules
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        /// Resource kind
        kind: String,
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A resource with this name already exists
    #[error("A {kind} named '{name}' already exists")]
    DuplicateName {
        /// Resource kind
        kind: String,
        /// The duplicated name
        name: String,
    },

    /// A referenced resource does not exist
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Resource kind
        kind: String,
        /// Identifier that failed to resolve
        id: String,
    },

    /// A value does not match the variable's resolved type
    #[error("Variable '{variable}' expects {expected} values, got {actual}")]
    TypeMismatch {
        /// Variable name
        variable: String,
        /// Resolved type of the variable
        expected: String,
        /// Type of the supplied value
        actual: String,
    },

    /// A mode id is not part of the variable's collection
    #[error("Mode '{mode_id}' does not exist in collection '{collection}'")]
    UnknownMode {
        /// Collection name
        collection: String,
        /// The unknown mode id
        mode_id: String,
    },

    /// A hex color could not be parsed
    #[error("Invalid hex color '{value}', expected #RRGGBB")]
    InvalidColor {
        /// The offending value
        value: String,
    },

    /// A number that would not survive being stored in the document
    #[error("Invalid {name} {value}: {reason}")]
    InvalidNumber {
        /// What the number is, e.g. "factor" or "font size"
        name: String,
        /// The offending value
        value: f64,
        /// Why it was rejected
        reason: String,
    },

    /// The anchor step is not part of the scale
    #[error("Unknown anchor '{anchor}' for {scale} scale")]
    UnknownAnchor {
        /// Scale kind, "spacing" or "typography"
        scale: String,
        /// The requested anchor
        anchor: String,
        /// Valid anchor names
        available: Vec<String>,
    },

    /// No typography preset with this name
    #[error("Unknown typography preset: {name}")]
    UnknownPreset {
        /// The requested preset
        name: String,
        /// Known preset names
        available: Vec<String>,
    },

    /// A font is not installed in the document
    #[error("Font '{family} {style}' is not available")]
    FontUnavailable {
        /// Font family
        family: String,
        /// Font style
        style: String,
    },

    /// Neither the requested font nor any fallback could be loaded
    #[error("Could not load any font. Please ensure {tried} is available.")]
    NoFontAvailable {
        /// Human-readable list of the families that were tried
        tried: String,
    },

    /// An incoming host message was malformed
    #[error("Invalid '{message_type}' message: {reason}")]
    InvalidMessage {
        /// Message `type` field
        message_type: String,
        /// Why decoding failed
        reason: String,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper carrying a suggestion and extra details for CLI display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DsforgeError,
    /// Actionable suggestion for the user
    pub suggestion: Option<String>,
    /// Additional explanation
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: DsforgeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}
