//! Core types for dsforge
//!
//! The foundation shared by every other module: the [`DsforgeError`] enum,
//! the [`ErrorContext`] wrapper used for CLI reporting, and the
//! [`user_friendly_error`] conversion applied in `main`.
//!
//! # Examples
//!
//! ```rust
//! use dsforge::core::{DsforgeError, user_friendly_error};
//!
//! let error = anyhow::Error::from(DsforgeError::InvalidColor {
//!     value: "#GGGGGG".to_string(),
//! });
//! let friendly = user_friendly_error(error);
//! assert!(friendly.suggestion.is_some());
//! ```

pub mod error;
mod error_formatting;

pub use error::{DsforgeError, ErrorContext};
pub use error_formatting::{closest_match, create_error_context, user_friendly_error};
