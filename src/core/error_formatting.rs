//! Error formatting utilities for dsforge
//!
//! Converts internal errors into clear, actionable messages for users.

use super::*;
use strsim::levenshtein;

/// Maximum Levenshtein distance, as a percentage of the target length, for a
/// "did you mean" suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Find the closest candidate to `target` using Levenshtein distance.
///
/// Returns `None` when nothing is within [`SIMILARITY_THRESHOLD_PERCENT`] of the
/// target's length.
#[must_use]
pub fn closest_match<'a>(target: &str, candidates: &'a [String]) -> Option<&'a str> {
    let limit = (target.len() * SIMILARITY_THRESHOLD_PERCENT / 100).max(1);
    candidates
        .iter()
        .map(|candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= limit)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.as_str())
}

/// Convert any error into a user-friendly format with contextual suggestions
///
/// Walks the error chain looking for a [`DsforgeError`]; anything else is
/// reported as [`DsforgeError::Other`] with the full chain as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(dsforge_error) = current_error.downcast_ref::<DsforgeError>() {
            let mut ctx = create_error_context(dsforge_error);
            // Keep the outer anyhow context visible when the typed error is nested
            if ctx.details.is_none() && error.chain().count() > 1 {
                ctx = ctx.with_details(format!("{error:#}"));
            }
            return ctx;
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return ErrorContext::new(DsforgeError::Other {
            message: io_error.to_string(),
        })
        .with_suggestion("Check that the document path exists and is writable");
    }

    let message = error.to_string();
    let details = format!("{error:#}");
    let ctx = ErrorContext::new(DsforgeError::Other {
        message,
    });
    if error.chain().count() > 1 {
        ctx.with_details(details)
    } else {
        ctx
    }
}

/// Build an [`ErrorContext`] for a specific [`DsforgeError`]
pub fn create_error_context(error: &DsforgeError) -> ErrorContext {
    match error {
        DsforgeError::UnknownPreset {
            name,
            available,
        } => {
            let ctx = ErrorContext::new(error.clone())
                .with_details(format!("Available presets: {}", available.join(", ")));
            match closest_match(name, available) {
                Some(candidate) => ctx.with_suggestion(format!("Did you mean '{candidate}'?")),
                None => ctx.with_suggestion("Run 'dsforge preset --help' to list presets"),
            }
        }
        DsforgeError::UnknownAnchor {
            anchor,
            available,
            ..
        } => {
            let ctx = ErrorContext::new(error.clone())
                .with_details(format!("Scale steps: {}", available.join(", ")));
            match closest_match(anchor, available) {
                Some(candidate) => ctx.with_suggestion(format!("Did you mean '{candidate}'?")),
                None => ctx.with_suggestion("Pick one of the scale steps as the anchor"),
            }
        }
        DsforgeError::InvalidColor {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Use six-digit hex colors such as #007AFF"),
        DsforgeError::InvalidPath {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Paths look like 'Collection' or 'Collection/group/sub-group'"),
        DsforgeError::FontUnavailable {
            ..
        }
        | DsforgeError::NoFontAvailable {
            ..
        } => ErrorContext::new(error.clone()).with_suggestion(
            "Add the font to the document's installed fonts or configure fallback_fonts",
        ),
        DsforgeError::DuplicateName {
            kind,
            name,
        } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Rename or remove the existing {kind} '{name}'")),
        DsforgeError::ConfigError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check the syntax of your dsforge config.toml"),
        DsforgeError::InvalidMessage {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Messages are JSON objects with a 'type' field, one per line"),
        _ => ErrorContext::new(error.clone()),
    }
}
