//! The default design system.

use anyhow::{Context, Result};

use super::color::color_token;
use super::presets::semantic_style;
use super::spacing::spacing_system;
use super::typography::{ScaleConfig, TypographySystemConfig, typography_system};
use crate::models::LineHeight;
use crate::query::{self, DocumentData};
use crate::session::Session;
use crate::store::DocumentStore;

/// `(path, factor)` for the default spacing scales, all based at 16.
const SPACING_SCALES: [(&str, f64); 4] = [
    ("Spacing/golden", 1.618),
    ("Spacing/major-third", 1.25),
    ("Spacing/perfect-fourth", 1.333),
    ("Spacing/major-second", 1.125),
];

const SPACING_BASE: f64 = 16.0;

/// `(name, path, [light, dark])` for the default color tokens.
const COLOR_TOKENS: [(&str, &str, [&str; 2]); 6] = [
    ("main", "Colors/primary", ["#007AFF", "#0A84FF"]),
    ("light", "Colors/primary", ["#66B2FF", "#66B8FF"]),
    ("dark", "Colors/primary", ["#0051D5", "#0056D6"]),
    ("success", "Colors/semantic", ["#34C759", "#30D158"]),
    ("warning", "Colors/semantic", ["#FF9500", "#FF9F0A"]),
    ("error", "Colors/semantic", ["#FF3B30", "#FF453A"]),
];

/// Typography created by [`design_system`].
#[must_use]
pub fn default_typography_system() -> TypographySystemConfig {
    let percent = |value| LineHeight::Percent {
        value,
    };
    let pixels = |value| LineHeight::Pixels {
        value,
    };

    TypographySystemConfig::default()
        .scale("Display", ScaleConfig::new(24.0, 1.25).with_anchor("base"))
        .scale("Heading", ScaleConfig::new(20.0, 1.2).with_anchor("base"))
        .scale("Body", ScaleConfig::new(16.0, 1.125).with_anchor("base"))
        .scale("Caption", ScaleConfig::new(12.0, 1.1).with_anchor("base"))
        .semantic("Hero/Title", semantic_style(48.0, "Bold", percent(120.0), -2.0))
        .semantic("Hero/Subtitle", semantic_style(20.0, "Regular", percent(150.0), 0.0))
        .semantic("Button/Large", semantic_style(16.0, "Medium", pixels(24.0), 0.0))
        .semantic("Button/Small", semantic_style(14.0, "Medium", pixels(20.0), 0.0))
}

/// Create the default spacing scales, color tokens, and typography.
///
/// The collection cache is refreshed first so collections created outside
/// this session are reused. Every store call is issued in sequence.
///
/// # Errors
///
/// A failing spacing scale or color token stops the run; what was already
/// created stays in the document. Typography failures are logged and skipped.
pub async fn design_system<S: DocumentStore>(session: &mut Session<S>) -> Result<DocumentData> {
    tracing::info!("Starting design system creation");
    session.collections().refresh().await.context("Failed to refresh collections")?;

    for (path, factor) in SPACING_SCALES {
        spacing_system(session, path, SPACING_BASE, factor, Some("md"))
            .await
            .with_context(|| format!("Failed to create spacing scale {path}"))?;
    }

    for (name, path, colors) in COLOR_TOKENS {
        let colors: Vec<String> = colors.iter().map(|c| (*c).to_string()).collect();
        color_token(session, name, path, &colors)
            .await
            .with_context(|| format!("Failed to create color token {path}/{name}"))?;
    }

    let results = typography_system(session, &default_typography_system()).await;
    tracing::debug!("Typography system created {} groups", results.len());

    let data = query::all(session.store()).await?;
    tracing::info!(
        "Design system complete: {} collections, {} variables, {} text styles",
        data.collections.len(),
        data.variables.len(),
        data.text_styles.len()
    );
    for collection in &data.collections {
        tracing::debug!("Collection: {} - Variables: {}", collection.name, collection.variables);
    }
    for (group, count) in query::style_groups(&data.text_styles) {
        tracing::debug!("Text styles: {group} - Count: {count}");
    }

    let (hits, misses) = session.collections().stats();
    tracing::debug!("Collection cache: {hits} hits, {misses} misses");

    Ok(data)
}
