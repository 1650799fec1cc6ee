//! Typography scales and text styles.
//!
//! Text styles need their font loaded before any property can be set, so
//! every path through here loads a font first. [`create_text_style`] is the
//! only place that walks the configured fallback chain; the scale generators
//! pre-load fonts as an optimization and only log when that fails.

use anyhow::Result;
use serde::Serialize;

use super::{anchor_index, modular_scale};
use crate::constants::{DEFAULT_TYPOGRAPHY_ANCHOR, SEMANTIC_SCALE, TYPOGRAPHY_STEPS};
use crate::core::DsforgeError;
use crate::models::{FontName, LetterSpacing, LineHeight, TextStyle, TextStyleProperties};
use crate::session::Session;
use crate::store::DocumentStore;

/// Parameters for one typography scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleConfig {
    pub base_size: f64,
    pub factor: f64,
    /// Step that receives `base_size`; `None` means `base`.
    pub anchor: Option<String>,
    /// Font for the scale's styles; `None` means the configured default font.
    pub font_name: Option<FontName>,
}

impl ScaleConfig {
    #[must_use]
    pub const fn new(base_size: f64, factor: f64) -> Self {
        Self {
            base_size,
            factor,
            anchor: None,
            font_name: None,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontName) -> Self {
        self.font_name = Some(font);
        self
    }
}

/// Scales and semantic styles, applied in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographySystemConfig {
    pub scales: Vec<(String, ScaleConfig)>,
    pub semantic: Vec<(String, TextStyleProperties)>,
}

impl TypographySystemConfig {
    #[must_use]
    pub fn scale(mut self, name: impl Into<String>, config: ScaleConfig) -> Self {
        self.scales.push((name.into(), config));
        self
    }

    #[must_use]
    pub fn semantic(mut self, name: impl Into<String>, properties: TextStyleProperties) -> Self {
        self.semantic.push((name.into(), properties));
        self
    }

    /// Unique fonts the system will use, in first-use order.
    fn fonts(&self, default_font: &FontName) -> Vec<FontName> {
        let scale_fonts = self
            .scales
            .iter()
            .map(|(_, scale)| scale.font_name.clone().unwrap_or_else(|| default_font.clone()));
        let semantic_fonts = self.semantic.iter().filter_map(|(_, props)| props.font_name.clone());

        let mut fonts: Vec<FontName> = Vec::new();
        for font in scale_fonts.chain(semantic_fonts) {
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
        fonts
    }
}

/// Styles created for one scale, or for the semantic group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyResult {
    pub scale: String,
    pub styles: Vec<TextStyle>,
}

/// `(step, size)` pairs for a typography scale, sizes rounded to whole pixels.
///
/// # Examples
///
/// ```rust
/// use dsforge::systems::scale_sizes;
///
/// let sizes = scale_sizes(16.0, 1.25, None).unwrap();
/// assert_eq!(sizes[2], ("base", 16.0));
/// assert_eq!(sizes[3], ("lg", 20.0));
/// ```
pub fn scale_sizes(
    base_size: f64,
    factor: f64,
    anchor: Option<&str>,
) -> Result<Vec<(&'static str, f64)>> {
    let anchor = anchor_index("typography", &TYPOGRAPHY_STEPS, anchor, DEFAULT_TYPOGRAPHY_ANCHOR)?;
    let sizes = modular_scale(base_size, factor, TYPOGRAPHY_STEPS.len(), anchor)?;
    Ok(TYPOGRAPHY_STEPS.into_iter().zip(sizes.into_iter().map(f64::round)).collect())
}

/// Create or update the styles `base_name/xs` ... `base_name/5xl`.
///
/// Styles use the configured default font and line height with 0% letter
/// spacing. A style that fails is logged and skipped; the returned list holds
/// the ones that succeeded.
///
/// # Errors
///
/// An unknown anchor, or a base size and factor that cannot form a finite
/// scale, fails the whole scale before anything is created.
pub async fn typography_scale<S: DocumentStore>(
    session: &mut Session<S>,
    base_name: &str,
    base_size: f64,
    factor: f64,
    anchor: Option<&str>,
) -> Result<Vec<TextStyle>> {
    let font = session.config().default_font.clone();
    build_scale(session, base_name, base_size, factor, anchor, font).await
}

async fn build_scale<S: DocumentStore>(
    session: &mut Session<S>,
    base_name: &str,
    base_size: f64,
    factor: f64,
    anchor: Option<&str>,
    font: FontName,
) -> Result<Vec<TextStyle>> {
    let sizes = scale_sizes(base_size, factor, anchor)?;
    tracing::debug!("Creating typography scale: {base_name} with base size: {base_size}");

    match session.store().load_font(&font).await {
        Ok(()) => tracing::debug!("Loaded {font} for scale {base_name}"),
        Err(e) => tracing::warn!("Could not load {font}, will try fallbacks for each style: {e}"),
    }

    let line_height = LineHeight::Percent {
        value: session.config().line_height_percent,
    };

    let mut styles = Vec::with_capacity(sizes.len());
    for (step, size) in sizes {
        let name = format!("{base_name}/{step}");
        let properties = TextStyleProperties {
            font_size: Some(size),
            font_name: Some(font.clone()),
            line_height: Some(line_height),
            letter_spacing: Some(LetterSpacing::Percent {
                value: 0.0,
            }),
            ..Default::default()
        };

        match create_text_style(session, &name, properties).await {
            Ok(style) => {
                tracing::debug!("Created text style: {name} ({size}px)");
                styles.push(style);
            }
            Err(e) => tracing::error!("Failed to create text style {name}: {e:#}"),
        }
    }

    Ok(styles)
}

/// Create the text style `name`, or update it if it exists, and apply
/// `properties`.
///
/// The requested font (or the configured default) is loaded first. If that
/// fails, the configured fallback fonts are tried in order and the first that
/// loads is used instead.
///
/// # Errors
///
/// [`DsforgeError::NoFontAvailable`] when neither the requested font nor any
/// fallback loads. A style created before that point is left in the document
/// with its defaults.
pub async fn create_text_style<S: DocumentStore>(
    session: &mut Session<S>,
    name: &str,
    properties: TextStyleProperties,
) -> Result<TextStyle> {
    let store = session.store();
    let existing = store.list_text_styles().await?.into_iter().find(|style| style.name == name);
    let style = match existing {
        Some(style) => {
            tracing::debug!("Updating existing text style: {name}");
            style
        }
        None => {
            tracing::debug!("Creating new text style: {name}");
            store.create_text_style(name).await?
        }
    };

    let requested =
        properties.font_name.clone().unwrap_or_else(|| session.config().default_font.clone());
    let font = load_font_with_fallback(session, requested).await?;

    let properties = TextStyleProperties {
        font_name: Some(font),
        ..properties
    };
    session.store().update_text_style(&style.id, properties).await
}

async fn load_font_with_fallback<S: DocumentStore>(
    session: &Session<S>,
    requested: FontName,
) -> Result<FontName> {
    let store = session.store();
    match store.load_font(&requested).await {
        Ok(()) => return Ok(requested),
        Err(e) => tracing::warn!("Could not load font {requested}, trying fallback fonts: {e}"),
    }

    let fallbacks = &session.config().fallback_fonts;
    for fallback in fallbacks {
        tracing::debug!("Trying fallback font: {fallback}");
        match store.load_font(fallback).await {
            Ok(()) => {
                tracing::warn!("Using fallback font {fallback} instead of {requested}");
                return Ok(fallback.clone());
            }
            Err(_) => tracing::warn!("Fallback font failed: {fallback}"),
        }
    }

    Err(DsforgeError::NoFontAvailable {
        tried: describe_fonts(fallbacks),
    }
    .into())
}

/// "A, B, or C" over font families.
fn describe_fonts(fonts: &[FontName]) -> String {
    let families: Vec<&str> = fonts.iter().map(|f| f.family.as_str()).collect();
    match families.as_slice() {
        [] => "a fallback font".to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    }
}

/// Create every scale, then every semantic style.
///
/// Fonts are pre-loaded once up front; failures there are only logged. A
/// scale or semantic style that fails is logged and left out of the result.
/// Semantic styles are reported one per entry under the `semantic` scale.
pub async fn typography_system<S: DocumentStore>(
    session: &mut Session<S>,
    config: &TypographySystemConfig,
) -> Vec<TypographyResult> {
    tracing::debug!("Creating typography system with {} scales", config.scales.len());

    let default_font = session.config().default_font.clone();
    let fonts = config.fonts(&default_font);
    tracing::debug!("Pre-loading {} unique fonts", fonts.len());
    for font in &fonts {
        if let Err(e) = session.store().load_font(font).await {
            tracing::warn!("Could not pre-load font {font}, will try fallbacks: {e}");
        }
    }

    let mut results = Vec::new();

    for (name, scale) in &config.scales {
        let font = scale.font_name.clone().unwrap_or_else(|| default_font.clone());
        match build_scale(session, name, scale.base_size, scale.factor, scale.anchor.as_deref(), font)
            .await
        {
            Ok(styles) => results.push(TypographyResult {
                scale: name.clone(),
                styles,
            }),
            Err(e) => tracing::error!("Failed to create typography scale {name}: {e:#}"),
        }
    }

    for (name, properties) in &config.semantic {
        match create_text_style(session, name, properties.clone()).await {
            Ok(style) => {
                tracing::debug!("Created semantic text style: {name}");
                results.push(TypographyResult {
                    scale: SEMANTIC_SCALE.to_string(),
                    styles: vec![style],
                });
            }
            Err(e) => tracing::error!("Failed to create semantic text style {name}: {e:#}"),
        }
    }

    results
}
