//! Typography commands: scales, presets, and single text styles.
//!
//! ```bash
//! dsforge typography Body --base-size 16 --factor 1.125
//! dsforge preset editorial
//! dsforge text-style Hero/Title --size 48 --family Inter --style Bold --line-height 120
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{CommandExecutor, print_success};
use crate::models::{
    FontName, LetterSpacing, LineHeight, TextCase, TextDecoration, TextStyleProperties,
};
use crate::session::Session;
use crate::store::MemoryDocument;
use crate::systems;

/// Create or update a typography scale
#[derive(Args, Debug)]
pub struct TypographyCommand {
    /// Style group name (e.g. "Body")
    name: String,

    /// Font size of the anchor step, in pixels
    #[arg(long, default_value_t = 16.0)]
    base_size: f64,

    /// Ratio between neighbouring steps
    #[arg(long)]
    factor: f64,

    /// Step that receives the base size (xs..5xl, default base)
    #[arg(long)]
    anchor: Option<String>,
}

impl CommandExecutor for TypographyCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let styles = systems::typography_scale(
            session,
            &self.name,
            self.base_size,
            self.factor,
            self.anchor.as_deref(),
        )
        .await?;
        print_success(&format!("Typography scale {} created ({} styles)", self.name, styles.len()));
        Ok(())
    }
}

/// Apply a built-in typography preset
#[derive(Args, Debug)]
pub struct PresetCommand {
    /// One of: modern, classic, ui, editorial
    name: String,
}

impl CommandExecutor for PresetCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let config = systems::preset(&self.name)?;
        let results = systems::typography_system(session, &config).await;
        let count: usize = results.iter().map(|r| r.styles.len()).sum();
        print_success(&format!("Typography preset {} created ({count} styles)", self.name));
        Ok(())
    }
}

/// Create or update one text style
#[derive(Args, Debug)]
pub struct TextStyleCommand {
    /// Style name (e.g. "Hero/Title")
    name: String,

    /// Font size in pixels
    #[arg(long)]
    size: Option<f64>,

    /// Font family
    #[arg(long)]
    family: Option<String>,

    /// Font style; used with --family
    #[arg(long, default_value = "Regular")]
    style: String,

    /// Line height in percent
    #[arg(long, value_name = "PERCENT", conflicts_with = "line_height_px")]
    line_height: Option<f64>,

    /// Line height in pixels
    #[arg(long, value_name = "PIXELS")]
    line_height_px: Option<f64>,

    /// Letter spacing in percent
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    letter_spacing: Option<f64>,

    /// ORIGINAL, UPPER, LOWER or TITLE
    #[arg(long, value_parser = parse_text_case)]
    text_case: Option<TextCase>,

    /// NONE, UNDERLINE or STRIKETHROUGH
    #[arg(long, value_parser = parse_text_decoration)]
    text_decoration: Option<TextDecoration>,
}

fn parse_upper<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_uppercase()))
        .map_err(|_| format!("unsupported value '{value}'"))
}

fn parse_text_case(value: &str) -> Result<TextCase, String> {
    parse_upper(value)
}

fn parse_text_decoration(value: &str) -> Result<TextDecoration, String> {
    parse_upper(value)
}

impl TextStyleCommand {
    fn properties(&self) -> TextStyleProperties {
        let line_height = match (self.line_height, self.line_height_px) {
            (Some(value), _) => Some(LineHeight::Percent {
                value,
            }),
            (None, Some(value)) => Some(LineHeight::Pixels {
                value,
            }),
            (None, None) => None,
        };

        TextStyleProperties {
            font_size: self.size,
            font_name: self.family.as_ref().map(|family| FontName::new(family, &self.style)),
            line_height,
            letter_spacing: self.letter_spacing.map(|value| LetterSpacing::Percent {
                value,
            }),
            text_case: self.text_case,
            text_decoration: self.text_decoration,
        }
    }
}

impl CommandExecutor for TextStyleCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let style = systems::create_text_style(session, &self.name, self.properties()).await?;
        print_success(&format!(
            "Text style {} created ({}px {})",
            style.name, style.font_size, style.font_name
        ));
        Ok(())
    }
}
