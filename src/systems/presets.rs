//! Built-in typography presets.
//!
//! | Preset      | Scales                              | Semantic styles                                  |
//! |-------------|-------------------------------------|--------------------------------------------------|
//! | `modern`    | Display, Heading, Body, Caption     | Hero/Title, Button/Primary                       |
//! | `classic`   | Heading, Body                       | Article/Title                                    |
//! | `ui`        | Interface                           | Button/Large, Button/Small, Label/Form           |
//! | `editorial` | Editorial                           | Article/Headline, Article/Subhead, Article/Body  |

use crate::core::DsforgeError;
use crate::models::{FontName, LetterSpacing, LineHeight, TextStyleProperties};

use super::typography::{ScaleConfig, TypographySystemConfig};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 4] = ["modern", "classic", "ui", "editorial"];

/// Properties for a semantic style in one of the presets.
pub(crate) fn semantic_style(
    size: f64,
    style: &str,
    line_height: LineHeight,
    letter_spacing_percent: f64,
) -> TextStyleProperties {
    TextStyleProperties {
        font_size: Some(size),
        font_name: Some(FontName::new("Inter", style)),
        line_height: Some(line_height),
        letter_spacing: Some(LetterSpacing::Percent {
            value: letter_spacing_percent,
        }),
        ..Default::default()
    }
}

const fn percent(value: f64) -> LineHeight {
    LineHeight::Percent {
        value,
    }
}

const fn pixels(value: f64) -> LineHeight {
    LineHeight::Pixels {
        value,
    }
}

/// The typography system for a named preset.
///
/// # Errors
///
/// [`DsforgeError::UnknownPreset`] for any name outside [`PRESET_NAMES`].
pub fn preset(name: &str) -> Result<TypographySystemConfig, DsforgeError> {
    let config = match name {
        "modern" => TypographySystemConfig::default()
            .scale("Display", ScaleConfig::new(32.0, 1.25).with_anchor("base"))
            .scale("Heading", ScaleConfig::new(24.0, 1.2).with_anchor("base"))
            .scale("Body", ScaleConfig::new(16.0, 1.125).with_anchor("base"))
            .scale("Caption", ScaleConfig::new(12.0, 1.1).with_anchor("base"))
            .semantic("Hero/Title", semantic_style(56.0, "Bold", percent(110.0), -2.0))
            .semantic("Button/Primary", semantic_style(16.0, "Medium", pixels(24.0), 0.0)),
        "classic" => TypographySystemConfig::default()
            .scale("Heading", ScaleConfig::new(18.0, 1.333).with_anchor("base"))
            .scale("Body", ScaleConfig::new(16.0, 1.2).with_anchor("base"))
            .semantic("Article/Title", semantic_style(32.0, "Bold", percent(125.0), -1.0)),
        "ui" => TypographySystemConfig::default()
            .scale("Interface", ScaleConfig::new(14.0, 1.125).with_anchor("base"))
            .semantic("Button/Large", semantic_style(16.0, "Medium", pixels(24.0), 0.0))
            .semantic("Button/Small", semantic_style(14.0, "Medium", pixels(20.0), 0.0))
            .semantic("Label/Form", semantic_style(12.0, "Medium", pixels(16.0), 0.0)),
        "editorial" => TypographySystemConfig::default()
            .scale("Editorial", ScaleConfig::new(18.0, 1.25).with_anchor("base"))
            .semantic("Article/Headline", semantic_style(36.0, "Bold", percent(120.0), -1.5))
            .semantic("Article/Subhead", semantic_style(20.0, "SemiBold", percent(130.0), 0.0))
            .semantic("Article/Body", semantic_style(18.0, "Regular", percent(160.0), 0.0)),
        _ => {
            return Err(DsforgeError::UnknownPreset {
                name: name.to_string(),
                available: PRESET_NAMES.iter().map(|p| (*p).to_string()).collect(),
            });
        }
    };
    Ok(config)
}
