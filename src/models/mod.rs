//! Shared data models for document resources.
//!
//! These types mirror what a design document stores: variable collections
//! with their modes, variables with per-mode values, and text styles. They
//! serialize with the host's JSON conventions (camelCase fields,
//! SCREAMING_SNAKE_CASE enums) so a saved document and the messages posted to
//! the UI share one shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_STYLE};

/// A variant axis of a collection (e.g. light/dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// Handle to a variable collection in the document.
///
/// Cloned out of the document; holding one does not keep the collection
/// alive, and it goes stale if the collection changes out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHandle {
    pub id: String,
    pub name: String,
    /// Ordered modes; index `i` receives the `i`-th value of a multi-value variable.
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub variable_ids: Vec<String>,
}

impl CollectionHandle {
    /// The first mode, which single-valued variables write to.
    #[must_use]
    pub fn default_mode(&self) -> Option<&Mode> {
        self.modes.first()
    }
}

/// The type a variable resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    Color,
    Float,
    String,
    Boolean,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Color => "COLOR",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A value stored for one mode of a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Float(f64),
    String(String),
    Color(Rgb),
}

impl VariableValue {
    /// The [`ResolvedType`] this value can be assigned to.
    #[must_use]
    pub const fn resolved_type(&self) -> ResolvedType {
        match self {
            Self::Boolean(_) => ResolvedType::Boolean,
            Self::Float(_) => ResolvedType::Float,
            Self::String(_) => ResolvedType::String,
            Self::Color(_) => ResolvedType::Color,
        }
    }

    /// The first number in this value that JSON cannot represent.
    #[must_use]
    pub fn non_finite(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Color(rgb) => [rgb.r, rgb.g, rgb.b].into_iter().find(|c| !c.is_finite()),
            Self::Boolean(_) | Self::String(_) => None,
        }
        .filter(|value| !value.is_finite())
    }
}

/// A variable inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    /// Flat stored name; `/` separated groups are a naming convention only.
    pub name: String,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
}

/// A font family and style pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// A "Regular" cut of `family`.
    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, "Regular")
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_STYLE)
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Line height of a text style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Pixels { value: f64 },
    Percent { value: f64 },
    Auto,
}

/// Letter spacing of a text style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    Pixels { value: f64 },
    Percent { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    None,
    Underline,
    Strikethrough,
}

/// A text style in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub id: String,
    pub name: String,
    pub font_size: f64,
    pub font_name: FontName,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
}

/// A partial update to a [`TextStyle`].
///
/// Absent fields are left untouched. A zero `font_size` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<FontName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
}

impl TextStyleProperties {
    /// The first numeric field JSON cannot represent, as `(field, value)`.
    #[must_use]
    pub fn non_finite(&self) -> Option<(&'static str, f64)> {
        let line_height = match self.line_height {
            Some(LineHeight::Pixels { value } | LineHeight::Percent { value }) => Some(value),
            _ => None,
        };
        let letter_spacing = self.letter_spacing.map(|spacing| match spacing {
            LetterSpacing::Pixels { value } | LetterSpacing::Percent { value } => value,
        });

        [("font size", self.font_size), ("line height", line_height), ("letter spacing", letter_spacing)]
            .into_iter()
            .find_map(|(field, value)| value.filter(|v| !v.is_finite()).map(|v| (field, v)))
    }

    /// Apply the provided fields onto `style`.
    pub fn apply_to(&self, style: &mut TextStyle) {
        if let Some(size) = self.font_size.filter(|size| *size != 0.0) {
            style.font_size = size;
        }
        if let Some(font) = &self.font_name {
            style.font_name = font.clone();
        }
        if let Some(line_height) = self.line_height {
            style.line_height = line_height;
        }
        if let Some(letter_spacing) = self.letter_spacing {
            style.letter_spacing = letter_spacing;
        }
        if let Some(text_case) = self.text_case {
            style.text_case = Some(text_case);
        }
        if let Some(decoration) = self.text_decoration {
            style.text_decoration = Some(decoration);
        }
    }
}
