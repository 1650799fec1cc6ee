//! Test fixtures for creating sample configuration and document files
//!
//! Fixtures carry their file content as text, so tests can write them to a
//! temporary directory for the CLI or parse them directly.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{DocumentSnapshot, MemoryDocument};

/// Test fixture for dsforge `config.toml` files
#[derive(Clone, Debug)]
pub struct ConfigFixture {
    pub content: String,
    pub name: String,
}

impl ConfigFixture {
    /// Empty config; everything defaults
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            content: String::new(),
        }
    }

    /// Roboto as the default font with a taller line height
    pub fn custom_fonts() -> Self {
        Self {
            name: "custom_fonts".to_string(),
            content: r#"
line_height_percent = 150.0

[default_font]
family = "Roboto"
style = "Regular"

[[fallback_fonts]]
family = "Arial"
style = "Regular"
"#
            .trim()
            .to_string(),
        }
    }

    /// Config that fails validation
    pub fn invalid_line_height() -> Self {
        Self {
            name: "invalid_line_height".to_string(),
            content: "line_height_percent = 0.0".to_string(),
        }
    }

    /// Config with invalid TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "line_height_percent = [".to_string(),
        }
    }

    /// Write the config to `dir/config.toml`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let config_path = dir.join("config.toml");
        fs::write(&config_path, &self.content)
            .with_context(|| format!("Failed to write {} config fixture", self.name))?;
        Ok(config_path)
    }
}

/// Test fixture for design document JSON files
#[derive(Clone, Debug)]
pub struct DocumentFixture {
    pub content: String,
    pub name: String,
}

impl DocumentFixture {
    /// Document with nothing in it and the default installed fonts
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            content: "{}".to_string(),
        }
    }

    /// A two-mode `Colors` collection holding `primary/main`, plus a
    /// `Body/base` text style
    pub fn existing_colors() -> Self {
        Self {
            name: "existing_colors".to_string(),
            content: r#"
{
  "collections": [
    {
      "id": "VariableCollectionId:1",
      "name": "Colors",
      "modes": [
        { "modeId": "1:0", "name": "Light" },
        { "modeId": "1:1", "name": "Dark" }
      ],
      "variableIds": ["VariableID:2"]
    }
  ],
  "variables": [
    {
      "id": "VariableID:2",
      "name": "primary/main",
      "variableCollectionId": "VariableCollectionId:1",
      "resolvedType": "COLOR",
      "valuesByMode": {
        "1:0": { "r": 0.0, "g": 0.478, "b": 1.0 }
      }
    }
  ],
  "textStyles": [
    {
      "id": "S:3",
      "name": "Body/base",
      "fontSize": 16.0,
      "fontName": { "family": "Inter", "style": "Regular" },
      "lineHeight": { "unit": "AUTO" },
      "letterSpacing": { "unit": "PERCENT", "value": 0.0 }
    }
  ],
  "nextId": 3
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Document that cannot provide any font
    pub fn without_fonts() -> Self {
        Self {
            name: "without_fonts".to_string(),
            content: r#"{ "installedFonts": [] }"#.to_string(),
        }
    }

    /// Spacing collection whose `golden/md` variable holds text, so a numeric
    /// `Spacing/golden` scale fails at its fifth step
    pub fn conflicting_spacing() -> Self {
        Self {
            name: "conflicting_spacing".to_string(),
            content: r#"
{
  "collections": [
    {
      "id": "VariableCollectionId:1",
      "name": "Spacing",
      "modes": [{ "modeId": "1:0", "name": "Mode 1" }],
      "variableIds": ["VariableID:2"]
    }
  ],
  "variables": [
    {
      "id": "VariableID:2",
      "name": "golden/md",
      "variableCollectionId": "VariableCollectionId:1",
      "resolvedType": "STRING",
      "valuesByMode": { "1:0": "medium" }
    }
  ],
  "nextId": 2
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Parse the fixture into a snapshot
    pub fn snapshot(&self) -> Result<DocumentSnapshot> {
        serde_json::from_str(&self.content)
            .with_context(|| format!("Failed to parse {} document fixture", self.name))
    }

    /// Parse the fixture into a ready-to-use store
    pub fn store(&self) -> Result<MemoryDocument> {
        Ok(MemoryDocument::from_snapshot(self.snapshot()?))
    }

    /// Write the document to `dir/design-document.json`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let document_path = dir.join("design-document.json");
        fs::write(&document_path, &self.content)
            .with_context(|| format!("Failed to write {} document fixture", self.name))?;
        Ok(document_path)
    }
}
