//! User configuration for dsforge.
//!
//! Lives at `~/.dsforge/config.toml` (`%LOCALAPPDATA%\dsforge\config.toml` on
//! Windows) unless `--config` or `DSFORGE_CONFIG` points elsewhere. A missing
//! file means defaults.
//!
//! ```toml
//! document = "design/tokens.json"
//! line_height_percent = 150.0
//!
//! [default_font]
//! family = "Inter"
//! style = "Regular"
//!
//! [[fallback_fonts]]
//! family = "Roboto"
//! style = "Regular"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{
    CONFIG_ENV_VAR, DEFAULT_DOCUMENT_FILE, DEFAULT_LINE_HEIGHT_PERCENT, FALLBACK_FONT_FAMILIES,
};
use crate::core::DsforgeError;
use crate::models::FontName;

fn default_fallback_fonts() -> Vec<FontName> {
    FALLBACK_FONT_FAMILIES.iter().map(|family| FontName::regular(*family)).collect()
}

const fn default_line_height_percent() -> f64 {
    DEFAULT_LINE_HEIGHT_PERCENT
}

fn is_default_font(font: &FontName) -> bool {
    *font == FontName::default()
}

fn is_default_fallback_fonts(fonts: &[FontName]) -> bool {
    fonts == default_fallback_fonts().as_slice()
}

fn is_default_line_height_percent(value: &f64) -> bool {
    *value == default_line_height_percent()
}

/// Settings that shape generated styles and where the document lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsforgeConfig {
    /// Document file; the CLI's `--document` wins over this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,

    /// Line height for generated typography scale steps, in percent.
    #[serde(
        default = "default_line_height_percent",
        skip_serializing_if = "is_default_line_height_percent"
    )]
    pub line_height_percent: f64,

    /// Font for generated typography scale steps.
    #[serde(default, skip_serializing_if = "is_default_font")]
    pub default_font: FontName,

    /// Fonts tried, in order, when a requested font cannot be loaded.
    #[serde(default = "default_fallback_fonts", skip_serializing_if = "is_default_fallback_fonts")]
    pub fallback_fonts: Vec<FontName>,
}

impl Default for DsforgeConfig {
    fn default() -> Self {
        Self {
            document: None,
            default_font: FontName::default(),
            fallback_fonts: default_fallback_fonts(),
            line_height_percent: default_line_height_percent(),
        }
    }
}

impl DsforgeConfig {
    /// Load from `DSFORGE_CONFIG` or the default location, falling back to defaults.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, else from `DSFORGE_CONFIG` or the default location.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(path) => PathBuf::from(path),
                None => Self::default_path()?,
            },
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| DsforgeError::ConfigError {
            message: format!("{}: {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Platform default config location.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("dsforge")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".dsforge")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// The document to operate on: `cli_override`, then the config, then the default file.
    #[must_use]
    pub fn document_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.document.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_FILE))
    }

    fn validate(&self) -> Result<(), DsforgeError> {
        if !(self.line_height_percent.is_finite() && self.line_height_percent > 0.0) {
            return Err(DsforgeError::ConfigError {
                message: format!(
                    "line_height_percent must be a positive number, got {}",
                    self.line_height_percent
                ),
            });
        }
        if self.default_font.family.is_empty() || self.default_font.style.is_empty() {
            return Err(DsforgeError::ConfigError {
                message: "default_font needs both family and style".to_string(),
            });
        }
        Ok(())
    }
}
