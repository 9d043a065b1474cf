//! TOML settings file support.
//!
//! Settings cover the tool itself (preview themes, sample text, the picker's
//! suggested palette); the role list is deliberately not persisted.

use std::path::Path;

use serde::Deserialize;

use crate::cli::ThemeArg;
use crate::role::SUGGESTED_COLORS;

/// Error type for settings operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Root settings structure for TOML files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preview pane settings
    pub preview: PreviewSettings,
    /// Picker palette settings
    pub palette: PaletteSettings,
}

/// Preview pane settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Themes to show (dark, light, both); the CLI flag takes precedence
    pub theme: Option<ThemeArg>,
    /// Body text shown for every preview message
    pub sample_message: Option<String>,
}

/// Picker palette settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Replacement for the built-in suggested colors
    pub suggested: Vec<String>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }

    /// The suggested picker palette, falling back to the built-in set.
    pub fn suggested_colors(&self) -> Vec<String> {
        if self.palette.suggested.is_empty() {
            SUGGESTED_COLORS.iter().map(|c| c.to_string()).collect()
        } else {
            self.palette.suggested.clone()
        }
    }

    /// The sample message body, falling back to the built-in text.
    pub fn sample_message(&self) -> String {
        self.preview
            .sample_message
            .clone()
            .unwrap_or_else(|| "example message!".to_string())
    }
}
