//! Configuration system
//!
//! Holds [`ControlDefaults`], the file-loadable initial attributes for new
//! controls, and the TOML/RON loader it is built on.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::{self, Color};
use crate::ui::widgets::{ContentAlignment, Font, ImageLayout};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        log::debug!("Loading configuration from {}", path);

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Initial display attributes for newly created controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlDefaults {
    /// Whether new controls accept interaction
    pub enabled: bool,
    /// Whether new controls are shown
    pub visible: bool,
    /// Text color (RGBA)
    pub fore_color: Color,
    /// Text placement
    pub text_align: ContentAlignment,
    /// Foreground image placement
    pub image_align: ContentAlignment,
    /// Background image fill mode
    pub background_image_layout: ImageLayout,
    /// Text font
    pub font: Font,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
            fore_color: math::black(),
            text_align: ContentAlignment::TopLeft,
            image_align: ContentAlignment::MiddleCenter,
            background_image_layout: ImageLayout::Tile,
            font: Font::default(),
        }
    }
}

impl Config for ControlDefaults {}
