//! Application configuration
//!
//! TOML-backed settings with sensible defaults, so the demo runs without
//! any config file present.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Window title text
    pub title: String,
    /// Whether to synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "LearnOpenGL".to_string(),
            vsync: true,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Path to the combined vertex/fragment shader source
    pub shader_path: String,
    /// Path to the quad texture image
    pub texture_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            shader_path: "shaders/quad.shader".to_string(),
            texture_path: "resources/textures/quad.png".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {:?}", path);
            Self::load_from_file(path)
        } else {
            log::debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_settings() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.title, "LearnOpenGL");
        assert!(config.window.vsync);
        assert_eq!(config.shader_path, "shaders/quad.shader");
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            shader_path = "assets/other.shader"

            [window]
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1024);
        // Unspecified fields keep their defaults
        assert_eq!(config.window.height, 800);
        assert_eq!(config.shader_path, "assets/other.shader");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.window.title, "LearnOpenGL");
    }
}
