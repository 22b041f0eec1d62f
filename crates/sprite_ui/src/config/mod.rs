//! Configuration loading
//!
//! Serde-backed load/save for TOML and RON config files, used by host
//! applications to describe their overlay setup.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents failed to parse
    #[error("config parse error: {0}")]
    Parse(String),

    /// Value failed to serialize
    #[error("config serialize error: {0}")]
    Serialize(String),

    /// Extension is neither `.toml` nor `.ron`
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// A serde-serializable configuration with file round-tripping
///
/// The format is chosen from the file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load a configuration value from `path`
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext @ ("toml" | "ron")) => ext,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let contents = std::fs::read_to_string(path)?;
        if format == "toml" {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Save this configuration to `path`
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct DemoConfig {
        scene_name: String,
        window_width: u32,
    }

    impl Default for DemoConfig {
        fn default() -> Self {
            Self {
                scene_name: "main game ui".to_owned(),
                window_width: 1024,
            }
        }
    }

    impl Config for DemoConfig {}

    #[test]
    fn toml_round_trip() {
        let dir = std::env::temp_dir().join("sprite_ui_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("overlay.toml");

        let config = DemoConfig::default();
        config.save_to_file(&path).unwrap();
        let loaded = DemoConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = DemoConfig::load_from_file("overlay.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
