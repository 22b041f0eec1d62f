//! Demo overlay configuration

use serde::{Deserialize, Serialize};
use sprite_ui::config::Config;
use std::path::Path;

/// Window settings the host would apply before creating the overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Back buffer width in pixels
    pub width: u32,

    /// Back buffer height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Settings for the demo overlay scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Name of the UI scene to build and activate
    pub scene_name: String,

    /// Player name shown by the text label
    pub player_name: String,

    /// Content name of the health bar texture
    pub health_texture: String,

    /// Content name of the UI font
    pub ui_font: String,

    /// Number of frames the headless demo loop renders
    pub demo_frames: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            scene_name: "main game ui".to_owned(),
            player_name: "Brutus Maximus".to_owned(),
            health_texture: "ui_progress_32_8".to_owned(),
            ui_font: "ui_font".to_owned(),
            demo_frames: 10,
        }
    }
}

impl Config for OverlayConfig {}

impl OverlayConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("loaded overlay config from {}", path.display());
                config
            }
            Err(error) => {
                log::info!(
                    "using default overlay config ({}: {error})",
                    path.display()
                );
                Self::default()
            }
        }
    }
}
