//! Viewer settings
//!
//! Settings are read from `~/.config/rigview/settings.toml`. A missing or
//! unparsable file falls back to the built-in defaults; the viewer never
//! writes settings back.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rigview_core::Color;
use rigview_render::CameraConfig;

/// All viewer settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerSettings {
    pub scene: SceneSettings,
    pub camera: CameraConfig,
    pub render: RenderSettings,
}

impl ViewerSettings {
    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rigview").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Which description file to view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Path to the robot description file.
    pub description: PathBuf,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            description: PathBuf::from("assets/robot.urdf"),
        }
    }
}

/// Viewport and draw-style settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Draw polygons as wireframe outlines.
    pub wireframe: bool,
    /// Flat color applied to all geometry.
    pub flat_color: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            wireframe: true,
            flat_color: Color::RED,
        }
    }
}

impl RenderSettings {
    /// Viewport aspect ratio
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
