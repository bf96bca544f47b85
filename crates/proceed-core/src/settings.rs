//! Popup settings - persisted user preferences.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/org.proceed.Proceed/
//! - Windows: %APPDATA%/proceed/Proceed/config/
//! - Linux: ~/.config/proceed/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PopupError, Result};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "proceed";
const APP_NAME: &str = "Proceed";
const CONFIG_FILENAME: &str = "settings.toml";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Popup settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupSettings {
    /// Identity used in the copied diagnostic text.
    pub app: AppIdentity,

    /// Popup geometry and look.
    pub layout: LayoutSettings,
}

impl PopupSettings {
    /// Get the default config file path.
    ///
    /// Returns `None` if the platform-specific directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load settings from the default path.
    ///
    /// Falls back to defaults (with a warning) when the path cannot be
    /// determined or the file is unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let settings = toml::from_str(&content).map_err(|source| {
                    PopupError::SettingsParse {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                tracing::info!("Loaded settings from {:?}", path);
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No settings file found at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(source) => Err(PopupError::SettingsIo {
                operation: "read",
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Save settings to a specific path, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PopupError::SettingsIo {
                operation: "create directory for",
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|source| PopupError::SettingsSerialize { source })?;

        fs::write(path, content).map_err(|source| PopupError::SettingsIo {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }
}

// =============================================================================
// APP IDENTITY
// =============================================================================

/// Application name and version shown in copied diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppIdentity {
    pub name: String,
    pub version: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            name: "proceed".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Popup geometry and look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Maximum popup width in points.
    pub max_width: f32,
    /// Maximum popup height in points.
    pub max_height: f32,
    /// Width added to the content's natural width before capping.
    pub extra_width: f32,
    /// Gap between the popup and the host window edges.
    pub margin: f32,
    pub corner_radius: u8,
    pub border_width: f32,
    /// Alpha applied to the window fill (0.0 - 1.0).
    pub background_opacity: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_width: 500.0,
            max_height: 500.0,
            extra_width: 100.0,
            margin: 8.0,
            corner_radius: 12,
            border_width: 1.0,
            background_opacity: 0.86,
        }
    }
}

impl LayoutSettings {
    /// Popup width for content of the given natural width.
    pub fn popup_width(&self, content_width: f32) -> f32 {
        (content_width + self.extra_width).min(self.max_width)
    }
}
