//! Panel settings management
//!
//! Sizes and limits for the sidebar, the layers panel, and zoom, persisted as
//! `settings.json` in the application data directory.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelSettings {
    /// Left navigation sidebar
    pub sidebar: SidebarSettings,
    /// Layers panel
    pub layers_panel: LayersPanelSettings,
    /// Canvas zoom
    pub zoom: ZoomSettings,
}

/// Sidebar width limits in pixels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SidebarSettings {
    pub default_width: f32,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            default_width: 240.0,
            min_width: 180.0,
            max_width: 360.0,
        }
    }
}

/// Layers panel width limits in pixels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayersPanelSettings {
    pub default_width: f32,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for LayersPanelSettings {
    fn default() -> Self {
        Self {
            default_width: 280.0,
            min_width: 200.0,
            max_width: 600.0,
        }
    }
}

/// Zoom limits as scale factors (1.0 = 100%)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f32,
    pub max: f32,
    /// Multiplier applied by one zoom-in step
    pub step: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 4.0,
            step: 1.2,
        }
    }
}

/// Clamp `value` into `[min, max]`, tolerating a misconfigured range
pub(crate) fn clamp_to(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max.max(min))
}

/// Settings manager for loading, saving, and updating panel settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: PanelSettings,
}

impl SettingsManager {
    /// Create a new settings manager for the given app data directory
    pub fn new(app_data_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: app_data_dir.as_ref().join("settings.json"),
            current: PanelSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Get the current settings
    pub fn current(&self) -> &PanelSettings {
        &self.current
    }

    /// Load settings from disk, or use defaults if the file is missing or
    /// cannot be parsed
    pub fn load_sync(&mut self) -> Result<&PanelSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<PanelSettings>(&content) {
                Ok(settings) => {
                    self.current = settings;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                    self.current = PanelSettings::default();
                }
            }
        } else {
            self.current = PanelSettings::default();
        }
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Replace the current settings and persist them
    pub fn update(&mut self, settings: PanelSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = PanelSettings::default();
        assert_eq!(settings.sidebar.default_width, 240.0);
        assert_eq!(settings.layers_panel.max_width, 600.0);
        assert_eq!(settings.zoom.step, 1.2);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: PanelSettings =
            serde_json::from_str(r#"{ "sidebar": { "max_width": 400.0 } }"#).unwrap();

        assert_eq!(settings.sidebar.max_width, 400.0);
        assert_eq!(settings.sidebar.min_width, 180.0);
        assert_eq!(settings.zoom, ZoomSettings::default());
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(clamp_to(100.0, 180.0, 360.0), 180.0);
        assert_eq!(clamp_to(500.0, 180.0, 360.0), 360.0);
        assert_eq!(clamp_to(200.0, 180.0, 360.0), 200.0);
        // Inverted range collapses to the minimum
        assert_eq!(clamp_to(200.0, 300.0, 100.0), 300.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(dir.path());

        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &PanelSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(dir.path().join("nested"));

        let mut settings = PanelSettings::default();
        settings.zoom.max = 8.0;
        manager.update(settings.clone()).unwrap();
        assert!(manager.settings_path().exists());

        let mut reloaded = SettingsManager::new(dir.path().join("nested"));
        assert_eq!(reloaded.load_sync().unwrap(), &settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

        let mut manager = SettingsManager::new(dir.path());
        assert_eq!(manager.load_sync().unwrap(), &PanelSettings::default());
    }
}
