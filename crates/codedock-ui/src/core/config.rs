//! User configuration management
//!
//! Handles saving and loading user preferences including language settings.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::theme::ThemeConfig;

/// User configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred language code (e.g., "en", "de")
    pub language: String,
    /// UI Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Show the component list panel
    #[serde(default = "default_true")]
    pub show_component_list: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: ThemeConfig::default(),
            show_component_list: true,
        }
    }
}

impl UserConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("CodeDock");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Update language and save
    pub fn set_language(&mut self, lang: &str) {
        self.language = lang.to_string();
        if let Err(e) = self.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert_eq!(config.language, "en");
        assert!(config.show_component_list);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = UserConfig {
            language: "de".to_string(),
            theme: ThemeConfig {
                theme: Theme::HighContrast,
                ..ThemeConfig::default()
            },
            show_component_list: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let loaded: UserConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.language, "de");
        assert_eq!(loaded.theme.theme, Theme::HighContrast);
        assert!(!loaded.show_component_list);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: UserConfig = serde_json::from_str(r#"{"language":"en"}"#).unwrap();
        assert_eq!(loaded.theme.theme, Theme::Dark);
        assert!(loaded.show_component_list);
    }
}
