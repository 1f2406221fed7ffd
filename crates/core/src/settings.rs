//! Wrapper settings
//!
//! Two read-only host settings gate the whole subsystem: the numeric Steam
//! application id (0 disables everything) and a verbose-logging flag.
//! Stored as TOML; a missing file is replaced with defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Failed to read or write the settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize settings to TOML
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Host-provided wrapper settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamSettings {
    /// Steam application id; 0 disables the subsystem
    pub app_id: u32,

    /// Emit bring-up and failure log lines
    pub print_logs: bool,
}

impl Default for SteamSettings {
    fn default() -> Self {
        Self {
            app_id: 0,
            print_logs: true,
        }
    }
}

impl SteamSettings {
    /// Load settings from `path`, creating a default file if missing.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let settings: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded steam settings from {:?}", path);
            Ok(settings)
        } else {
            let default = Self::default();
            default.save(path)?;
            tracing::info!("Created default steam settings at {:?}", path);
            Ok(default)
        }
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved steam settings to {:?}", path);
        Ok(())
    }

    /// Reload settings from `path`, replacing the current values.
    pub fn reload(&mut self, path: &Path) -> SettingsResult<()> {
        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded steam settings from {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_the_subsystem() {
        let settings = SteamSettings::default();
        assert_eq!(settings.app_id, 0);
        assert!(settings.print_logs);
    }

    #[test]
    fn settings_serialize_roundtrip() {
        let settings = SteamSettings {
            app_id: 480,
            print_logs: false,
        };

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: SteamSettings = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.app_id, 480);
        assert!(!parsed.print_logs);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: SteamSettings = toml::from_str("app_id = 480\n").unwrap();
        assert_eq!(parsed.app_id, 480);
        assert!(parsed.print_logs);
    }
}
