//! Configuration management for shoplist.
//!
//! Configuration is read from `~/.config/shoplist/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::IdStrategy;

pub const DEFAULT_GEOCODING_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding: GeocodingConfig,
    pub location: LocationConfig,
    pub store: StoreConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub endpoint: String,
    pub api_key: String,
    /// Request timeout. Unset means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODING_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

/// Where this machine is, and how the permission prompt answers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub permission: PermissionSetting,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            permission: PermissionSetting::Prompt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionSetting {
    Granted,
    /// Not held yet; granted when asked.
    #[default]
    Prompt,
    Denied,
    DeniedPermanently,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating it if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/shoplist/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("shoplist").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_config_content() -> String {
        r##"# shoplist configuration

[geocoding]
# Reverse geocoding endpoint (Google Geocoding API compatible)
endpoint = "https://maps.googleapis.com/maps/api/geocode/json"
# API key sent as the `key` query parameter; address lookup is disabled while empty
api_key = ""
# Request timeout in seconds; leave unset for the HTTP client default
# timeout_secs = 10

[location]
# Coordinates reported as the current position
latitude = 0.0
longitude = 0.0
# How the location permission prompt answers:
# granted, prompt, denied, denied_permanently
permission = "prompt"

[store]
# How new item ids are chosen:
# size      - list length + 1 at insertion time
# monotonic - counter that never goes backwards within a session
id_strategy = "size"

[colors]
# Named colors (Cyan, DarkGray, ...) or hex ("#RRGGBB", "#RGB")
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
editing_item = "Yellow"
address = "Blue"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
add_item = ["a"]
edit_item = ["e", "Enter"]
delete_item = ["d", "Delete"]
locate = ["l"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.geocoding.endpoint, DEFAULT_GEOCODING_ENDPOINT);
        assert_eq!(config.location.permission, PermissionSetting::Prompt);
        assert_eq!(config.store.id_strategy, IdStrategy::Size);
        assert_eq!(config.colors.active_border, ratatui::style::Color::Cyan);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[store]
id_strategy = "monotonic"

[location]
latitude = 52.52
permission = "denied_permanently"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.store.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.location.latitude, 52.52);
        assert_eq!(config.location.longitude, 0.0);
        assert_eq!(
            config.location.permission,
            PermissionSetting::DeniedPermanently
        );
        assert!(config.geocoding.api_key.is_empty());
        assert!(config.geocoding.timeout_secs.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.store.id_strategy, IdStrategy::Size);
        assert_eq!(config.keybindings.add_item, vec!["a"]);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[store]\nid_strategy = \"random\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.store.id_strategy, IdStrategy::Size);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.geocoding.endpoint, DEFAULT_GEOCODING_ENDPOINT);
    }

    #[test]
    fn test_load_from_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[geocoding\napi_key = ").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
