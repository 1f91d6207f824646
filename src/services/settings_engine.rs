// Saved.io Settings Engine
// Loads, saves, updates and resets user settings.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::platform;
use crate::services::bookmark_form::{normalize_list_name, validate_list_name};
use crate::types::errors::SettingsError;
use crate::types::settings::AppSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<AppSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &AppSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// With `path_override` set, that file is used; otherwise `settings.json`
    /// inside the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: AppSettings::default(),
        }
    }
}

/// Applies the list-name rules to `bookmarks.default_list`. A blank name
/// clears it; any other name is lowercased and must validate.
fn checked_settings(mut settings: AppSettings) -> Result<AppSettings, SettingsError> {
    settings.bookmarks.default_list = match settings.bookmarks.default_list.take() {
        None => None,
        Some(raw) if raw.is_empty() => None,
        Some(raw) => {
            let name = normalize_list_name(&raw);
            validate_list_name(&name).map_err(|e| {
                SettingsError::InvalidValue(format!("bookmarks.default_list '{}': {}", raw, e))
            })?;
            Some(name)
        }
    };
    Ok(settings)
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the config file, or defaults if it does not exist.
    /// A malformed file is a serialization error.
    fn load(&mut self) -> Result<AppSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = AppSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: AppSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        self.settings = checked_settings(settings)?;
        Ok(self.settings.clone())
    }

    /// Writes the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Updates one setting by dot-notation key, e.g. `"bookmarks.sort_order"`.
    ///
    /// The new value is validated by deserializing the whole tree back into
    /// `AppSettings`; on success the settings are saved immediately.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut tree = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };

        let mut node = &mut tree;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            node = node
                .get_mut(part)
                .ok_or_else(|| SettingsError::InvalidKey(format!("Key '{}' not found in settings", key)))?;
        }

        match node {
            serde_json::Value::Object(map) if map.contains_key(leaf) => {
                map.insert(leaf.to_string(), value);
            }
            serde_json::Value::Object(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )));
            }
        }

        let settings: AppSettings = serde_json::from_value(tree).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        self.settings = checked_settings(settings)?;
        info!(key, "setting updated");

        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = AppSettings::default();
        info!("settings reset to defaults");
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
