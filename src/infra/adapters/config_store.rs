use std::fs;
use std::path::PathBuf;

use lettercycle_app::ports::config_store::{ConfigStore, ConfigStoreError};
use lettercycle_app::settings::Settings;

use crate::config::settings_file::{CURRENT_VERSION, SettingsFile};

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new() -> Result<Self, ConfigStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Reads exactly `path`, as given by `--config`.
    pub fn with_file(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<Settings>, ConfigStoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigStoreError::ReadError(e.to_string()))?;

        let file: SettingsFile = toml::from_str(&content)
            .map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(ConfigStoreError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        tracing::debug!(path = %self.path.display(), "loaded config file");
        file.into_settings().map(Some)
    }

    fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ConfigStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("lettercycle"))
}
