//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load_from` / `save_to` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`, `state_file_path`)

use super::config_struct::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from `path`, or create and save a default one when
    /// the file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        log::info!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        if contents.trim().is_empty() {
            log::info!("Config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents)?;
        for warning in config.validate() {
            log::warn!("{}", warning);
        }
        log::debug!(
            "Loaded {} profiles and {} groups from {:?}",
            config.profiles.len(),
            config.groups.len(),
            path
        );
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_yaml_ng::to_string(self)?;
        write_atomic(path, yaml.as_bytes())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(crate::defaults::config_file_name())
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-term")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/par-term/
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("par-term")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Path of the local UI state file (recent profiles, collapsed groups)
    pub fn state_file_path() -> PathBuf {
        Self::config_dir().join(crate::defaults::state_file_name())
    }
}

/// Write `contents` to `path` via a temp file and rename, creating the
/// parent directory when needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, contents).map_err(|e| ConfigError::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| ConfigError::io(path, e))?;
    Ok(())
}
