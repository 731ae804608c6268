//! Shared, lockable handle around the live configuration.

use super::config_struct::Config;
use crate::error::ConfigError;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::path::{Path, PathBuf};

/// The live configuration plus the file it is persisted to.
///
/// Guards returned by [`read`](Self::read) and [`write`](Self::write) are
/// synchronous locks: never hold one across an `.await`.
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: RwLock<Config>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// A store that is never written to disk; `save` only logs.
    pub fn in_memory(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            path: None,
        }
    }

    /// Load (or create) the config file at `path` and keep it as the save target.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = Config::load_from(&path)?;
        Ok(Self {
            config: RwLock::new(config),
            path: Some(path),
        })
    }

    /// Open the config at the default XDG location
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(Config::config_path())
    }

    /// Shared read access to the live config
    pub fn read(&self) -> RwLockReadGuard<'_, Config> {
        self.config.read()
    }

    /// Exclusive write access to the live config
    pub fn write(&self) -> RwLockWriteGuard<'_, Config> {
        self.config.write()
    }

    /// Clone of the current config
    pub fn snapshot(&self) -> Config {
        self.config.read().clone()
    }

    /// File the store saves to, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Persist the current config
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            log::debug!("Config store has no backing file, skipping save");
            return Ok(());
        };
        let config = self.config.read().clone();
        config.save_to(path)?;
        log::info!("Saved config with {} profiles to {:?}", config.profiles.len(), path);
        Ok(())
    }
}
