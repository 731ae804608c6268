//! Configuration system for the par-term profile service.
//!
//! This crate provides configuration loading, saving, and default values
//! for profile management. It includes:
//!
//! - Profile and profile-group types as stored in `config.yaml`
//! - Per-provider default overrides and the profile blacklist
//! - Terminal listing switches (recent and built-in profiles)
//! - A shared [`ConfigStore`] handle with atomic save

pub mod config;
pub mod defaults;
pub mod error;
pub mod profile_types;

pub use config::{Config, ConfigStore, TerminalProfileSettings, write_atomic};
pub use error::ConfigError;
pub use profile_types::{Profile, ProfileGroupConfig, SessionEndBehavior};
