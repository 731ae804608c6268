//! Core `Config` struct definition.
//!
//! # Sub-modules
//!
//! - [`terminal_config`]: [`TerminalProfileSettings`], the recent/built-in listing switches

pub mod terminal_config;

pub use terminal_config::TerminalProfileSettings;

use crate::profile_types::{Profile, ProfileGroupConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Persisted configuration consumed by the profile service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Profiles
    // ========================================================================
    /// User-defined profiles, in the order the user stored them
    #[serde(default)]
    pub profiles: Vec<Profile>,

    /// User-defined profile groups
    #[serde(default)]
    pub groups: Vec<ProfileGroupConfig>,

    /// Stored per-provider defaults, keyed by provider id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profile_defaults: BTreeMap<String, Value>,

    /// Profile ids hidden from the selector
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile_blacklist: Vec<String>,

    // ========================================================================
    // Providers
    // ========================================================================
    /// Provider whose quick-connect entry is offered first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_quick_connect_provider: Option<String>,

    /// Provider ids switched off by the user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_providers: Vec<String>,

    // ========================================================================
    // Terminal
    // ========================================================================
    #[serde(default)]
    pub terminal: TerminalProfileSettings,
}
