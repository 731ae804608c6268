//! Profile provider seam.
//!
//! Each backend kind (local shell, SSH, serial, ...) implements
//! [`ProfileProvider`] once. The profile service never inspects provider
//! types: it resolves a profile's provider by matching `Profile::kind`
//! against [`ProfileProvider::id`].

use async_trait::async_trait;
use par_term_config::Profile;
use serde_json::{Map, Value};

/// Everything the application shell needs to open a tab for a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTabParameters {
    /// Tab component to instantiate (provider-defined, e.g. `"terminal"`)
    pub tab_type: String,
    /// Initial tab title
    pub title: Option<String>,
    /// Keep the title fixed instead of following OSC title updates
    pub disable_dynamic_title: bool,
    /// Tab color
    pub color: Option<String>,
    /// Tab icon
    pub icon: Option<String>,
    /// Provider-specific inputs for the tab component
    pub inputs: Map<String, Value>,
}

impl NewTabParameters {
    pub fn new(tab_type: impl Into<String>) -> Self {
        Self {
            tab_type: tab_type.into(),
            ..Default::default()
        }
    }

    /// Builder method to add a component input
    pub fn input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }
}

/// A pluggable backend supplying built-in profiles and per-type behavior.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Type tag matched against `Profile::kind`
    fn id(&self) -> &str;

    /// Human-readable provider name (shown next to quick-connect entries)
    fn name(&self) -> &str;

    /// Static defaults for profiles of this type.
    ///
    /// Must be a JSON object; sits between the global field defaults and
    /// the user's stored provider defaults.
    fn config_defaults(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Whether [`quick_connect`](Self::quick_connect) can parse free text
    fn supports_quick_connect(&self) -> bool {
        false
    }

    /// Profiles this provider offers without the user creating them.
    /// They should carry `is_builtin = true` and a stable id.
    async fn get_builtin_profiles(&self) -> Vec<Profile>;

    /// Tab parameters for an effective (defaults-applied) profile.
    /// `None` means the provider declines to open it.
    async fn get_new_tab_parameters(&self, profile: &Profile) -> Option<NewTabParameters>;

    /// Short description shown under the profile name in the selector
    fn get_description(&self, _profile: &Profile) -> Option<String> {
        None
    }

    /// Parse a quick-connect query into a profile
    fn quick_connect(&self, _query: &str) -> Option<Profile> {
        None
    }

    /// Render a profile as the quick-connect text that would recreate it
    fn to_quick_connect_string(&self, _profile: &Profile) -> Option<String> {
        None
    }
}
