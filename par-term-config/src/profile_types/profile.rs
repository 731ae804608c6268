//! Core `Profile` struct and its builder/impl methods.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn is_false(value: &bool) -> bool {
    !*value
}

/// What happens to a tab once its session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndBehavior {
    /// Close on a clean exit, keep the tab open after an error
    #[default]
    Auto,
    /// Keep the tab open
    Keep,
    /// Restart the session in the same tab
    Reconnect,
    /// Always close the tab
    Close,
}

/// A profile describing how to open a new terminal or remote session.
///
/// Every field except `kind` may be absent. Absent fields are left out of
/// the serialized form so that default layers can fill them in when the
/// effective profile is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier (user profiles get one on creation, built-ins carry a stable one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Provider type tag, matched against a provider's id
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Display name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Owning group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Provider-specific options (host, port, command, ...)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,

    /// Icon identifier (emoji or icon name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Tab color (e.g. "#ff8800")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Keep the tab title fixed instead of following OSC title updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_dynamic_title: Option<bool>,

    /// Sort weight within the selector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    /// Supplied by a provider rather than stored by the user
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_builtin: bool,

    /// Only used as a starting point for new profiles, never launched directly
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_template: bool,

    /// Terminal color scheme override (opaque to the profile service)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_color_scheme: Option<Value>,

    /// What to do when the session ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_on_session_end: Option<SessionEndBehavior>,
}

impl Profile {
    /// Create a new profile of the given provider type
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder method to set the group
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Builder method to set a single provider option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Builder method to set icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method to set color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder method to disable dynamic tab titles
    pub fn disable_dynamic_title(mut self, disable: bool) -> Self {
        self.disable_dynamic_title = Some(disable);
        self
    }

    /// Builder method to set weight
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder method to mark the profile as provider-supplied
    pub fn builtin(mut self) -> Self {
        self.is_builtin = true;
        self
    }

    /// Builder method to mark the profile as a template
    pub fn template(mut self) -> Self {
        self.is_template = true;
        self
    }

    /// Builder method to set session-end behavior
    pub fn behavior_on_session_end(mut self, behavior: SessionEndBehavior) -> Self {
        self.behavior_on_session_end = Some(behavior);
        self
    }

    /// Group id, or the empty string when ungrouped
    pub fn group_or_empty(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// `"<group>/<name>"`, the primary key used when listing profiles
    pub fn sort_key(&self) -> String {
        format!("{}/{}", self.group_or_empty(), self.name)
    }

    /// True when both profiles share the same (group, name) pair
    pub fn same_slot(&self, other: &Profile) -> bool {
        self.group == other.group && self.name == other.name
    }

    /// Validate the profile.
    /// Returns a list of warnings (not errors - profiles can be incomplete)
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.name.trim().is_empty() {
            warnings.push("Profile name is empty".to_string());
        }

        if self.kind.trim().is_empty() {
            warnings.push(format!(
                "Profile '{}' has no type and cannot be resolved to a provider",
                self.name
            ));
        }

        warnings
    }
}
