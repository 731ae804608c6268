//! Default layering for profiles.
//!
//! A profile's effective configuration is built from four layers, lowest
//! precedence first:
//!
//! 1. [`builtin_profile_defaults`], the static field table
//! 2. the provider's own `config_defaults`
//! 3. the user's stored defaults for that provider (`profile_defaults`)
//! 4. the profile's own fields
//!
//! Layers are merged structurally: nested objects (notably `options`) are
//! merged key by key, so overriding one option keeps its siblings.

use crate::error::{ProfilesError, Result};
use par_term_config::Profile;
use serde_json::{Map, Value, json};

/// Field defaults every profile starts from
pub fn builtin_profile_defaults() -> Value {
    json!({
        "id": "",
        "type": "",
        "name": "",
        "group": "",
        "options": {},
        "icon": "",
        "color": "",
        "disable_dynamic_title": false,
        "weight": 0,
        "is_builtin": false,
        "is_template": false,
        "terminal_color_scheme": null,
        "behavior_on_session_end": "auto",
    })
}

/// Merge `overlay` into `base`. Objects merge key by key; any other overlay
/// value replaces what was in `base`.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Fold layers (lowest precedence first) into one object
pub fn merge_layers<'a, I>(layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Value::Object(Map::new());
    for layer in layers {
        deep_merge(&mut merged, layer);
    }
    merged
}

/// Serialized form of a profile, containing only the fields it sets
pub(crate) fn profile_to_value(profile: &Profile) -> Value {
    // Profile serialization has no fallible fields (string keys, plain data).
    serde_json::to_value(profile).unwrap_or_else(|e| {
        log::error!("Failed to serialize profile '{}': {}", profile.name, e);
        Value::Object(Map::new())
    })
}

/// Materialize `profile` on top of already-merged `defaults`.
///
/// If a default layer holds a value of the wrong shape the profile is
/// returned unmerged and a warning is logged.
pub fn apply_defaults(profile: &Profile, defaults: &Value) -> Profile {
    let mut merged = defaults.clone();
    deep_merge(&mut merged, &profile_to_value(profile));
    match serde_json::from_value(merged) {
        Ok(effective) => effective,
        Err(e) => {
            log::warn!(
                "Ignoring malformed defaults for profile '{}': {}",
                profile.name,
                e
            );
            profile.clone()
        }
    }
}

/// A profile paired with its merged defaults.
///
/// Reads fall back to the defaults for fields the profile does not set;
/// writes go to the profile only.
#[derive(Debug)]
pub struct ConfigProxy<'a> {
    profile: &'a mut Profile,
    defaults: Value,
}

impl<'a> ConfigProxy<'a> {
    pub fn new(profile: &'a mut Profile, defaults: Value) -> Self {
        Self { profile, defaults }
    }

    /// The backing profile, without defaults applied
    pub fn profile(&self) -> &Profile {
        self.profile
    }

    /// The merged defaults this proxy falls back to
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// Effective value of a top-level field (serialized name, e.g. `"disable_dynamic_title"`).
    ///
    /// Returns `None` only when neither the profile nor any default layer sets it.
    pub fn get(&self, field: &str) -> Option<Value> {
        let own = profile_to_value(self.profile);
        let own = own.get(field);
        let fallback = self.defaults.get(field);
        match (own, fallback) {
            (Some(own @ Value::Object(_)), Some(fallback @ Value::Object(_))) => {
                let mut merged = fallback.clone();
                deep_merge(&mut merged, own);
                Some(merged)
            }
            (Some(own), _) => Some(own.clone()),
            (None, fallback) => fallback.cloned(),
        }
    }

    /// Effective value of a single provider option
    pub fn get_option(&self, key: &str) -> Option<Value> {
        self.profile.options.get(key).cloned().or_else(|| {
            self.defaults
                .get("options")
                .and_then(|options| options.get(key))
                .cloned()
        })
    }

    /// Write a top-level field on the backing profile. `Value::Null` clears it.
    pub fn set(&mut self, field: &str, value: Value) -> Result<()> {
        let mut own = profile_to_value(self.profile);
        if let Value::Object(map) = &mut own {
            if value.is_null() {
                map.remove(field);
            } else {
                map.insert(field.to_string(), value);
            }
        }
        *self.profile = serde_json::from_value(own).map_err(|source| ProfilesError::InvalidField {
            field: field.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Write a single provider option on the backing profile
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.profile.options.insert(key.into(), value.into());
    }

    pub fn name(&self) -> String {
        self.get_str("name").unwrap_or_default()
    }

    /// Effective icon, `None` when empty
    pub fn icon(&self) -> Option<String> {
        self.get_str("icon").filter(|s| !s.is_empty())
    }

    /// Effective color, `None` when empty
    pub fn color(&self) -> Option<String> {
        self.get_str("color").filter(|s| !s.is_empty())
    }

    pub fn disable_dynamic_title(&self) -> bool {
        self.get("disable_dynamic_title")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    /// The fully merged profile
    pub fn effective(&self) -> Profile {
        apply_defaults(self.profile, &self.defaults)
    }

    fn get_str(&self, field: &str) -> Option<String> {
        self.get(field)
            .and_then(|v| v.as_str().map(str::to_string))
    }
}
