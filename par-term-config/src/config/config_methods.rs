//! Query and validation helpers on `Config`.

use super::config_struct::Config;
use crate::profile_types::{Profile, ProfileGroupConfig};
use serde_json::Value;
use std::collections::HashSet;

impl Config {
    /// Filter `candidates` down to the services the user has not disabled,
    /// preserving their order.
    pub fn enabled_services<'a, T, F>(&self, candidates: &'a [T], id_of: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> &str,
    {
        candidates
            .iter()
            .filter(|c| !self.disabled_providers.iter().any(|d| d == id_of(*c)))
            .collect()
    }

    /// Whether the profile id is hidden from the selector
    pub fn is_blacklisted(&self, id: &str) -> bool {
        self.profile_blacklist.iter().any(|b| b == id)
    }

    /// Find a stored user profile by id
    pub fn find_profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id.as_deref() == Some(id))
    }

    /// Find a stored user profile by id, mutably
    pub fn find_profile_mut(&mut self, id: &str) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|p| p.id.as_deref() == Some(id))
    }

    /// Find a stored group by id
    pub fn find_group(&self, id: &str) -> Option<&ProfileGroupConfig> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Stored defaults object for a provider, if any
    pub fn provider_defaults(&self, provider_id: &str) -> Option<&Value> {
        self.profile_defaults.get(provider_id)
    }

    /// Collect validation warnings for the stored profiles and groups.
    ///
    /// Returned as warnings rather than errors: a config with a bad entry is
    /// still loaded and the bad entry is simply unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            warnings.extend(profile.validate());
            if let Some(id) = profile.id.as_deref()
                && !seen.insert(id)
            {
                warnings.push(format!("Duplicate profile id: {}", id));
            }
        }

        let mut seen_groups = HashSet::new();
        for group in &self.groups {
            if !seen_groups.insert(group.id.as_str()) {
                warnings.push(format!("Duplicate group id: {}", group.id));
            }
        }

        for (provider, defaults) in &self.profile_defaults {
            if !defaults.is_object() {
                warnings.push(format!(
                    "Defaults for provider '{}' are not a mapping and will be ignored",
                    provider
                ));
            }
        }

        warnings
    }
}
