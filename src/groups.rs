//! Profile groups as presented to the UI, plus persisted collapse state.

use crate::storage::{KeyValueStore, read_json, write_json};
use par_term_config::{Profile, ProfileGroupConfig};
use std::collections::HashMap;

/// Storage key of the group-id → collapsed map
pub const PROFILE_GROUP_COLLAPSED_KEY: &str = "profileGroupCollapsed";

/// Id of the synthetic group holding provider-supplied profiles
pub const BUILTIN_GROUP_ID: &str = "built-in";

/// Id of the synthetic group holding user profiles without a group
pub const UNGROUPED_GROUP_ID: &str = "ungrouped";

/// A profile group with its runtime state
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileGroup {
    pub id: String,
    pub name: String,
    /// False for the synthetic built-in and ungrouped groups
    pub editable: bool,
    pub collapsed: bool,
    /// Member profiles, only filled in when requested
    pub profiles: Option<Vec<Profile>>,
}

impl ProfileGroup {
    /// Runtime view of a stored user group
    pub fn from_config(config: &ProfileGroupConfig, collapsed: &HashMap<String, bool>) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            editable: true,
            collapsed: collapsed.get(&config.id).copied().unwrap_or(false),
            profiles: None,
        }
    }

    fn synthetic(id: &str, name: String, collapsed: &HashMap<String, bool>) -> Self {
        Self {
            id: id.to_string(),
            name,
            editable: false,
            collapsed: collapsed.get(id).copied().unwrap_or(false),
            profiles: None,
        }
    }
}

/// Persisted collapse flags by group id
pub fn load_collapsed(store: &dyn KeyValueStore) -> HashMap<String, bool> {
    read_json(store, PROFILE_GROUP_COLLAPSED_KEY)
}

/// Persist one group's collapse flag
pub fn save_collapsed(store: &dyn KeyValueStore, group_id: &str, collapsed: bool) {
    let mut map = load_collapsed(store);
    map.insert(group_id.to_string(), collapsed);
    write_json(store, PROFILE_GROUP_COLLAPSED_KEY, &map);
}

/// Labels for the synthetic groups, already translated
#[derive(Debug, Clone)]
pub struct SyntheticGroupLabels {
    pub builtin: String,
    pub ungrouped: String,
}

/// Build the group list.
///
/// With `profiles` given, each group claims the profiles whose group id
/// matches it, in group order; a claimed profile is not offered to later
/// groups. With `labels` given, the built-in group then claims the
/// remaining built-in profiles and the ungrouped group takes the rest.
/// Without `labels`, unclaimed profiles appear in no group.
pub fn build_groups(
    configs: &[ProfileGroupConfig],
    collapsed: &HashMap<String, bool>,
    profiles: Option<Vec<Profile>>,
    labels: Option<SyntheticGroupLabels>,
) -> Vec<ProfileGroup> {
    let mut pool = profiles;
    let mut groups: Vec<ProfileGroup> = configs
        .iter()
        .map(|config| {
            let mut group = ProfileGroup::from_config(config, collapsed);
            if let Some(remaining) = pool.as_mut() {
                let (members, rest): (Vec<_>, Vec<_>) = std::mem::take(remaining)
                    .into_iter()
                    .partition(|p| p.group.as_deref() == Some(config.id.as_str()));
                *remaining = rest;
                group.profiles = Some(members);
            }
            group
        })
        .collect();

    if let Some(labels) = labels {
        let mut builtin = ProfileGroup::synthetic(BUILTIN_GROUP_ID, labels.builtin, collapsed);
        let mut ungrouped =
            ProfileGroup::synthetic(UNGROUPED_GROUP_ID, labels.ungrouped, collapsed);
        if let Some(remaining) = pool.take() {
            let (builtins, rest): (Vec<_>, Vec<_>) =
                remaining.into_iter().partition(|p| p.is_builtin);
            builtin.profiles = Some(builtins);
            ungrouped.profiles = Some(rest);
        }
        groups.push(builtin);
        groups.push(ungrouped);
    }

    groups
}
