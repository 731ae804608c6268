//! Group listing, collapse state and group CRUD.

use super::ProfilesService;
use crate::error::{ProfilesError, Result};
use crate::groups::{ProfileGroup, SyntheticGroupLabels, build_groups, load_collapsed, save_collapsed};
use par_term_config::ProfileGroupConfig;
use uuid::Uuid;

impl ProfilesService {
    /// List user groups, optionally with their member profiles and the
    /// synthetic built-in/ungrouped groups.
    ///
    /// A profile whose group id matches no listed group is left out when
    /// `include_non_user_group` is false.
    pub async fn get_profile_groups(
        &self,
        include_profiles: bool,
        include_non_user_group: bool,
    ) -> Vec<ProfileGroup> {
        let profiles = if include_profiles {
            Some(self.get_profiles().await)
        } else {
            None
        };
        let collapsed = load_collapsed(self.storage.as_ref());
        let configs = self.config.read().groups.clone();
        let labels = include_non_user_group.then(|| SyntheticGroupLabels {
            builtin: self.translate.instant("Built-in"),
            ungrouped: self.translate.instant("Ungrouped"),
        });
        build_groups(&configs, &collapsed, profiles, labels)
    }

    /// Persist the group's current collapsed flag
    pub fn save_profile_group_collapse(&self, group: &ProfileGroup) {
        save_collapsed(self.storage.as_ref(), &group.id, group.collapsed);
    }

    /// Create and store a new user group
    pub fn new_profile_group(&self, name: impl Into<String>) -> Result<ProfileGroupConfig> {
        let group = ProfileGroupConfig::new(Uuid::new_v4().to_string(), name);
        self.config.write().groups.push(group.clone());
        self.config.save()?;
        log::info!("Created profile group '{}' ({})", group.name, group.id);
        Ok(group)
    }

    /// Replace the stored group with the same id
    pub fn write_profile_group(&self, group: &ProfileGroupConfig) -> Result<()> {
        {
            let mut config = self.config.write();
            let stored = config
                .groups
                .iter_mut()
                .find(|g| g.id == group.id)
                .ok_or_else(|| ProfilesError::UnknownGroup(group.id.clone()))?;
            *stored = group.clone();
        }
        self.config.save()?;
        Ok(())
    }

    /// Remove a group. Its profiles are deleted when `delete_profiles`,
    /// otherwise they become ungrouped.
    pub fn delete_profile_group(&self, group_id: &str, delete_profiles: bool) -> Result<()> {
        {
            let mut config = self.config.write();
            let before = config.groups.len();
            config.groups.retain(|g| g.id != group_id);
            if config.groups.len() == before {
                return Err(ProfilesError::UnknownGroup(group_id.to_string()));
            }

            let in_group = |p: &par_term_config::Profile| p.group.as_deref() == Some(group_id);
            if delete_profiles {
                config.profiles.retain(|p| !in_group(p));
            } else {
                for profile in config.profiles.iter_mut().filter(|p| in_group(&**p)) {
                    profile.group = None;
                }
            }
        }
        self.config.save()?;
        log::info!(
            "Deleted profile group {} ({} its profiles)",
            group_id,
            if delete_profiles { "with" } else { "keeping" }
        );
        Ok(())
    }
}
