//! Tab parameters, launching and recent-profile tracking.

use super::ProfilesService;
use crate::error::{ProfilesError, Result};
use crate::host::TabId;
use crate::provider::NewTabParameters;
use crate::recent::{clear_recent, load_recent, record_launch};
use crate::selector::SelectorOption;
use par_term_config::Profile;

impl ProfilesService {
    /// Build tab parameters for a profile through its provider.
    ///
    /// The title is the profile's own name; dynamic-title, color and icon
    /// come from the effective profile and are only set when present.
    pub async fn new_tab_parameters_for_profile(
        &self,
        profile: &Profile,
    ) -> Option<NewTabParameters> {
        let Some(provider) = self.provider_for_profile(profile) else {
            log::warn!(
                "No provider for profile '{}' (type '{}')",
                profile.name,
                profile.kind
            );
            return None;
        };
        let effective = self.effective_profile(profile);
        let mut params = provider.get_new_tab_parameters(&effective).await?;

        params.title = Some(profile.name.clone());
        if effective.disable_dynamic_title == Some(true) {
            params.disable_dynamic_title = true;
        }
        if let Some(color) = effective.color.filter(|c| !c.is_empty()) {
            params.color = Some(color);
        }
        if let Some(icon) = effective.icon.filter(|i| !i.is_empty()) {
            params.icon = Some(icon);
        }
        Some(params)
    }

    /// Open a tab for `profile`. `Ok(None)` when the profile has no
    /// provider or the provider declined.
    pub async fn open_new_tab_for_profile(&self, profile: &Profile) -> Result<Option<TabId>> {
        let Some(params) = self.new_tab_parameters_for_profile(profile).await else {
            return Ok(None);
        };
        let tab = self.app.open_new_tab(params).map_err(ProfilesError::Shell)?;
        log::info!("Opened profile '{}' in tab {}", profile.name, tab);
        Ok(Some(tab))
    }

    /// Open `profile` and move it to the front of the recent list.
    ///
    /// The recent list is updated even when no tab was opened.
    pub async fn launch_profile(&self, profile: &Profile) -> Result<Option<TabId>> {
        let tab = self.open_new_tab_for_profile(profile).await?;
        let capacity = self.recent_capacity();
        record_launch(self.storage.as_ref(), profile, capacity);
        Ok(tab)
    }

    /// Recently launched profiles, most recent first
    pub fn get_recent_profiles(&self) -> Vec<Profile> {
        load_recent(self.storage.as_ref(), self.recent_capacity())
    }

    /// Forget all recently launched profiles
    pub fn clear_recent_profiles(&self) {
        clear_recent(self.storage.as_ref());
    }

    /// Selector entry for a profile: its own fields plus the provider's
    /// description and quick-connect rendering.
    pub fn selector_option_for_profile(&self, profile: &Profile) -> SelectorOption {
        let mut option = SelectorOption::from_profile(profile);
        if let Some(provider) = self.provider_for_profile(profile) {
            option.free_input_equivalent = provider.to_quick_connect_string(profile);
            option.description = provider.get_description(profile);
        }
        option
    }

    fn recent_capacity(&self) -> usize {
        self.config.read().terminal.recent_capacity()
    }
}
