//! The interactive profile selector and quick connect.

use super::ProfilesService;
use crate::error::{ProfilesError, Result};
use crate::provider::NewTabParameters;
use crate::recent::clear_recent;
use crate::selector::{SelectionSignal, SelectorOption};
use par_term_config::Profile;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What the picked option resolved to
enum Picked {
    Profile(Profile),
    /// A recent snapshot, re-resolved against the live list by id
    Recent(Profile),
    Nothing,
}

/// Clears the busy flag when the flow ends, however it ends
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ProfilesService {
    /// Let the user pick a profile (or quick-connect) through the selector UI.
    ///
    /// Returns `Ok(None)` immediately if a selector is already showing, and
    /// `Ok(None)` when the user picks an action rather than a profile or the
    /// selector is dismissed.
    pub async fn show_profile_selector(&self) -> Result<Option<Profile>> {
        if self.selector.is_active() || self.selector_busy.swap(true, Ordering::AcqRel) {
            log::debug!("Profile selector already active, ignoring request");
            return Ok(None);
        }
        let _busy = BusyGuard(&self.selector_busy);

        let (signal, mut picked) = SelectionSignal::new();
        let options = self.compose_selector_options(&signal).await;
        drop(signal);

        let prompt = self.translate.instant("Select profile or enter an address");
        if let Err(e) = self.selector.show(&prompt, options).await {
            // A choice made before the failure still stands
            let Ok(choice) = picked.try_recv() else {
                return Err(ProfilesError::Selector(e));
            };
            log::warn!("Profile selector failed after a choice was made: {}", e);
            return self.resolve_picked(choice).await;
        }

        let Ok(choice) = picked.await else {
            log::debug!("Profile selector dismissed without a choice");
            return Ok(None);
        };
        self.resolve_picked(choice).await
    }

    async fn resolve_picked(&self, picked: Picked) -> Result<Option<Profile>> {
        match picked {
            Picked::Profile(profile) => Ok(Some(profile)),
            Picked::Recent(snapshot) => {
                let Some(id) = snapshot.id.clone() else {
                    return Ok(Some(snapshot));
                };
                let live = self
                    .get_profiles()
                    .await
                    .into_iter()
                    .find(|p| p.id.as_deref() == Some(id.as_str()));
                Ok(Some(live.unwrap_or(snapshot)))
            }
            Picked::Nothing => Ok(None),
        }
    }

    /// Parse `query` with the first quick-connect provider that accepts it.
    ///
    /// Reports a notification and returns `None` when no provider can.
    pub fn quick_connect(&self, query: &str) -> Option<Profile> {
        let parsed = self
            .get_providers()
            .into_iter()
            .filter(|p| p.supports_quick_connect())
            .find_map(|p| p.quick_connect(query));
        if parsed.is_none() {
            log::warn!("No provider could parse quick-connect query {:?}", query);
            self.notifications
                .error(&format!("Could not parse \"{}\"", query));
        }
        parsed
    }

    async fn compose_selector_options(&self, signal: &SelectionSignal<Picked>) -> Vec<SelectorOption> {
        let mut options = Vec::new();

        // Recent profiles sort ahead of everything else
        let recent_label = self.translate.instant("Recent");
        let recent = self.get_recent_profiles();
        let recent_count = recent.len() as i32;
        for (index, profile) in recent.into_iter().enumerate() {
            let mut option = self.selector_option_for_profile(&profile);
            option.group = recent_label.clone();
            option.weight = index as i32 - (recent_count + 1);
            let signal = signal.clone();
            options.push(option.with_callback(move |_| {
                signal.complete(Picked::Recent(profile));
            }));
        }

        if recent_count > 0 {
            let storage = Arc::clone(&self.storage);
            let signal = signal.clone();
            let option = SelectorOption::new(self.translate.instant("Clear recent profiles"))
                .group(recent_label)
                .weight(-1);
            options.push(option.with_callback(move |_| {
                clear_recent(storage.as_ref());
                signal.complete(Picked::Nothing);
            }));
        }

        let profiles = self.get_profiles().await;
        let (show_builtin, blacklist) = {
            let config = self.config.read();
            (
                config.terminal.show_builtin_profiles,
                config.profile_blacklist.clone(),
            )
        };
        let listed = profiles
            .into_iter()
            .filter(|p| show_builtin || !p.is_builtin)
            .filter(|p| !p.is_template)
            .filter(|p| {
                p.id
                    .as_deref()
                    .is_some_and(|id| !blacklist.iter().any(|b| b == id))
            });
        for profile in listed {
            let mut option = self.selector_option_for_profile(&profile);
            option.weight = if profile.is_builtin { 2 } else { 1 };
            let signal = signal.clone();
            options.push(option.with_callback(move |_| {
                signal.complete(Picked::Profile(profile));
            }));
        }

        if let Some(settings) = &self.settings {
            let app = Arc::clone(&self.app);
            let tab_type = settings.tab_type().to_string();
            let signal = signal.clone();
            let option = SelectorOption::new(self.translate.instant("Manage profiles")).weight(10);
            options.push(option.with_callback(move |_| {
                let params = NewTabParameters::new(tab_type).input("active_tab", "profiles");
                if let Err(e) = app.open_new_tab_raw(params) {
                    log::error!("Failed to open profile settings: {}", e);
                }
                signal.complete(Picked::Nothing);
            }));
        }

        let default_provider = self.config.read().default_quick_connect_provider.clone();
        for provider in self
            .get_providers()
            .into_iter()
            .filter(|p| p.supports_quick_connect())
        {
            let is_default = default_provider.as_deref() == Some(provider.id());
            let option = SelectorOption::new(self.translate.instant("Quick connect"))
                .free_input_pattern(self.translate.instant("Connect to \"%s\"..."))
                .description(format!("({})", provider.name().to_uppercase()))
                .weight(if is_default { 0 } else { 1 });
            let signal = signal.clone();
            options.push(option.with_callback(move |query| {
                let parsed = provider.quick_connect(query);
                signal.complete(parsed.map_or(Picked::Nothing, Picked::Profile));
            }));
        }

        options
    }
}
