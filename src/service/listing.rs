//! Provider lookup, profile aggregation and default layering.

use super::ProfilesService;
use crate::merge::{ConfigProxy, apply_defaults, builtin_profile_defaults, merge_layers};
use crate::provider::ProfileProvider;
use par_term_config::Profile;
use serde_json::{Map, Value};
use std::sync::Arc;

impl ProfilesService {
    /// Providers the user has not disabled, in registration order
    pub fn get_providers(&self) -> Vec<Arc<dyn ProfileProvider>> {
        let config = self.config.read();
        config
            .enabled_services(&self.providers, |p| p.id())
            .into_iter()
            .cloned()
            .collect()
    }

    /// All user profiles followed by every enabled provider's built-ins,
    /// sorted by [`sort_profiles`].
    pub async fn get_profiles(&self) -> Vec<Profile> {
        let providers = self.get_providers();
        let mut list = self.config.read().profiles.clone();
        for provider in &providers {
            let builtins = provider.get_builtin_profiles().await;
            log::debug!(
                "Provider '{}' supplied {} built-in profiles",
                provider.id(),
                builtins.len()
            );
            list.extend(builtins);
        }
        sort_profiles(&mut list);
        list
    }

    /// The provider whose id matches the profile's type tag
    pub fn provider_for_profile(&self, profile: &Profile) -> Option<Arc<dyn ProfileProvider>> {
        self.providers
            .iter()
            .find(|p| p.id() == profile.kind)
            .cloned()
    }

    /// The user's stored defaults for a provider (empty object when unset)
    pub fn get_provider_defaults(&self, provider: &dyn ProfileProvider) -> Value {
        self.config
            .read()
            .provider_defaults(provider.id())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Default layers for a profile, lowest precedence first: global field
    /// defaults, the provider's static defaults, the user's stored provider
    /// defaults. Layers that do not apply are empty objects.
    pub fn get_profile_defaults(&self, profile: &Profile, skip_user_defaults: bool) -> Vec<Value> {
        let provider = self.provider_for_profile(profile);
        let empty = || Value::Object(Map::new());
        vec![
            builtin_profile_defaults(),
            provider
                .as_ref()
                .map(|p| p.config_defaults())
                .unwrap_or_else(empty),
            match provider.as_deref() {
                Some(p) if !skip_user_defaults => self.get_provider_defaults(p),
                _ => empty(),
            },
        ]
    }

    /// A read-through, write-to-profile view of `profile` over its merged defaults
    pub fn get_config_proxy_for_profile<'a>(
        &self,
        profile: &'a mut Profile,
        skip_user_defaults: bool,
    ) -> ConfigProxy<'a> {
        let defaults = merge_layers(&self.get_profile_defaults(profile, skip_user_defaults));
        ConfigProxy::new(profile, defaults)
    }

    /// The profile with every default layer applied
    pub fn effective_profile(&self, profile: &Profile) -> Profile {
        let defaults = merge_layers(&self.get_profile_defaults(profile, false));
        apply_defaults(profile, &defaults)
    }
}

/// Order profiles by `"<group>/<name>"`, then move built-ins after user
/// profiles. Both passes are stable.
pub fn sort_profiles(list: &mut [Profile]) {
    list.sort_by_cached_key(|p| locale_key(&p.sort_key()));
    list.sort_by_key(|p| p.is_builtin);
}

/// Case-insensitive ordering with a byte-order tie-break
fn locale_key(key: &str) -> (String, String) {
    (key.to_lowercase(), key.to_string())
}
