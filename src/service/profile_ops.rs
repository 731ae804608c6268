//! User profile CRUD and stored provider defaults.

use super::ProfilesService;
use crate::error::{ProfilesError, Result};
use crate::provider::ProfileProvider;
use crate::recent::forget_recent;
use par_term_config::Profile;
use serde_json::Value;
use uuid::Uuid;

impl ProfilesService {
    /// Store a new user profile and return it as stored.
    ///
    /// An id is generated when `gen_id` is set or the profile has none.
    pub fn new_profile(&self, mut profile: Profile, gen_id: bool) -> Result<Profile> {
        if gen_id || profile.id.is_none() {
            profile.id = Some(generate_profile_id(&profile));
        }
        profile.is_builtin = false;
        self.config.write().profiles.push(profile.clone());
        self.config.save()?;
        log::info!("Created profile '{}'", profile.name);
        Ok(profile)
    }

    /// Replace the stored user profile with the same id
    pub fn write_profile(&self, profile: &Profile) -> Result<()> {
        let id = profile
            .id
            .as_deref()
            .ok_or_else(|| ProfilesError::UnknownProfile(profile.name.clone()))?;
        {
            let mut config = self.config.write();
            let stored = config
                .find_profile_mut(id)
                .ok_or_else(|| ProfilesError::UnknownProfile(id.to_string()))?;
            *stored = profile.clone();
        }
        self.config.save()?;
        Ok(())
    }

    /// Remove a user profile, along with its blacklist and recent entries
    pub fn delete_profile(&self, id: &str) -> Result<()> {
        {
            let mut config = self.config.write();
            let before = config.profiles.len();
            config.profiles.retain(|p| p.id.as_deref() != Some(id));
            if config.profiles.len() == before {
                return Err(ProfilesError::UnknownProfile(id.to_string()));
            }
            config.profile_blacklist.retain(|b| b != id);
        }
        forget_recent(self.storage.as_ref(), id);
        self.config.save()?;
        log::info!("Deleted profile {}", id);
        Ok(())
    }

    /// Remove every user profile matching `filter`; returns how many were removed
    pub fn delete_bulk_profiles<F>(&self, filter: F) -> Result<usize>
    where
        F: Fn(&Profile) -> bool,
    {
        let removed: Vec<Profile> = {
            let mut config = self.config.write();
            let (removed, kept): (Vec<Profile>, Vec<Profile>) = std::mem::take(&mut config.profiles)
                .into_iter()
                .partition(|p| filter(p));
            config.profiles = kept;
            removed
        };
        for id in removed.iter().filter_map(|p| p.id.as_deref()) {
            forget_recent(self.storage.as_ref(), id);
        }
        if !removed.is_empty() {
            self.config.save()?;
        }
        Ok(removed.len())
    }

    /// Replace the user's stored defaults for a provider
    pub fn set_provider_defaults(&self, provider: &dyn ProfileProvider, defaults: Value) -> Result<()> {
        self.config
            .write()
            .profile_defaults
            .insert(provider.id().to_string(), defaults);
        self.config.save()?;
        Ok(())
    }
}

/// `"<type>:custom:<slug>:<uuid>"`
pub fn generate_profile_id(profile: &Profile) -> String {
    format!(
        "{}:custom:{}:{}",
        profile.kind,
        slugify(&profile.name),
        Uuid::new_v4()
    )
}

/// Lowercase ASCII alphanumerics separated by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Prod Server"), "my-prod-server");
        assert_eq!(slugify("  --weird__name!! "), "weird-name");
        assert_eq!(slugify("äbc"), "bc");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_generate_profile_id_shape() {
        let id = generate_profile_id(&Profile::new("ssh", "Prod Box"));
        let parts: Vec<&str> = id.splitn(4, ':').collect();
        assert_eq!(parts[0], "ssh");
        assert_eq!(parts[1], "custom");
        assert_eq!(parts[2], "prod-box");
        assert!(Uuid::parse_str(parts[3]).is_ok());
    }
}
