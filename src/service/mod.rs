//! The profile registry.
//!
//! [`ProfilesService`] aggregates profiles from the configuration and from
//! every enabled [`ProfileProvider`], layers defaults, tracks recently
//! launched profiles and drives the interactive profile selector.
//!
//! Method groups live in sibling files:
//!
//! - `listing`: provider lookup, profile aggregation and default layering
//! - `launch`: tab parameters, launching and recent-profile tracking
//! - `selector_flow`: the interactive selector and quick connect
//! - `group_ops`: group listing, collapse state and group CRUD
//! - `profile_ops`: user profile CRUD and provider defaults

mod group_ops;
mod launch;
mod listing;
mod profile_ops;
mod selector_flow;

pub use listing::sort_profiles;
pub use profile_ops::{generate_profile_id, slugify};

use crate::host::{AppShell, IdentityTranslator, LogNotifications, NotificationSink, SettingsModule, Translator};
use crate::provider::ProfileProvider;
use crate::selector::SelectorUi;
use crate::storage::KeyValueStore;
use par_term_config::ConfigStore;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Profile registry over injected collaborators.
pub struct ProfilesService {
    config: Arc<ConfigStore>,
    storage: Arc<dyn KeyValueStore>,
    app: Arc<dyn AppShell>,
    selector: Arc<dyn SelectorUi>,
    notifications: Arc<dyn NotificationSink>,
    translate: Arc<dyn Translator>,
    /// Present only when the host ships a settings UI
    settings: Option<Arc<dyn SettingsModule>>,
    /// In registration order
    providers: Vec<Arc<dyn ProfileProvider>>,
    /// Set while a selector flow is composing or awaiting a pick
    selector_busy: AtomicBool,
}

impl ProfilesService {
    /// Create a service with log-only notifications and untranslated strings
    pub fn new(
        config: Arc<ConfigStore>,
        storage: Arc<dyn KeyValueStore>,
        app: Arc<dyn AppShell>,
        selector: Arc<dyn SelectorUi>,
    ) -> Self {
        Self {
            config,
            storage,
            app,
            selector,
            notifications: Arc::new(LogNotifications),
            translate: Arc::new(IdentityTranslator),
            settings: None,
            providers: Vec::new(),
            selector_busy: AtomicBool::new(false),
        }
    }

    /// Register a provider. A second provider with an already registered
    /// id is ignored.
    pub fn with_provider(mut self, provider: Arc<dyn ProfileProvider>) -> Self {
        if self.providers.iter().any(|p| p.id() == provider.id()) {
            log::warn!(
                "Provider id '{}' registered twice; keeping the first registration",
                provider.id()
            );
            return self;
        }
        self.providers.push(provider);
        self
    }

    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationSink>) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_translator(mut self, translate: Arc<dyn Translator>) -> Self {
        self.translate = translate;
        self
    }

    /// Offer the "manage profiles" entry, opening this settings module
    pub fn with_settings(mut self, settings: Arc<dyn SettingsModule>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// The configuration store this service reads and writes
    pub fn config(&self) -> &Arc<ConfigStore> {
        &self.config
    }
}
