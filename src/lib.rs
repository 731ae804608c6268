//! Profile management for the par-term terminal emulator.
//!
//! A profile describes how to open a new terminal or remote session. This
//! crate provides the [`ProfilesService`] registry that:
//!
//! - aggregates user profiles and provider-supplied built-ins into one sorted list
//! - layers global, provider and user defaults into an effective profile
//! - opens tabs for profiles and tracks the recently launched ones
//! - drives the interactive profile selector and quick connect
//! - lists profile groups and persists their collapse state
//!
//! Everything outside that contract (providers, the selector widget, the
//! application shell, translations) is injected through the traits in
//! [`provider`], [`selector`], [`host`] and [`storage`].

pub mod error;
pub mod groups;
pub mod host;
pub mod merge;
pub mod provider;
pub mod recent;
pub mod selector;
pub mod service;
pub mod storage;

pub use error::{ProfilesError, Result};
pub use groups::{BUILTIN_GROUP_ID, PROFILE_GROUP_COLLAPSED_KEY, ProfileGroup, UNGROUPED_GROUP_ID};
pub use host::{AppShell, IdentityTranslator, LogNotifications, NotificationSink, SettingsModule, TabId, Translator};
pub use merge::{ConfigProxy, builtin_profile_defaults, deep_merge, merge_layers};
pub use provider::{NewTabParameters, ProfileProvider};
pub use recent::RECENT_PROFILES_KEY;
pub use selector::{SelectionSignal, SelectorCallback, SelectorOption, SelectorUi, sort_options};
pub use service::{ProfilesService, generate_profile_id, slugify, sort_profiles};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export the config types callers need alongside the service
pub use par_term_config::{Config, ConfigStore, Profile, ProfileGroupConfig, SessionEndBehavior};
