//! Shared integration test helpers for par-term-profiles.
//!
//! Fakes for every collaborator the profile service drives, plus a
//! [`harness`] that wires them together around an in-memory config.
//!
//! Include with `mod common;` at the top of each test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when only a subset of
//! helpers is used per file.

#![allow(dead_code)]

use async_trait::async_trait;
use par_term_profiles::{
    AppShell, Config, ConfigStore, KeyValueStore, MemoryStore, NewTabParameters,
    NotificationSink, Profile, ProfileProvider, ProfilesService, SelectorOption, SelectorUi,
    SettingsModule, TabId,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

// ============================================================================
// Provider
// ============================================================================

/// Provider with canned built-ins. Quick connect parses `user@host`.
pub struct FakeProvider {
    id: String,
    name: String,
    builtins: Vec<Profile>,
    defaults: Value,
    quick_connect: bool,
    declines_tabs: bool,
}

impl FakeProvider {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            builtins: Vec::new(),
            defaults: serde_json::json!({}),
            quick_connect: false,
            declines_tabs: false,
        }
    }

    pub fn builtin(mut self, profile: Profile) -> Self {
        self.builtins.push(profile.builtin());
        self
    }

    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn quick_connect(mut self) -> Self {
        self.quick_connect = true;
        self
    }

    pub fn declining_tabs(mut self) -> Self {
        self.declines_tabs = true;
        self
    }
}

#[async_trait]
impl ProfileProvider for FakeProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn config_defaults(&self) -> Value {
        self.defaults.clone()
    }

    fn supports_quick_connect(&self) -> bool {
        self.quick_connect
    }

    async fn get_builtin_profiles(&self) -> Vec<Profile> {
        self.builtins.clone()
    }

    async fn get_new_tab_parameters(&self, profile: &Profile) -> Option<NewTabParameters> {
        if self.declines_tabs {
            return None;
        }
        Some(
            NewTabParameters::new("terminal")
                .input("options", Value::Object(profile.options.clone())),
        )
    }

    fn get_description(&self, profile: &Profile) -> Option<String> {
        profile
            .options
            .get("host")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn quick_connect(&self, query: &str) -> Option<Profile> {
        let (user, host) = query.split_once('@')?;
        if user.is_empty() || host.is_empty() {
            return None;
        }
        Some(
            Profile::new(&self.id, query)
                .option("user", user)
                .option("host", host),
        )
    }

    fn to_quick_connect_string(&self, profile: &Profile) -> Option<String> {
        let user = profile.options.get("user")?.as_str()?;
        let host = profile.options.get("host")?.as_str()?;
        Some(format!("{}@{}", user, host))
    }
}

// ============================================================================
// Application shell
// ============================================================================

#[derive(Default)]
pub struct RecordingShell {
    pub opened: Mutex<Vec<NewTabParameters>>,
    pub opened_raw: Mutex<Vec<NewTabParameters>>,
    pub fail: AtomicBool,
    next_id: AtomicU64,
}

impl AppShell for RecordingShell {
    fn open_new_tab(&self, params: NewTabParameters) -> anyhow::Result<TabId> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("tab limit reached");
        }
        self.opened.lock().push(params);
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn open_new_tab_raw(&self, params: NewTabParameters) -> anyhow::Result<TabId> {
        self.opened_raw.lock().push(params);
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

// ============================================================================
// Selector UI
// ============================================================================

/// What the scripted user does when the selector is shown
#[derive(Debug, Clone)]
pub enum Pick {
    /// Select the first option with this name (and group, when given)
    Option {
        name: String,
        group: Option<String>,
        query: String,
    },
    /// Select the named option, then fail while closing
    SelectThenFail(String),
    /// Close the selector without choosing
    Dismiss,
    /// The widget itself fails
    Fail,
}

impl Pick {
    pub fn named(name: &str) -> Self {
        Pick::Option {
            name: name.to_string(),
            group: None,
            query: String::new(),
        }
    }

    pub fn in_group(name: &str, group: &str) -> Self {
        Pick::Option {
            name: name.to_string(),
            group: Some(group.to_string()),
            query: String::new(),
        }
    }

    pub fn typed(name: &str, query: &str) -> Self {
        Pick::Option {
            name: name.to_string(),
            group: None,
            query: query.to_string(),
        }
    }
}

/// Metadata of an option the selector was shown
#[derive(Debug, Clone, PartialEq)]
pub struct ShownOption {
    pub name: String,
    pub group: String,
    pub weight: i32,
    pub description: Option<String>,
    pub free_input_pattern: Option<String>,
    pub free_input_equivalent: Option<String>,
}

impl From<&SelectorOption> for ShownOption {
    fn from(option: &SelectorOption) -> Self {
        Self {
            name: option.name.clone(),
            group: option.group.clone(),
            weight: option.weight,
            description: option.description.clone(),
            free_input_pattern: option.free_input_pattern.clone(),
            free_input_equivalent: option.free_input_equivalent.clone(),
        }
    }
}

pub struct ScriptedSelector {
    pub active: AtomicBool,
    pub pick: Mutex<Pick>,
    pub prompts: Mutex<Vec<String>>,
    pub shown: Mutex<Vec<ShownOption>>,
    pub show_calls: AtomicUsize,
    /// Yield to the runtime once before acting, leaving the flow pending
    pub yield_first: AtomicBool,
}

impl Default for ScriptedSelector {
    fn default() -> Self {
        Self {
            active: AtomicBool::new(false),
            pick: Mutex::new(Pick::Dismiss),
            prompts: Mutex::new(Vec::new()),
            shown: Mutex::new(Vec::new()),
            show_calls: AtomicUsize::new(0),
            yield_first: AtomicBool::new(false),
        }
    }
}

impl ScriptedSelector {
    pub fn will(&self, pick: Pick) {
        *self.pick.lock() = pick;
    }

    pub fn shown(&self) -> Vec<ShownOption> {
        self.shown.lock().clone()
    }

    pub fn shown_named(&self, name: &str) -> Vec<ShownOption> {
        self.shown().into_iter().filter(|o| o.name == name).collect()
    }
}

#[async_trait]
impl SelectorUi for ScriptedSelector {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn show(&self, prompt: &str, options: Vec<SelectorOption>) -> anyhow::Result<()> {
        self.show_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());
        *self.shown.lock() = options.iter().map(ShownOption::from).collect();
        if self.yield_first.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let pick = self.pick.lock().clone();
        match pick {
            Pick::Option { name, group, query } => {
                let chosen = options.into_iter().find(|o| {
                    o.name == name && group.as_deref().is_none_or(|g| o.group == g)
                });
                match chosen {
                    Some(option) => {
                        option.select(&query);
                    }
                    None => anyhow::bail!("no option named {name}"),
                }
            }
            Pick::SelectThenFail(name) => {
                if let Some(option) = options.into_iter().find(|o| o.name == name) {
                    option.select("");
                }
                anyhow::bail!("selector teardown failed");
            }
            Pick::Dismiss => drop(options),
            Pick::Fail => anyhow::bail!("selector crashed"),
        }
        Ok(())
    }
}

// ============================================================================
// Notifications / settings
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifications {
    pub errors: Mutex<Vec<String>>,
}

impl NotificationSink for RecordingNotifications {
    fn error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }
}

pub struct FakeSettings;

impl SettingsModule for FakeSettings {
    fn tab_type(&self) -> &str {
        "settings"
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub service: ProfilesService,
    pub config: Arc<ConfigStore>,
    pub storage: Arc<MemoryStore>,
    pub shell: Arc<RecordingShell>,
    pub selector: Arc<ScriptedSelector>,
    pub notifications: Arc<RecordingNotifications>,
}

impl Harness {
    /// Offer the "manage profiles" action through [`FakeSettings`]
    pub fn with_settings(self) -> Self {
        Self {
            service: self.service.with_settings(Arc::new(FakeSettings)),
            ..self
        }
    }
}

/// Build a service over `config` with the given providers registered in order
pub fn harness(config: Config, providers: Vec<FakeProvider>) -> Harness {
    harness_with_store(ConfigStore::in_memory(config), providers)
}

pub fn harness_with_store(store: ConfigStore, providers: Vec<FakeProvider>) -> Harness {
    let config = Arc::new(store);
    let storage = Arc::new(MemoryStore::new());
    let shell = Arc::new(RecordingShell::default());
    let selector = Arc::new(ScriptedSelector::default());
    let notifications = Arc::new(RecordingNotifications::default());

    let mut service = ProfilesService::new(
        Arc::clone(&config),
        Arc::clone(&storage) as Arc<dyn KeyValueStore>,
        Arc::clone(&shell) as Arc<dyn AppShell>,
        Arc::clone(&selector) as Arc<dyn SelectorUi>,
    )
    .with_notifications(Arc::clone(&notifications) as Arc<dyn NotificationSink>);
    for provider in providers {
        service = service.with_provider(Arc::new(provider));
    }

    Harness {
        service,
        config,
        storage,
        shell,
        selector,
        notifications,
    }
}

/// A stored user profile with a fixed id
pub fn user_profile(kind: &str, name: &str) -> Profile {
    Profile::new(kind, name).id(format!("{}:custom:{}", kind, name))
}

pub fn names(list: &[Profile]) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
}
