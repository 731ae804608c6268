//! Contracts for the host application collaborators the profile service
//! drives: the tab-opening shell, user notifications, translations and the
//! optional settings module.

use crate::provider::NewTabParameters;

/// Opaque handle of a tab opened by the application shell
pub type TabId = u64;

/// The application shell that owns the tab strip.
pub trait AppShell: Send + Sync {
    /// Open a tab for a profile launch
    fn open_new_tab(&self, params: NewTabParameters) -> anyhow::Result<TabId>;

    /// Open an arbitrary tab component (settings pages and other non-session tabs)
    fn open_new_tab_raw(&self, params: NewTabParameters) -> anyhow::Result<TabId> {
        self.open_new_tab(params)
    }
}

/// User-visible notifications.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Notification sink that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifications;

impl NotificationSink for LogNotifications {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Translation lookup for UI strings.
pub trait Translator: Send + Sync {
    fn instant(&self, key: &str) -> String;
}

/// Returns every key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn instant(&self, key: &str) -> String {
        key.to_string()
    }
}

/// The settings UI, when the host ships one.
pub trait SettingsModule: Send + Sync {
    /// Tab component type of the settings page
    fn tab_type(&self) -> &str;
}
