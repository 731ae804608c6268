//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a config field and by the matching `Default` impl, so the
//! two can never drift apart.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Profiles ───────────────────────────────────────────────────────────────

/// Number of recently launched profiles kept and shown in the selector
pub fn show_recent_profiles() -> i32 {
    3
}

/// Provider-supplied profiles are listed alongside user profiles
pub fn show_builtin_profiles() -> bool {
    bool_true()
}

/// Name of the config file inside the config directory
pub fn config_file_name() -> &'static str {
    "config.yaml"
}

/// Name of the local UI state file inside the config directory
pub fn state_file_name() -> &'static str {
    "state.json"
}
