//! Terminal-section settings read by the profile service.

use serde::{Deserialize, Serialize};

/// Settings under the `terminal:` key that affect profile listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalProfileSettings {
    /// How many recently launched profiles to remember (0 or less disables the list)
    #[serde(default = "crate::defaults::show_recent_profiles")]
    pub show_recent_profiles: i32,

    /// Offer provider-supplied profiles in the selector
    #[serde(default = "crate::defaults::show_builtin_profiles")]
    pub show_builtin_profiles: bool,
}

impl Default for TerminalProfileSettings {
    fn default() -> Self {
        Self {
            show_recent_profiles: crate::defaults::show_recent_profiles(),
            show_builtin_profiles: crate::defaults::show_builtin_profiles(),
        }
    }
}

impl TerminalProfileSettings {
    /// Recent-list capacity, clamped to zero for non-positive settings
    pub fn recent_capacity(&self) -> usize {
        usize::try_from(self.show_recent_profiles).unwrap_or(0)
    }
}
