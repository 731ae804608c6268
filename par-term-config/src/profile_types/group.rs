//! Persisted profile group definitions.

use serde::{Deserialize, Serialize};

/// A user-defined profile group as stored in the config file.
///
/// Runtime-only state (collapse flag, member list, editability) lives on the
/// service-side group view, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileGroupConfig {
    /// Unique identifier, referenced by `Profile::group`
    pub id: String,

    /// Display name
    pub name: String,
}

impl ProfileGroupConfig {
    /// Create a group definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
