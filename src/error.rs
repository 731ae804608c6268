//! Error type for the profile service.

use par_term_config::ConfigError;

/// Errors surfaced by [`ProfilesService`](crate::ProfilesService) operations.
///
/// Quick-connect parse failures and malformed persisted UI state are not
/// errors: the former is reported through the notification sink, the latter
/// falls back to empty state.
#[derive(Debug, thiserror::Error)]
pub enum ProfilesError {
    /// Loading or saving the configuration failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The selector UI failed while showing the composed options
    #[error("profile selector failed: {0}")]
    Selector(#[source] anyhow::Error),

    /// The application shell could not open the requested tab
    #[error("failed to open tab: {0}")]
    Shell(#[source] anyhow::Error),

    /// No stored user profile has this id
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// No stored group has this id
    #[error("unknown profile group: {0}")]
    UnknownGroup(String),

    /// A field write through a config proxy produced an invalid profile
    #[error("invalid value for profile field '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T, E = ProfilesError> = std::result::Result<T, E>;
