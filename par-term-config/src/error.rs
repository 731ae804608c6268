//! Typed error variants for the par-term-config crate.
//!
//! Provides structured error types for config I/O and YAML parsing
//! so that callers can match on specific failure modes.

use std::path::PathBuf;

/// Errors that can occur when loading or saving configuration.
///
/// Produced by [`Config::load_from`](crate::Config::load_from),
/// [`Config::save_to`](crate::Config::save_to) and by
/// [`ConfigStore::save`](crate::ConfigStore::save).
///
/// # Example
///
/// ```rust,no_run
/// use par_term_config::ConfigError;
///
/// fn report(e: &ConfigError) {
///     match e {
///         ConfigError::Io { path, source } => eprintln!("I/O error on {path:?}: {source}"),
///         ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a config or state file.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML, or the config could not be
    /// serialized back to YAML.
    #[error("YAML error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
