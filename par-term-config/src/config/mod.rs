//! Profile-service configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct and its nested settings
//! - [`config_methods`]: `impl Config` lookup and validation helpers
//! - [`persistence`]: `impl Config` methods for load/save/path-resolution
//! - [`store`]: [`ConfigStore`], the shared lockable handle hosts inject

pub mod config_methods;
pub mod config_struct;
pub mod persistence;
pub mod store;

pub use config_struct::{Config, TerminalProfileSettings};
pub use persistence::write_atomic;
pub use store::ConfigStore;
