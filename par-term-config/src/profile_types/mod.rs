//! Profile and profile-group types persisted in the configuration.
//!
//! ## Sub-modules
//!
//! - [`profile`]: Core `Profile` struct and its builder/impl methods
//! - [`group`]: `ProfileGroupConfig`, the stored shape of a user group

pub mod group;
pub mod profile;

pub use group::ProfileGroupConfig;
pub use profile::{Profile, SessionEndBehavior};
