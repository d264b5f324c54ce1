//! Ability records and the cached ability directory.

pub mod directory;
pub mod types;

pub use directory::{AbilityDirectory, DirectorySnapshot};
pub use types::{Ability, AbilityMeta, InputSchema, Link, RUN_LINK_RELATION};
