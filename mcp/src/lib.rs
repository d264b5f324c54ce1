//! Expose WordPress abilities as Model Context Protocol tools.
//!
//! ## Modules
//!
//! - [`core`]: HTTP client, configuration, invocation dispatch and the MCP server handler
//! - [`inventory`]: Ability records and the cached ability directory
//! - [`transform`]: Schema canonicalization and tool projection
//! - [`naming`]: Ability identifier <-> tool name mapping
//!
//! ## Shared Types
//!
//! - [`AbilityAnnotations`]: readonly/destructive/idempotent hints

// Shared types (used across modules)
pub mod annotations;
pub mod error;
pub mod naming;
pub mod transform;

// Subsystems
pub mod core;
pub mod inventory;

pub use annotations::AbilityAnnotations;
pub use crate::core::{
    AbilitiesClient, AbilitiesServer, BridgeConfig, DirectoryConfig, InvocationDispatcher,
    InvocationPlan, ProxyConfig, SiteConfig,
};
pub use error::{BridgeError, BridgeResult};
pub use inventory::{Ability, AbilityDirectory, DirectorySnapshot, InputSchema};
pub use naming::{to_ability_name, to_tool_name, ToolNameTable, TOOL_NAME_PREFIX};
