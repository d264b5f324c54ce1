//! Remote ability access and the MCP server binding.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod handler;
pub mod proxy;

pub use client::AbilitiesClient;
pub use config::{BridgeConfig, DirectoryConfig, ProxyConfig, SiteConfig, ABILITIES_NAMESPACE};
pub use dispatcher::{has_arguments, InvocationDispatcher, InvocationPlan};
pub use handler::AbilitiesServer;
