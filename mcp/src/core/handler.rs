//! MCP server binding for WordPress abilities.
//!
//! Implements RMCP's `ServerHandler` trait:
//! - `tools/list`: every discovered ability, projected as a `wp_*` tool
//! - `tools/call`: resolve the tool name, fetch the ability's details, invoke it
//!
//! Invocation failures are returned as error-flagged tool results. Failures to
//! discover abilities or to fetch an ability's details are protocol errors.

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData, RoleServer, ServerHandler,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{client::AbilitiesClient, config::BridgeConfig, dispatcher::InvocationDispatcher};
use crate::{
    error::{BridgeError, BridgeResult},
    inventory::AbilityDirectory,
    transform::{ability_to_tool, error_result, success_result},
};

pub const SERVER_NAME: &str = "wp-abilities";

const INSTRUCTIONS: &str = "Tools are WordPress abilities. A tool named wp_<category>_<action> \
runs the ability <category>/<action> on the connected site. Read-only abilities are safe to \
call freely; others may modify the site.";

#[derive(Clone)]
pub struct AbilitiesServer {
    directory: Arc<AbilityDirectory>,
    dispatcher: Arc<InvocationDispatcher>,
}

impl AbilitiesServer {
    pub fn new(directory: Arc<AbilityDirectory>, dispatcher: Arc<InvocationDispatcher>) -> Self {
        Self {
            directory,
            dispatcher,
        }
    }

    /// Validate the configuration and wire client, directory and dispatcher.
    pub fn from_config(config: &BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        let client = Arc::new(AbilitiesClient::new(config)?);
        let directory = Arc::new(AbilityDirectory::new(
            Arc::clone(&client),
            config.directory.cache_ttl(),
        ));
        let dispatcher = Arc::new(InvocationDispatcher::new(client));
        Ok(Self::new(directory, dispatcher))
    }

    pub fn directory(&self) -> &Arc<AbilityDirectory> {
        &self.directory
    }

    /// Tool descriptors for the current ability list, one per tool name.
    pub async fn tools(&self) -> BridgeResult<Vec<Tool>> {
        let snapshot = self.directory.discover().await?;
        Ok(snapshot
            .advertised()
            .into_iter()
            .map(ability_to_tool)
            .collect())
    }

    /// Execute a tool call.
    ///
    /// Returns `Err` only when the ability's details cannot be fetched; an
    /// unresolvable tool name surfaces here as an upstream 404.
    pub async fn call(
        &self,
        tool_name: &str,
        arguments: Option<JsonObject>,
    ) -> BridgeResult<CallToolResult> {
        let ability_name = self.directory.resolve_tool_name(tool_name);
        let ability = self.directory.get_details(&ability_name).await?;
        let label = if ability.label.is_empty() {
            ability.name.clone()
        } else {
            ability.label.clone()
        };

        let arguments = arguments.map(Value::Object);
        match self.dispatcher.invoke(&ability, arguments.as_ref()).await {
            Ok(value) => {
                info!(tool = %tool_name, ability = %ability.name, "Ability executed");
                Ok(success_result(&value))
            }
            Err(e) => {
                warn!(
                    tool = %tool_name,
                    ability = %ability.name,
                    error = %e,
                    "Ability execution failed"
                );
                Ok(error_result(&label, &e))
            }
        }
    }

    /// `tools/list` body. Discovery failures become protocol errors.
    pub async fn list_all(&self) -> Result<ListToolsResult, ErrorData> {
        let tools = self.tools().await.map_err(|e| {
            warn!(error = %e, "Failed to discover abilities");
            to_error_data(e)
        })?;
        Ok(ListToolsResult::with_all_items(tools))
    }

    /// `tools/call` body, abandoned as soon as `ct` is cancelled.
    pub async fn call_cancellable(
        &self,
        tool_name: &str,
        arguments: Option<JsonObject>,
        ct: CancellationToken,
    ) -> Result<CallToolResult, ErrorData> {
        tokio::select! {
            result = self.call(tool_name, arguments) => result.map_err(|e| {
                warn!(tool = %tool_name, error = %e, "Failed to resolve ability");
                to_error_data(e)
            }),
            _ = ct.cancelled() => {
                info!(tool = %tool_name, "Tool call cancelled by client");
                Err(ErrorData::internal_error(
                    format!("tool call '{tool_name}' cancelled"),
                    None,
                ))
            }
        }
    }
}

fn to_error_data(error: BridgeError) -> ErrorData {
    ErrorData::internal_error(error.to_string(), None)
}

impl ServerHandler for AbilitiesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        self.list_all().await
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.call_cancellable(&request.name, request.arguments, context.ct)
            .await
    }
}
