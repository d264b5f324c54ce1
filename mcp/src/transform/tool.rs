//! Ability -> MCP tool projection and call result rendering.

use std::{borrow::Cow, sync::Arc};

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use super::schema::canonicalize;
use crate::{error::BridgeError, inventory::Ability, naming::to_tool_name};

/// `"{label}: {description}"`, dropping whichever part is empty.
pub fn tool_description(ability: &Ability) -> String {
    let label = ability.label.trim();
    let description = ability.description.trim();
    match (label.is_empty(), description.is_empty()) {
        (false, false) => format!("{label}: {description}"),
        (false, true) => label.to_string(),
        (true, false) => description.to_string(),
        (true, true) => ability.name.clone(),
    }
}

/// Build the tool descriptor for an ability. Recomputed on every list request.
pub fn ability_to_tool(ability: &Ability) -> Tool {
    let title = (!ability.label.is_empty()).then(|| ability.label.clone());

    Tool {
        name: Cow::Owned(to_tool_name(&ability.name)),
        title: title.clone(),
        description: Some(Cow::Owned(tool_description(ability))),
        input_schema: Arc::new(canonicalize(&ability.input_schema)),
        output_schema: None,
        annotations: Some(ability.effective_annotations().to_rmcp(title)),
        icons: None,
    }
}

/// Successful invocation: one text block with the pretty-printed JSON result.
pub fn success_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Failed invocation: one error-flagged text block naming the ability.
pub fn error_result(label: &str, error: &BridgeError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Error executing {label}: {error}"
    ))])
}
