//! MCP tool call handler.
//!
//! Handles execution of individual tool calls from MCP clients.

mod health;
mod kagi;

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::tools::{REGISTRY, ToolName};

use super::protocol::{ToolCallResult, codes};
use super::{McpError, McpState};

/// Handle tools/call request
pub async fn handle_tool_call(
    state: &McpState,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, McpError> {
    let params =
        params.ok_or_else(|| McpError::new(codes::INVALID_PARAMS, "Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::new(codes::INVALID_PARAMS, "Missing tool name"))?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let result = call_tool(state, name, &arguments).await?;

    serde_json::to_value(result)
        .map_err(|e| McpError::new(codes::INTERNAL_ERROR, e.to_string()))
}

/// Validate arguments for one tool, run it, and wrap its output.
pub async fn call_tool(
    state: &McpState,
    name: &str,
    arguments: &serde_json::Value,
) -> ServiceResult<ToolCallResult> {
    let tool = REGISTRY
        .lookup(name)
        .ok_or_else(|| ServiceError::UnsupportedTool {
            name: name.to_string(),
        })?;

    if !(arguments.is_object() || arguments.is_null()) {
        return Err(ServiceError::InvalidParameter {
            name: "arguments",
            expected: "an object",
        });
    }

    debug!(tool = %tool, "Executing tool");

    match tool {
        ToolName::KagiSearch => kagi::execute_search(state, arguments).await,
        ToolName::KagiSummarize => kagi::execute_summarize(state, arguments).await,
        ToolName::KagiFastgpt => kagi::execute_fastgpt(state, arguments).await,
        ToolName::KagiEnrich => kagi::execute_enrich(state, arguments).await,
        ToolName::HealthCheck => Ok(health::execute_health_check(state)),
    }
}
