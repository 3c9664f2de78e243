//! MCP message handlers.
//!
//! Handlers for initialize, ping and tools/list requests.

use super::protocol::PROTOCOL_VERSION;
use super::{McpError, McpState};
use crate::tools::REGISTRY;

/// Handle initialize request
pub fn handle_initialize(state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": state.server_name,
            "version": state.server_version
        },
        "instructions": "Kagi MCP server: web search, Universal Summarizer, FastGPT answers, and small-web enrichment backed by the Kagi API."
    }))
}

/// Handle ping request
pub fn handle_ping() -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({}))
}

/// Handle tools/list request
pub fn handle_tools_list() -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({ "tools": REGISTRY.mcp_definitions() }))
}
