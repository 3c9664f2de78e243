//! Health check tool.

use crate::mcp::protocol::ToolCallResult;
use crate::tools::REGISTRY;

use super::super::McpState;

/// Report static server identity and the tool catalog. Never calls Kagi.
pub(super) fn execute_health_check(state: &McpState) -> ToolCallResult {
    let status = serde_json::json!({
        "status": "healthy",
        "server": state.server_name,
        "version": state.server_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "tools_available": REGISTRY.len(),
        "tools": REGISTRY.names(),
    });

    ToolCallResult::json(&status)
}
