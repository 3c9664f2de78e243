//! Server-local tool definitions.
//!
//! These tools never call the Kagi API.

use crate::tools::registry::{ToolMetadata, ToolName};

pub fn register(registry: &mut Vec<ToolMetadata>) {
    registry.push(health_check());
}

fn health_check() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::HealthCheck,
        description: "Report server status, version, and the list of available tools. Does not contact Kagi.",
        parameters: || {
            serde_json::json!({
                "type": "object",
                "properties": {}
            })
        },
    }
}
