//! Tool registry backing the MCP `tools/list` catalog.
//!
//! Tool names are derived from enum variants via strum, so the catalog and
//! the dispatcher can never disagree about what a tool is called.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// All tool names as an exhaustive enum.
///
/// Adding a new tool requires:
/// 1. Add variant here
/// 2. Register metadata in `tool_defs`
/// 3. Add a handler in `mcp::tools` (compile error if missing due to exhaustive match)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    KagiSearch,
    KagiSummarize,
    KagiFastgpt,
    KagiEnrich,
    HealthCheck,
}

impl ToolName {
    /// Prefix prepended to upstream error messages when the tool's Kagi call fails.
    ///
    /// `None` for tools that never reach Kagi.
    pub fn failure_prefix(self) -> Option<&'static str> {
        match self {
            ToolName::KagiSearch => Some("Search failed: "),
            ToolName::KagiSummarize => Some("Summarization failed: "),
            ToolName::KagiFastgpt => Some("FastGPT failed: "),
            ToolName::KagiEnrich => Some("Enrichment failed: "),
            ToolName::HealthCheck => None,
        }
    }
}

/// Metadata for a tool definition.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    /// Tool identifier - string representation derived via strum Display
    pub name: ToolName,

    /// Tool description shown to MCP clients
    pub description: &'static str,

    /// JSON Schema for tool parameters (called lazily to avoid static initialization issues)
    pub parameters: fn() -> serde_json::Value,
}

/// Central registry of all tools, in catalog order.
pub struct ToolRegistry {
    tools: Vec<ToolMetadata>,
}

impl ToolRegistry {
    /// Build the registry from all registered tool definitions
    pub fn new() -> Self {
        let mut tools = Vec::new();
        super::tool_defs::register_all_tools(&mut tools);
        Self { tools }
    }

    /// Get all tools as MCP tool definitions
    pub fn mcp_definitions(&self) -> Vec<McpToolDefinition> {
        self.tools
            .iter()
            .map(|t| McpToolDefinition {
                name: t.name.to_string(),
                description: t.description.to_string(),
                input_schema: (t.parameters)(),
            })
            .collect()
    }

    /// Resolve a string name to a registered tool
    pub fn lookup(&self, name: &str) -> Option<ToolName> {
        ToolName::from_str(name)
            .ok()
            .filter(|n| self.tools.iter().any(|t| t.name == *n))
    }

    /// Tool names in catalog order
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name.to_string()).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton registry instance
pub static REGISTRY: LazyLock<ToolRegistry> = LazyLock::new(ToolRegistry::new);

/// MCP tool definition structure (for output generation)
#[derive(Debug, Clone, Serialize)]
pub struct McpToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}
