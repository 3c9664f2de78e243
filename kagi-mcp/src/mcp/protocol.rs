//! MCP JSON-RPC message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;

/// Protocol revision advertised during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Standard JSON-RPC error codes
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// MCP methods this server understands
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const INITIALIZED: &str = "notifications/initialized";
    pub const PING: &str = "ping";
    pub const LIST_TOOLS: &str = "tools/list";
    pub const CALL_TOOL: &str = "tools/call";
}

/// MCP JSON-RPC request. A request without an `id` is a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl McpRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// MCP JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    /// Create a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.unwrap_or(Value::Null),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn failure(id: Option<Value>, error: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.unwrap_or(Value::Null),
            result: None,
            error: Some(error),
        }
    }
}

/// MCP error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<ServiceError> for McpError {
    fn from(err: ServiceError) -> Self {
        Self {
            code: err.rpc_code(),
            data: Some(serde_json::json!({ "error_code": err.error_code() })),
            message: err.to_string(),
        }
    }
}

/// Tool call result envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
}

/// A single piece of tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    Text { text: String },
}

impl ToolCallResult {
    /// Wrap a JSON value as a single pretty-printed text item
    pub fn json(value: &Value) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_default();
        Self {
            content: vec![ToolContent::Text { text }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let envelope = ToolCallResult::json(&json!({"answer": 42}));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "content": [{
                    "type": "text",
                    "text": "{\n  \"answer\": 42\n}"
                }]
            })
        );
    }

    #[test]
    fn test_notification_has_no_id() {
        let request: McpRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert!(request.is_notification());
        assert!(request.params.is_none());
    }

    #[test]
    fn test_error_response_serializes_null_id() {
        let response = McpResponse::failure(None, McpError::new(codes::PARSE_ERROR, "Parse error"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], -32700);
        assert!(value.get("result").is_none());
        assert!(value["error"].get("data").is_none());
    }

    #[test]
    fn test_service_error_conversion_carries_code() {
        let err: McpError = ServiceError::MissingParameter { name: "query" }.into();
        assert_eq!(err.code, codes::INVALID_PARAMS);
        assert_eq!(err.message, "Missing required parameter: query");
        assert_eq!(err.data, Some(json!({"error_code": "missing_parameter"})));
    }
}
