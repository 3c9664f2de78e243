//! MCP (Model Context Protocol) server.
//!
//! JSON-RPC 2.0 over stdio. Requests are handled one at a time; each
//! `tools/call` is independent and shares nothing but the Kagi provider.

mod handlers;
pub mod protocol;
mod server;
mod tools;

use std::sync::Arc;

use tracing::debug;

use crate::kagi::KagiProvider;

pub use protocol::{McpError, McpRequest, McpResponse};
pub use server::serve;

use protocol::{codes, methods};

/// MCP server state
pub struct McpState {
    pub provider: Arc<dyn KagiProvider>,
    pub server_name: &'static str,
    pub server_version: &'static str,
}

impl McpState {
    pub fn new(provider: Arc<dyn KagiProvider>) -> Self {
        Self {
            provider,
            server_name: env!("CARGO_PKG_NAME"),
            server_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Route one request. Returns `None` for notifications.
pub async fn handle_request(state: &McpState, request: McpRequest) -> Option<McpResponse> {
    debug!(method = %request.method, "MCP request received");

    let is_notification = request.is_notification();

    let result = match request.method.as_str() {
        methods::INITIALIZE => handlers::handle_initialize(state),
        methods::PING => handlers::handle_ping(),
        methods::LIST_TOOLS => handlers::handle_tools_list(),
        methods::CALL_TOOL => tools::handle_tool_call(state, request.params).await,
        methods::INITIALIZED => return None,
        _ => Err(McpError::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    if is_notification {
        return None;
    }

    Some(match result {
        Ok(data) => McpResponse::success(request.id, data),
        Err(error) => McpResponse::failure(request.id, error),
    })
}
