//! Newline-delimited JSON-RPC transport.
//!
//! Reads one message per line and writes one response per line. Generic over
//! the byte streams so the process can bind stdin/stdout while tests use
//! in-memory buffers.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use super::protocol::{McpError, McpRequest, McpResponse, codes};
use super::{McpState, handle_request};

/// Serve MCP requests until the reader reaches EOF.
pub async fn serve<R, W>(state: &McpState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<McpRequest>(trimmed) {
            Ok(request) => handle_request(state, request).await,
            Err(e) => {
                warn!(error = %e, "Failed to parse MCP message");
                Some(McpResponse::failure(
                    None,
                    McpError::new(codes::PARSE_ERROR, format!("Parse error: {}", e)),
                ))
            }
        };

        if let Some(response) = response {
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            writer.write_all(&payload).await?;
            writer.flush().await?;
        }
    }

    info!("MCP client disconnected");
    Ok(())
}
