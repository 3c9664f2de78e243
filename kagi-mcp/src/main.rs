use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::{error, info, warn};

mod config;
mod error;
mod kagi;
mod mcp;
mod tools;

use crate::kagi::KagiClient;
use crate::mcp::McpState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Kagi MCP server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Kagi MCP server v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config()?;
    info!(
        base_url = %config.kagi.base_url,
        timeout_secs = config.kagi.timeout_secs,
        "Configuration loaded"
    );

    let client = KagiClient::from_config(&config.kagi)?;
    if !client.has_api_key() {
        warn!("KAGI_API_KEY is not set; Kagi tool calls will fail until it is provided");
    }

    let state = McpState::new(Arc::new(client));

    info!("Serving MCP over stdio");
    mcp::serve(
        &state,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kagi_mcp=info"));

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
