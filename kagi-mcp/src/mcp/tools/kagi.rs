//! Kagi API MCP tool implementations.

use tracing::error;

use crate::error::{ServiceError, ServiceResult};
use crate::kagi::KagiError;
use crate::mcp::protocol::ToolCallResult;
use crate::tools::{EnrichParams, FastGptParams, SearchParams, SummarizeParams, ToolName};

use super::super::McpState;

pub(super) async fn execute_search(
    state: &McpState,
    arguments: &serde_json::Value,
) -> ServiceResult<ToolCallResult> {
    let params = SearchParams::from_arguments(arguments)?;

    match state.provider.search(&params.query, params.limit).await {
        Ok(result) => Ok(ToolCallResult::json(&result)),
        Err(e) => Err(provider_failure(ToolName::KagiSearch, e)),
    }
}

pub(super) async fn execute_summarize(
    state: &McpState,
    arguments: &serde_json::Value,
) -> ServiceResult<ToolCallResult> {
    let params = SummarizeParams::from_arguments(arguments)?;

    match state
        .provider
        .summarize(&params.source, &params.options)
        .await
    {
        Ok(result) => Ok(ToolCallResult::json(&result)),
        Err(e) => Err(provider_failure(ToolName::KagiSummarize, e)),
    }
}

pub(super) async fn execute_fastgpt(
    state: &McpState,
    arguments: &serde_json::Value,
) -> ServiceResult<ToolCallResult> {
    let params = FastGptParams::from_arguments(arguments)?;

    match state.provider.fastgpt(&params.query, params.cache).await {
        Ok(result) => Ok(ToolCallResult::json(&result)),
        Err(e) => Err(provider_failure(ToolName::KagiFastgpt, e)),
    }
}

pub(super) async fn execute_enrich(
    state: &McpState,
    arguments: &serde_json::Value,
) -> ServiceResult<ToolCallResult> {
    let params = EnrichParams::from_arguments(arguments)?;

    match state.provider.enrich(&params.query).await {
        Ok(result) => Ok(ToolCallResult::json(&result)),
        Err(e) => Err(provider_failure(ToolName::KagiEnrich, e)),
    }
}

/// Log the upstream error, then wrap it with the tool's failure prefix
fn provider_failure(tool: ToolName, err: KagiError) -> ServiceError {
    error!(tool = %tool, error = %err, "Kagi request failed");

    ServiceError::ProviderFailure {
        prefix: tool.failure_prefix().unwrap_or("Tool failed: "),
        message: err.to_string(),
    }
}
