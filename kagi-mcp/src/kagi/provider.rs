//! The seam between tool dispatch and the Kagi API.

use async_trait::async_trait;

use super::error::KagiError;
use super::options::{SummarizeOptions, SummarizeSource};

/// Operations the MCP tools forward to.
///
/// Every operation returns the raw response body. Callers must not reshape it.
#[async_trait]
pub trait KagiProvider: Send + Sync {
    /// Web search
    async fn search(&self, query: &str, limit: u32) -> Result<serde_json::Value, KagiError>;

    /// Universal Summarizer
    async fn summarize(
        &self,
        source: &SummarizeSource,
        options: &SummarizeOptions,
    ) -> Result<serde_json::Value, KagiError>;

    /// FastGPT question answering
    async fn fastgpt(&self, query: &str, cache: bool) -> Result<serde_json::Value, KagiError>;

    /// Web enrichment (Teclis index)
    async fn enrich(&self, query: &str) -> Result<serde_json::Value, KagiError>;
}
