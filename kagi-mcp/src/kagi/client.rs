//! Kagi API client implementation.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;

use crate::config::KagiConfig;

use super::error::KagiError;
use super::options::{SummarizeOptions, SummarizeSource};
use super::provider::KagiProvider;

/// Kagi API client
#[derive(Clone)]
pub struct KagiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl KagiClient {
    /// Create a new Kagi client
    pub fn new(
        base_url: &str,
        timeout: Duration,
        api_key: Option<String>,
    ) -> Result<Self, KagiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kagi-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(KagiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Create a client from service configuration
    pub fn from_config(config: &KagiConfig) -> Result<Self, KagiError> {
        Self::new(&config.base_url, config.timeout(), config.api_key.clone())
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.authorization().is_ok()
    }

    fn authorization(&self) -> Result<String, KagiError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(|key| format!("Bot {}", key))
            .ok_or(KagiError::MissingApiKey)
    }

    fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}/search?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        )
    }

    fn enrich_url(&self, query: &str) -> String {
        format!(
            "{}/enrich/web?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Attach credentials, send, and return the raw JSON body
    async fn send(&self, request: RequestBuilder) -> Result<serde_json::Value, KagiError> {
        let response = request
            .header(reqwest::header::AUTHORIZATION, self.authorization()?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KagiError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl KagiProvider for KagiClient {
    async fn search(&self, query: &str, limit: u32) -> Result<serde_json::Value, KagiError> {
        let url = self.search_url(query, limit);
        self.send(self.client.get(&url)).await
    }

    async fn summarize(
        &self,
        source: &SummarizeSource,
        options: &SummarizeOptions,
    ) -> Result<serde_json::Value, KagiError> {
        let url = format!("{}/summarize", self.base_url);
        let body = SummarizeBody::new(source, options);
        self.send(self.client.post(&url).json(&body)).await
    }

    async fn fastgpt(&self, query: &str, cache: bool) -> Result<serde_json::Value, KagiError> {
        let url = format!("{}/fastgpt", self.base_url);
        let body = FastGptBody { query, cache };
        self.send(self.client.post(&url).json(&body)).await
    }

    async fn enrich(&self, query: &str) -> Result<serde_json::Value, KagiError> {
        let url = self.enrich_url(query);
        self.send(self.client.get(&url)).await
    }
}

/// Request body for `POST /summarize`
#[derive(Debug, Serialize)]
struct SummarizeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    engine: &'a str,
    summary_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_language: Option<&'a str>,
    cache: bool,
}

impl<'a> SummarizeBody<'a> {
    fn new(source: &'a SummarizeSource, options: &'a SummarizeOptions) -> Self {
        let (url, text) = match source {
            SummarizeSource::Url(url) => (Some(url.as_str()), None),
            SummarizeSource::Text(text) => (None, Some(text.as_str())),
        };
        Self {
            url,
            text,
            engine: &options.engine,
            summary_type: &options.summary_type,
            target_language: options.target_language.as_deref(),
            cache: options.cache,
        }
    }
}

/// Request body for `POST /fastgpt`
#[derive(Debug, Serialize)]
struct FastGptBody<'a> {
    query: &'a str,
    cache: bool,
}

/// Pull a human-readable message out of a Kagi error body.
///
/// Kagi reports failures as `{"error": [{"code": ..., "msg": "..."}]}`.
/// Anything else is returned as the trimmed body text.
fn api_error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let messages: Vec<&str> = parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if !messages.is_empty() {
        return messages.join("; ");
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> KagiClient {
        KagiClient::new(
            "https://kagi.example/api/v0/",
            Duration::from_secs(5),
            api_key.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = client(None).search_url("rust async & traits", 7);
        assert_eq!(
            url,
            "https://kagi.example/api/v0/search?q=rust%20async%20%26%20traits&limit=7"
        );
    }

    #[test]
    fn test_enrich_url() {
        let url = client(None).enrich_url("small web");
        assert_eq!(url, "https://kagi.example/api/v0/enrich/web?q=small%20web");
    }

    #[test]
    fn test_authorization_uses_bot_scheme() {
        assert_eq!(client(Some("abc123")).authorization().unwrap(), "Bot abc123");
        assert!(client(Some("abc123")).has_api_key());
        assert!(!client(Some("")).has_api_key());
        assert!(!client(None).has_api_key());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let result = client(None).search("anything", 5).await;
        assert!(matches!(result, Err(KagiError::MissingApiKey)));

        let result = client(None).enrich("anything").await;
        assert!(matches!(result, Err(KagiError::MissingApiKey)));
    }

    #[test]
    fn test_summarize_body_for_url_omits_absent_fields() {
        let source = SummarizeSource::Url("https://example.com/post".to_string());
        let options = SummarizeOptions::default();
        let body = serde_json::to_value(SummarizeBody::new(&source, &options)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "url": "https://example.com/post",
                "engine": "cecil",
                "summary_type": "summary",
                "cache": true
            })
        );
    }

    #[test]
    fn test_summarize_body_for_text_with_language() {
        let source = SummarizeSource::Text("Some long text".to_string());
        let options = SummarizeOptions {
            engine: "muriel".to_string(),
            summary_type: "takeaway".to_string(),
            target_language: Some("DE".to_string()),
            cache: false,
        };
        let body = serde_json::to_value(SummarizeBody::new(&source, &options)).unwrap();
        assert_eq!(body["text"], "Some long text");
        assert!(body.get("url").is_none());
        assert_eq!(body["engine"], "muriel");
        assert_eq!(body["summary_type"], "takeaway");
        assert_eq!(body["target_language"], "DE");
        assert_eq!(body["cache"], false);
    }

    #[test]
    fn test_api_error_message_from_kagi_error_body() {
        let body = r#"{"meta":{"id":"x"},"data":null,"error":[{"code":1,"msg":"Insufficient credit"}]}"#;
        assert_eq!(api_error_message(body), "Insufficient credit");
    }

    #[test]
    fn test_api_error_message_falls_back_to_body_text() {
        assert_eq!(api_error_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(api_error_message(""), "empty response body");
        assert_eq!(api_error_message(r#"{"error":[]}"#), r#"{"error":[]}"#);
    }
}
