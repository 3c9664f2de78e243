//! Service configuration.
//!
//! Everything here is read once at startup. Values come from an optional
//! `kagi-mcp` config file and `KAGI_MCP__*` environment variables, with the
//! Kagi API key falling back to the conventional `KAGI_API_KEY` variable.

mod loader;

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub use loader::load_config;

/// Top-level service configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub kagi: KagiConfig,
}

/// Kagi API client configuration
#[derive(Clone, Deserialize)]
pub struct KagiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key sent as `Authorization: Bot <key>`. A missing key only fails
    /// once a Kagi call is attempted.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl KagiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for KagiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl fmt::Debug for KagiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KagiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// ==================== Default Value Functions ====================

pub(crate) fn default_base_url() -> String {
    "https://kagi.com/api/v0".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: ServiceConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.kagi.base_url, "https://kagi.com/api/v0");
        assert_eq!(config.kagi.timeout_secs, 30);
        assert!(config.kagi.api_key.is_none());
        assert_eq!(config.kagi.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = KagiConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
