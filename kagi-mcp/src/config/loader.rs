//! Configuration loading from files and environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};

use crate::error::{ServiceError, ServiceResult};

use super::ServiceConfig;

/// Environment variable conventionally holding the Kagi API key
const API_KEY_ENV: &str = "KAGI_API_KEY";

/// Load configuration from file and env vars
pub fn load_config() -> ServiceResult<ServiceConfig> {
    let builder = Config::builder()
        .add_source(File::with_name("kagi-mcp").required(false))
        .add_source(
            Environment::with_prefix("KAGI_MCP")
                .separator("__")
                .try_parsing(true),
        );

    let mut config = build_config(builder)?;

    if config.kagi.api_key.as_deref().is_none_or(str::is_empty) {
        config.kagi.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    }

    Ok(config)
}

fn build_config(builder: ConfigBuilder<DefaultState>) -> ServiceResult<ServiceConfig> {
    builder
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_file_values_override_defaults() {
        let builder = Config::builder().add_source(File::from_str(
            "[kagi]\nbase_url = \"http://localhost:9999/api/v0\"\ntimeout_secs = 5\n",
            FileFormat::Toml,
        ));

        let config = build_config(builder).unwrap();
        assert_eq!(config.kagi.base_url, "http://localhost:9999/api/v0");
        assert_eq!(config.kagi.timeout_secs, 5);
        assert!(config.kagi.api_key.is_none());
    }

    #[test]
    fn test_empty_sources_use_defaults() {
        let config = build_config(Config::builder()).unwrap();
        assert_eq!(config.kagi.base_url, "https://kagi.com/api/v0");
        assert_eq!(config.kagi.timeout_secs, 30);
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let builder = Config::builder().add_source(File::from_str(
            "[kagi]\ntimeout_secs = \"soon\"\n",
            FileFormat::Toml,
        ));

        let err = build_config(builder).unwrap_err();
        assert!(matches!(err, ServiceError::Config { .. }));
    }
}
