//! Typed tool parameters.
//!
//! Raw MCP arguments are untrusted JSON. Each tool's parameters are validated
//! and normalized here before anything is sent to Kagi: required strings must
//! be present and non-blank, optional values get their declared defaults, and
//! a value of the wrong JSON type is rejected rather than coerced.

use serde_json::Value;
use tracing::warn;

use crate::error::{ServiceError, ServiceResult};
use crate::kagi::{SUMMARY_ENGINES, SUMMARY_TYPES, SummarizeOptions, SummarizeSource};

/// Result count used when `limit` is omitted
pub const SEARCH_DEFAULT_LIMIT: u32 = 10;

/// Upper bound applied to any requested `limit`
pub const SEARCH_MAX_LIMIT: u32 = 10;

/// Normalized `kagi_search` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub limit: u32,
}

impl SearchParams {
    pub fn from_arguments(arguments: &Value) -> ServiceResult<Self> {
        let query = required_str(arguments, "query")?;
        let limit = optional_u64(arguments, "limit")?
            .map(|requested| requested.min(u64::from(SEARCH_MAX_LIMIT)) as u32)
            .unwrap_or(SEARCH_DEFAULT_LIMIT);

        Ok(Self {
            query: query.to_string(),
            limit,
        })
    }
}

/// Normalized `kagi_summarize` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeParams {
    pub source: SummarizeSource,
    pub options: SummarizeOptions,
}

impl SummarizeParams {
    pub fn from_arguments(arguments: &Value) -> ServiceResult<Self> {
        let url = optional_str(arguments, "url")?;
        let text = optional_str(arguments, "text")?;

        let source = match (url, text) {
            (Some(_), Some(_)) => {
                return Err(ServiceError::ConflictingParameters {
                    first: "url",
                    second: "text",
                });
            }
            (None, None) => {
                return Err(ServiceError::MissingParameter {
                    name: "url or text",
                });
            }
            (Some(url), None) => SummarizeSource::Url(url.to_string()),
            (None, Some(text)) => SummarizeSource::Text(text.to_string()),
        };

        let defaults = SummarizeOptions::default();

        let engine = optional_str(arguments, "engine")?
            .map(str::to_string)
            .unwrap_or(defaults.engine);
        if !SUMMARY_ENGINES.contains(&engine.as_str()) {
            warn!(engine = %engine, "Passing undeclared summary engine through to Kagi");
        }

        let summary_type = optional_str(arguments, "summary_type")?
            .map(str::to_string)
            .unwrap_or(defaults.summary_type);
        if !SUMMARY_TYPES.contains(&summary_type.as_str()) {
            warn!(summary_type = %summary_type, "Passing undeclared summary type through to Kagi");
        }

        let target_language = optional_str(arguments, "target_language")?.map(str::to_string);
        let cache = optional_bool(arguments, "cache")?.unwrap_or(defaults.cache);

        Ok(Self {
            source,
            options: SummarizeOptions {
                engine,
                summary_type,
                target_language,
                cache,
            },
        })
    }
}

/// Normalized `kagi_fastgpt` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastGptParams {
    pub query: String,
    pub cache: bool,
}

impl FastGptParams {
    pub fn from_arguments(arguments: &Value) -> ServiceResult<Self> {
        let query = required_str(arguments, "query")?;
        let cache = optional_bool(arguments, "cache")?.unwrap_or(true);

        Ok(Self {
            query: query.to_string(),
            cache,
        })
    }
}

/// Normalized `kagi_enrich` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichParams {
    pub query: String,
}

impl EnrichParams {
    pub fn from_arguments(arguments: &Value) -> ServiceResult<Self> {
        let query = required_str(arguments, "query")?;

        Ok(Self {
            query: query.to_string(),
        })
    }
}

// ==================== Argument Extraction ====================

/// A present, non-null value for `name`
fn field<'a>(arguments: &'a Value, name: &str) -> Option<&'a Value> {
    arguments.get(name).filter(|v| !v.is_null())
}

/// Blank strings count as absent.
fn optional_str<'a>(arguments: &'a Value, name: &'static str) -> ServiceResult<Option<&'a str>> {
    match field(arguments, name) {
        None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ServiceError::InvalidParameter {
            name,
            expected: "a string",
        }),
    }
}

fn required_str<'a>(arguments: &'a Value, name: &'static str) -> ServiceResult<&'a str> {
    optional_str(arguments, name)?.ok_or(ServiceError::MissingParameter { name })
}

fn optional_bool(arguments: &Value, name: &'static str) -> ServiceResult<Option<bool>> {
    match field(arguments, name) {
        None => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or(ServiceError::InvalidParameter {
            name,
            expected: "a boolean",
        }),
    }
}

fn optional_u64(arguments: &Value, name: &'static str) -> ServiceResult<Option<u64>> {
    match field(arguments, name) {
        None => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or(ServiceError::InvalidParameter {
            name,
            expected: "a non-negative integer",
        }),
    }
}
