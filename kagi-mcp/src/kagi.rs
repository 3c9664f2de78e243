//! Kagi API integration.
//!
//! This module provides the client used by the MCP tools to reach the Kagi
//! search, Universal Summarizer, FastGPT and enrichment endpoints
//! (https://help.kagi.com/kagi/api/overview.html).

mod client;
mod error;
mod options;
mod provider;

pub use client::KagiClient;
pub use error::KagiError;
pub use options::{
    DEFAULT_SUMMARY_ENGINE, DEFAULT_SUMMARY_TYPE, SUMMARY_ENGINES, SUMMARY_TYPES,
    SummarizeOptions, SummarizeSource,
};
pub use provider::KagiProvider;
