//! Tool catalog and parameter handling.
//!
//! This module contains:
//! - The tool registry (names, descriptions, input schemas)
//! - Per-category tool definitions
//! - Typed, validated parameters for each Kagi-backed tool

pub mod params;
pub mod registry;
mod tool_defs;

pub use params::{EnrichParams, FastGptParams, SearchParams, SummarizeParams};
pub use registry::{REGISTRY, ToolName};
