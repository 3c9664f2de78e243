//! Kagi API tool definitions.

use crate::kagi::{DEFAULT_SUMMARY_ENGINE, DEFAULT_SUMMARY_TYPE, SUMMARY_ENGINES, SUMMARY_TYPES};
use crate::tools::params::{SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT};
use crate::tools::registry::{ToolMetadata, ToolName};

pub fn register(registry: &mut Vec<ToolMetadata>) {
    let tools = [kagi_search(), kagi_summarize(), kagi_fastgpt(), kagi_enrich()];
    registry.extend(tools);
}

fn kagi_search() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::KagiSearch,
        description: "Search the web with Kagi. Returns ranked results with titles, URLs, and snippets, plus related searches.",
        parameters: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    },
                    "limit": {
                        "type": "integer",
                        "description": format!("Maximum number of results (default {}, max {})", SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT),
                        "default": SEARCH_DEFAULT_LIMIT,
                        "minimum": 1,
                        "maximum": SEARCH_MAX_LIMIT
                    }
                },
                "required": ["query"]
            })
        },
    }
}

fn kagi_summarize() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::KagiSummarize,
        description: "Summarize a web page, document, or video by URL, or a block of text, with the Kagi Universal Summarizer. Provide exactly one of 'url' or 'text'.",
        parameters: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "URL of the document to summarize. Mutually exclusive with 'text'."
                    },
                    "text": {
                        "type": "string",
                        "description": "Text to summarize. Mutually exclusive with 'url'."
                    },
                    "engine": {
                        "type": "string",
                        "enum": SUMMARY_ENGINES,
                        "default": DEFAULT_SUMMARY_ENGINE,
                        "description": "Summarization engine: 'cecil' (friendly, descriptive), 'agnes' (formal, technical), 'daphne' (informal, creative), or 'muriel' (best quality, enterprise)"
                    },
                    "summary_type": {
                        "type": "string",
                        "enum": SUMMARY_TYPES,
                        "default": DEFAULT_SUMMARY_TYPE,
                        "description": "'summary' for paragraph prose or 'takeaway' for a bulleted list of key points"
                    },
                    "target_language": {
                        "type": "string",
                        "description": "Optional language code to translate the summary into (e.g., 'EN', 'DE', 'JA')"
                    },
                    "cache": {
                        "type": "boolean",
                        "default": true,
                        "description": "Whether cached summaries may be returned"
                    }
                },
                "oneOf": [
                    { "required": ["url"] },
                    { "required": ["text"] }
                ]
            })
        },
    }
}

fn kagi_fastgpt() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::KagiFastgpt,
        description: "Answer a question with Kagi FastGPT. Runs a web search and returns a concise answer with cited references.",
        parameters: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The question to answer"
                    },
                    "cache": {
                        "type": "boolean",
                        "default": true,
                        "description": "Whether cached answers may be returned"
                    }
                },
                "required": ["query"]
            })
        },
    }
}

fn kagi_enrich() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::KagiEnrich,
        description: "Find non-commercial, independent web content (the 'small web') related to a query using the Kagi enrichment index.",
        parameters: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The enrichment query"
                    }
                },
                "required": ["query"]
            })
        },
    }
}
