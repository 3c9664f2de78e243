//! Options types for Kagi API requests.

/// Summarization engines accepted by the Universal Summarizer
pub const SUMMARY_ENGINES: [&str; 4] = ["cecil", "agnes", "daphne", "muriel"];

/// Engine used when the caller does not pick one
pub const DEFAULT_SUMMARY_ENGINE: &str = "cecil";

/// Output styles accepted by the Universal Summarizer
pub const SUMMARY_TYPES: [&str; 2] = ["summary", "takeaway"];

/// Output style used when the caller does not pick one
pub const DEFAULT_SUMMARY_TYPE: &str = "summary";

/// What to summarize. Exactly one source is sent per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeSource {
    /// A document reachable at a URL
    Url(String),
    /// Inline text
    Text(String),
}

/// Options for the Universal Summarizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeOptions {
    /// Engine name, not checked against [`SUMMARY_ENGINES`]
    pub engine: String,
    /// Output style, not checked against [`SUMMARY_TYPES`]
    pub summary_type: String,
    /// Language code to translate the summary into
    pub target_language: Option<String>,
    /// Allow cached responses
    pub cache: bool,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            engine: DEFAULT_SUMMARY_ENGINE.to_string(),
            summary_type: DEFAULT_SUMMARY_TYPE.to_string(),
            target_language: None,
            cache: true,
        }
    }
}
