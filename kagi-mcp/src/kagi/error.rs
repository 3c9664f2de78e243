//! Error types for the Kagi API.

#[derive(Debug, thiserror::Error)]
pub enum KagiError {
    #[error("KAGI_API_KEY is not set")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}
