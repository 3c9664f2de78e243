use thiserror::Error;

/// Main service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("Conflicting parameters: provide either '{first}' or '{second}', not both")]
    ConflictingParameters {
        first: &'static str,
        second: &'static str,
    },

    #[error("Invalid parameter '{name}': expected {expected}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Unsupported tool: {name}")]
    UnsupportedTool { name: String },

    #[error("{prefix}{message}")]
    ProviderFailure {
        prefix: &'static str,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ServiceError {
    /// JSON-RPC error code reported to the MCP client
    pub fn rpc_code(&self) -> i64 {
        match self {
            ServiceError::MissingParameter { .. }
            | ServiceError::ConflictingParameters { .. }
            | ServiceError::InvalidParameter { .. } => -32602,
            ServiceError::UnsupportedTool { .. } => -32601,
            ServiceError::ProviderFailure { .. } => -32000,
            ServiceError::Config { .. } => -32603,
        }
    }

    /// Stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::MissingParameter { .. } => "missing_parameter",
            ServiceError::ConflictingParameters { .. } => "conflicting_parameters",
            ServiceError::InvalidParameter { .. } => "invalid_parameter",
            ServiceError::UnsupportedTool { .. } => "unsupported_tool",
            ServiceError::ProviderFailure { .. } => "provider_failure",
            ServiceError::Config { .. } => "config_error",
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_failure_message_is_prefix_then_message() {
        let err = ServiceError::ProviderFailure {
            prefix: "Search failed: ",
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Search failed: quota exceeded");
        assert_eq!(err.rpc_code(), -32000);
    }

    #[test]
    fn test_validation_errors_share_invalid_params_code() {
        let missing = ServiceError::MissingParameter { name: "query" };
        let conflicting = ServiceError::ConflictingParameters {
            first: "url",
            second: "text",
        };
        let invalid = ServiceError::InvalidParameter {
            name: "limit",
            expected: "a non-negative integer",
        };

        assert_eq!(missing.rpc_code(), -32602);
        assert_eq!(conflicting.rpc_code(), -32602);
        assert_eq!(invalid.rpc_code(), -32602);
        assert_eq!(missing.to_string(), "Missing required parameter: query");
        assert_eq!(conflicting.error_code(), "conflicting_parameters");
    }

    #[test]
    fn test_unsupported_tool() {
        let err = ServiceError::UnsupportedTool {
            name: "does_not_exist".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported tool: does_not_exist");
        assert_eq!(err.rpc_code(), -32601);
        assert_eq!(err.error_code(), "unsupported_tool");
    }
}
