//! Error handling for the access checker
//!
//! A single error type covers every failure that aborts a run. Per-model
//! service errors returned by the invoke probe are *not* errors at this
//! level: they are observations that feed the classification table.

/// Fatal error for a checker run
#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to resolve AWS credentials: {0}")]
    Credentials(String),

    #[error("Network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("Request to {endpoint} timed out: {message}")]
    Timeout { endpoint: String, message: String },

    #[error("Request signing failed: {0}")]
    Signing(String),

    #[error("Failed to parse Bedrock response: {0}")]
    ResponseParsing(String),

    #[error("Failed to write report: {0}")]
    Output(String),

    /// Non-success status from a call whose failure cannot be classified
    #[error("Bedrock API error (status {status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

impl CheckerError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }

    pub fn credentials<S: Into<String>>(message: S) -> Self {
        Self::Credentials(message.into())
    }

    pub fn signing<S: Into<String>>(message: S) -> Self {
        Self::Signing(message.into())
    }

    pub fn response_parsing<S: Into<String>>(message: S) -> Self {
        Self::ResponseParsing(message.into())
    }

    pub fn output(error: &std::io::Error) -> Self {
        Self::Output(error.to_string())
    }

    /// Map a transport failure from `reqwest`, keeping timeouts distinct
    pub fn from_transport(endpoint: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        } else {
            Self::Network {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CheckerError>;
