//! Error handling for the library.
//!
//! One crate-wide error type, `LlmError`, with a coarse `ErrorCategory`
//! classification. The library itself never retries; `is_retryable` only
//! classifies failures so that orchestration layers above can decide.

use thiserror::Error;

/// Errors surfaced by the unified model interface.
#[derive(Error, Debug)]
pub enum LlmError {
    /// A request field is malformed or out of range. Detected synchronously,
    /// before any provider call is made.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client- or connection-level configuration is unusable.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Opaque failure reported by a provider adapter (network, malformed
    /// upstream response, server-side error).
    #[error("Provider '{provider}' error: {message}")]
    ProviderError { provider: String, message: String },

    /// The provider rejected the credentials.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The provider reported an exhausted quota or rate limit.
    #[error("Quota exceeded: {0}")]
    QuotaExceededError(String),

    /// The chunk stream broke after it was established.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// A tool named by the model is not present in the supplied tool set.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// A tool's `run` failed.
    #[error("Tool '{tool}' failed: {message}")]
    ToolExecutionError { tool: String, message: String },

    /// A payload could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The provider does not implement the requested capability.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse classification of an error, for logging and routing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Request or client configuration problems; fixable by the caller.
    Configuration,
    /// Credential problems.
    Auth,
    /// Upstream provider failures.
    Provider,
    /// Failures of an established chunk stream.
    Stream,
    /// Tool resolution or execution failures.
    Tool,
    /// Encoding/decoding failures.
    Serialization,
    /// Everything else.
    Internal,
}

impl LlmError {
    /// Classify this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter(_) | Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::AuthenticationError(_) => ErrorCategory::Auth,
            Self::ProviderError { .. } | Self::QuotaExceededError(_) => ErrorCategory::Provider,
            Self::StreamError(_) => ErrorCategory::Stream,
            Self::ToolNotFound(_) | Self::ToolExecutionError { .. } => ErrorCategory::Tool,
            Self::ParseError(_) | Self::JsonError(_) => ErrorCategory::Serialization,
            Self::UnsupportedOperation(_) | Self::InternalError(_) => ErrorCategory::Internal,
        }
    }

    /// Whether a layer above could reasonably retry the failed call.
    ///
    /// Quota and stream interruptions are transient; configuration, auth,
    /// tool, and serialization failures will fail the same way again.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::QuotaExceededError(_) | Self::StreamError(_))
    }

    /// Shorthand for a provider error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a tool execution error.
    pub fn tool_execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecutionError {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
