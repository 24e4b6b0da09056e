//! Completion request and response types.

use serde::{Deserialize, Serialize};

use super::config::ModelConfig;
use super::message::ModelMessage;
use super::usage::TokenUsage;
use crate::error::LlmError;

/// Why the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model completed naturally or hit a stop sequence.
    Stop,
    /// The output token bound was reached.
    Length,
    /// Generation paused on one or more tool calls; resolve them and
    /// resubmit the conversation.
    ToolCalls,
    /// Output was blocked by a content filter.
    ContentFilter,
    /// Generation stopped on an error.
    Error,
    /// The provider did not report a reason.
    Unknown,
}

/// One completion call.
///
/// Constructed once, not mutated afterwards; owned by the caller until it is
/// handed to a provider adapter.
///
/// # Examples
///
/// ```rust,ignore
/// use unillm::types::{CompletionRequest, ModelMessage};
///
/// let request = CompletionRequest::builder("gpt-4o-mini")
///     .instructions("You are a terse assistant.")
///     .message(ModelMessage::user("Why is the sky blue?"))
///     .temperature(0.3)
///     .build();
/// request.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    /// System-level directive, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Target model identifier.
    pub model: String,
    /// Ordered conversation so far.
    pub messages: Vec<ModelMessage>,
    /// Effective sampling/output configuration.
    #[serde(default)]
    pub config: ModelConfig,
}

impl CompletionRequest {
    /// Create a request with the given model and messages and default config.
    pub fn new(model: impl Into<String>, messages: Vec<ModelMessage>) -> Self {
        Self {
            instructions: None,
            model: model.into(),
            messages,
            config: ModelConfig::default(),
        }
    }

    /// Start building a request for the given model.
    pub fn builder(model: impl Into<String>) -> CompletionRequestBuilder {
        CompletionRequestBuilder::new(model)
    }

    /// Detect configuration errors before any provider call is made.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.model.is_empty() {
            return Err(LlmError::InvalidParameter(
                "model identifier cannot be empty".to_string(),
            ));
        }
        if self.messages.is_empty() {
            return Err(LlmError::InvalidParameter(
                "request must contain at least one message".to_string(),
            ));
        }
        self.config.validate()
    }
}

/// Builder for [`CompletionRequest`]. Setters apply in call order; the last
/// write to a field wins.
#[derive(Debug, Clone)]
pub struct CompletionRequestBuilder {
    request: CompletionRequest,
}

impl CompletionRequestBuilder {
    fn new(model: impl Into<String>) -> Self {
        Self {
            request: CompletionRequest::new(model, Vec::new()),
        }
    }

    /// Set the system-level directive.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.request.instructions = Some(instructions.into());
        self
    }

    /// Append one message.
    pub fn message(mut self, message: ModelMessage) -> Self {
        self.request.messages.push(message);
        self
    }

    /// Append several messages.
    pub fn messages(mut self, messages: Vec<ModelMessage>) -> Self {
        self.request.messages.extend(messages);
        self
    }

    /// Replace the configuration snapshot.
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.request.config = config;
        self
    }

    // Passthrough setters for the common sampling fields.

    /// Set the sampling temperature.
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.request.config.temperature = Some(temperature);
        self
    }

    /// Set the nucleus sampling cutoff.
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.request.config.top_p = Some(top_p);
        self
    }

    /// Set the output token bound.
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.request.config.max_tokens = Some(max_tokens);
        self
    }

    /// Set the random seed.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.request.config.seed = Some(seed);
        self
    }

    /// Produce the request.
    pub fn build(self) -> CompletionRequest {
        self.request
    }
}

/// Final result of a non-streaming completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    /// Output text.
    pub text: String,
    /// Usage snapshot, when the adapter reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Cost in the provider's billing currency, when computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Why generation stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl CompletionResponse {
    /// A response carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
            cost: None,
            finish_reason: None,
        }
    }

    /// Attach a usage snapshot.
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Attach a computed cost.
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Attach a finish reason.
    pub fn with_finish_reason(mut self, reason: FinishReason) -> Self {
        self.finish_reason = Some(reason);
        self
    }
}
