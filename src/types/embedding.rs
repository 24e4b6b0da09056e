//! Embedding request and response types.

use serde::{Deserialize, Serialize};

use super::config::EmbeddingModelConfig;
use super::usage::TokenUsage;
use crate::error::LlmError;

/// One embedding call over an ordered batch of content strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingRequest {
    /// Target model identifier.
    pub model: String,
    /// Content strings to embed, in order.
    pub contents: Vec<String>,
    /// Effective configuration.
    #[serde(default)]
    pub config: EmbeddingModelConfig,
}

impl EmbeddingRequest {
    /// Create a request with default configuration.
    pub fn new(model: impl Into<String>, contents: Vec<String>) -> Self {
        Self {
            model: model.into(),
            contents,
            config: EmbeddingModelConfig::default(),
        }
    }

    /// Replace the configuration snapshot.
    pub fn with_config(mut self, config: EmbeddingModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Detect configuration errors before any provider call is made.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.model.is_empty() {
            return Err(LlmError::InvalidParameter(
                "model identifier cannot be empty".to_string(),
            ));
        }
        if self.contents.is_empty() {
            return Err(LlmError::InvalidParameter(
                "request must contain at least one content string".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of an embedding call.
///
/// `embeddings` is index-aligned with the request's `contents`: the vector at
/// position `i` embeds the content string at position `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingResponse {
    /// One vector per input content string, request order.
    pub embeddings: Vec<Vec<f32>>,
    /// Aggregate usage across the batch, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Aggregate cost, when computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl EmbeddingResponse {
    /// A response carrying only vectors.
    pub fn new(embeddings: Vec<Vec<f32>>) -> Self {
        Self {
            embeddings,
            usage: None,
            cost: None,
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
}
