//! Image generation request and response types.

use serde::{Deserialize, Serialize};

use super::config::ImageModelConfig;
use super::message::Artifact;
use super::usage::TokenUsage;
use crate::error::LlmError;

/// One image generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationRequest {
    /// Target model identifier.
    pub model: String,
    /// What to generate.
    pub instructions: String,
    /// Optional reference images or masks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    /// Effective configuration.
    #[serde(default)]
    pub config: ImageModelConfig,
}

impl ImageGenerationRequest {
    /// Create a request with default configuration.
    pub fn new(model: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            instructions: instructions.into(),
            artifacts: Vec::new(),
            config: ImageModelConfig::default(),
        }
    }

    /// Append a reference artifact.
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Replace the configuration snapshot.
    pub fn with_config(mut self, config: ImageModelConfig) -> Self {
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
        if self.instructions.is_empty() {
            return Err(LlmError::InvalidParameter(
                "instructions cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of an image generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationResponse {
    /// Raw output bytes.
    pub bytes: Vec<u8>,
    /// MIME type of the output, when the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Usage snapshot, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Cost, when computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl ImageGenerationResponse {
    /// A response carrying only bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
            usage: None,
            cost: None,
        }
    }

    /// Attach the output MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
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
