//! Effective configuration snapshots and their builders.
//!
//! Every field is optional: absence means "use the provider default", and an
//! adapter must never substitute a different value for a field the caller set
//! explicitly. Builders apply setters in call order, so a later setter wins
//! on conflict; [`ModelConfig::merge`] (and its siblings) combine two
//! snapshots with the same rule. Defaulting happens in provider adapters,
//! never here.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// How much effort a reasoning model should spend before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// Requested shape of the completion output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text.
    Text,
    /// A single JSON object.
    JsonObject,
}

/// Effective sampling and output configuration for one completion call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Upper bound on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Presence penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Frequency penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Random seed for reproducibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reasoning effort hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    /// Sequences that stop generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Requested output shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// Opaque JSON schema the output must satisfy; validated at the
    /// caller/provider boundary, not here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<serde_json::Value>,
    /// Whether the adapter must report token usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_usage: Option<bool>,
    /// Whether the adapter must compute cost from its price table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_cost: Option<bool>,
}

impl ModelConfig {
    /// Start building a configuration.
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Combine two snapshots: fields set in `other` win.
    pub fn merge(mut self, other: ModelConfig) -> Self {
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.top_p.is_some() {
            self.top_p = other.top_p;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
        if other.presence_penalty.is_some() {
            self.presence_penalty = other.presence_penalty;
        }
        if other.frequency_penalty.is_some() {
            self.frequency_penalty = other.frequency_penalty;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.reasoning_effort.is_some() {
            self.reasoning_effort = other.reasoning_effort;
        }
        if other.stop_sequences.is_some() {
            self.stop_sequences = other.stop_sequences;
        }
        if other.response_format.is_some() {
            self.response_format = other.response_format;
        }
        if other.json_schema.is_some() {
            self.json_schema = other.json_schema;
        }
        if other.track_usage.is_some() {
            self.track_usage = other.track_usage;
        }
        if other.compute_cost.is_some() {
            self.compute_cost = other.compute_cost;
        }
        self
    }

    /// Range-check the explicitly set fields.
    pub fn validate(&self) -> Result<(), LlmError> {
        if let Some(temp) = self.temperature
            && !(0.0..=2.0).contains(&temp)
        {
            return Err(LlmError::InvalidParameter(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if let Some(top_p) = self.top_p
            && !(0.0..=1.0).contains(&top_p)
        {
            return Err(LlmError::InvalidParameter(
                "top_p must be between 0.0 and 1.0".to_string(),
            ));
        }
        if let Some(penalty) = self.presence_penalty
            && !(-2.0..=2.0).contains(&penalty)
        {
            return Err(LlmError::InvalidParameter(
                "presence_penalty must be between -2.0 and 2.0".to_string(),
            ));
        }
        if let Some(penalty) = self.frequency_penalty
            && !(-2.0..=2.0).contains(&penalty)
        {
            return Err(LlmError::InvalidParameter(
                "frequency_penalty must be between -2.0 and 2.0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`ModelConfig`]. Setters apply in call order; the last write
/// to a field wins.
#[derive(Debug, Clone, Default)]
pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    /// Set the sampling temperature.
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Set the nucleus sampling cutoff.
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.config.top_p = Some(top_p);
        self
    }

    /// Set the output token bound.
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = Some(max_tokens);
        self
    }

    /// Set the presence penalty.
    pub const fn presence_penalty(mut self, penalty: f64) -> Self {
        self.config.presence_penalty = Some(penalty);
        self
    }

    /// Set the frequency penalty.
    pub const fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.config.frequency_penalty = Some(penalty);
        self
    }

    /// Set the random seed.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the reasoning effort hint.
    pub const fn reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.config.reasoning_effort = Some(effort);
        self
    }

    /// Set the stop sequences.
    pub fn stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.config.stop_sequences = Some(sequences);
        self
    }

    /// Set the requested output shape.
    pub const fn response_format(mut self, format: ResponseFormat) -> Self {
        self.config.response_format = Some(format);
        self
    }

    /// Set the output JSON schema.
    pub fn json_schema(mut self, schema: serde_json::Value) -> Self {
        self.config.json_schema = Some(schema);
        self
    }

    /// Require usage reporting.
    pub const fn track_usage(mut self, track: bool) -> Self {
        self.config.track_usage = Some(track);
        self
    }

    /// Require cost computation.
    pub const fn compute_cost(mut self, compute: bool) -> Self {
        self.config.compute_cost = Some(compute);
        self
    }

    /// Produce the immutable snapshot.
    pub fn build(self) -> ModelConfig {
        self.config
    }
}

/// Effective configuration for one embedding call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddingModelConfig {
    /// Requested vector dimensionality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    /// Whether the adapter must report token usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_usage: Option<bool>,
    /// Whether the adapter must compute cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_cost: Option<bool>,
}

impl EmbeddingModelConfig {
    /// Start building a configuration.
    pub fn builder() -> EmbeddingModelConfigBuilder {
        EmbeddingModelConfigBuilder::default()
    }

    /// Combine two snapshots: fields set in `other` win.
    pub fn merge(mut self, other: EmbeddingModelConfig) -> Self {
        if other.dimensions.is_some() {
            self.dimensions = other.dimensions;
        }
        if other.track_usage.is_some() {
            self.track_usage = other.track_usage;
        }
        if other.compute_cost.is_some() {
            self.compute_cost = other.compute_cost;
        }
        self
    }
}

/// Builder for [`EmbeddingModelConfig`].
#[derive(Debug, Clone, Default)]
pub struct EmbeddingModelConfigBuilder {
    config: EmbeddingModelConfig,
}

impl EmbeddingModelConfigBuilder {
    /// Set the vector dimensionality.
    pub const fn dimensions(mut self, dimensions: u32) -> Self {
        self.config.dimensions = Some(dimensions);
        self
    }

    /// Require usage reporting.
    pub const fn track_usage(mut self, track: bool) -> Self {
        self.config.track_usage = Some(track);
        self
    }

    /// Require cost computation.
    pub const fn compute_cost(mut self, compute: bool) -> Self {
        self.config.compute_cost = Some(compute);
        self
    }

    /// Produce the immutable snapshot.
    pub fn build(self) -> EmbeddingModelConfig {
        self.config
    }
}

/// Effective configuration for one image generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageModelConfig {
    /// Output size (e.g. `"1024x1024"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Quality tier (provider-defined vocabulary).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Number of images to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Whether the adapter must report usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_usage: Option<bool>,
    /// Whether the adapter must compute cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_cost: Option<bool>,
}

impl ImageModelConfig {
    /// Start building a configuration.
    pub fn builder() -> ImageModelConfigBuilder {
        ImageModelConfigBuilder::default()
    }

    /// Combine two snapshots: fields set in `other` win.
    pub fn merge(mut self, other: ImageModelConfig) -> Self {
        if other.size.is_some() {
            self.size = other.size;
        }
        if other.quality.is_some() {
            self.quality = other.quality;
        }
        if other.count.is_some() {
            self.count = other.count;
        }
        if other.track_usage.is_some() {
            self.track_usage = other.track_usage;
        }
        if other.compute_cost.is_some() {
            self.compute_cost = other.compute_cost;
        }
        self
    }
}

/// Builder for [`ImageModelConfig`].
#[derive(Debug, Clone, Default)]
pub struct ImageModelConfigBuilder {
    config: ImageModelConfig,
}

impl ImageModelConfigBuilder {
    /// Set the output size.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.config.size = Some(size.into());
        self
    }

    /// Set the quality tier.
    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.config.quality = Some(quality.into());
        self
    }

    /// Set the number of images.
    pub const fn count(mut self, count: u32) -> Self {
        self.config.count = Some(count);
        self
    }

    /// Require usage reporting.
    pub const fn track_usage(mut self, track: bool) -> Self {
        self.config.track_usage = Some(track);
        self
    }

    /// Require cost computation.
    pub const fn compute_cost(mut self, compute: bool) -> Self {
        self.config.compute_cost = Some(compute);
        self
    }

    /// Produce the immutable snapshot.
    pub fn build(self) -> ImageModelConfig {
        self.config
    }
}
