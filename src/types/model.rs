//! Model descriptors published by providers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A kind of media a model can consume or produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Text,
    Image,
    Audio,
    Video,
}

/// Per-unit-of-work prices for one model.
///
/// Prices are decimal strings (e.g. `"0.0000025"`), not floats: published
/// price tables use arbitrary-precision decimals and parsing them into binary
/// floating point would drift. How a price string is interpreted (per token,
/// per image, per request) is fixed by its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelPricing {
    /// Price per input token.
    pub input_token_price: String,
    /// Price per output token.
    pub output_token_price: String,
    /// Price per reasoning token.
    pub reasoning_token_price: String,
    /// Price per cached input token read.
    pub cache_read_token_price: String,
    /// Price per input token written to cache.
    pub cache_write_token_price: String,
    /// Price per generated image.
    pub image_price: String,
    /// Price per web search.
    pub web_search_price: String,
    /// Price per request.
    pub request_price: String,
}

/// Static descriptor of one model, published by the provider that serves it.
///
/// Immutable once constructed; build one with [`ModelInfo::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Provider-scoped model identifier (e.g. `"gpt-4o-mini"`).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Per-unit prices.
    pub pricing: ModelPricing,
    /// Media kinds accepted as input.
    pub input_media: Vec<MediaKind>,
    /// Media kinds produced as output.
    pub output_media: Vec<MediaKind>,
    /// Context window, in tokens.
    pub context_window: u64,
    /// Upper bound on generated tokens per call.
    pub max_output_tokens: u64,
    /// When this descriptor was last refreshed.
    pub updated_at: DateTime<Utc>,
}

impl ModelInfo {
    /// Start building a descriptor for the given model id.
    pub fn builder(id: impl Into<String>) -> ModelInfoBuilder {
        ModelInfoBuilder::new(id)
    }

    /// Whether the model accepts the given media kind as input.
    pub fn supports_input(&self, kind: MediaKind) -> bool {
        self.input_media.contains(&kind)
    }

    /// Whether the model can produce the given media kind.
    pub fn supports_output(&self, kind: MediaKind) -> bool {
        self.output_media.contains(&kind)
    }
}

/// Builder for [`ModelInfo`].
#[derive(Debug, Clone)]
pub struct ModelInfoBuilder {
    id: String,
    name: Option<String>,
    pricing: ModelPricing,
    input_media: Vec<MediaKind>,
    output_media: Vec<MediaKind>,
    context_window: u64,
    max_output_tokens: u64,
    updated_at: Option<DateTime<Utc>>,
}

impl ModelInfoBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            pricing: ModelPricing::default(),
            input_media: vec![MediaKind::Text],
            output_media: vec![MediaKind::Text],
            context_window: 0,
            max_output_tokens: 0,
            updated_at: None,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the price table.
    pub fn pricing(mut self, pricing: ModelPricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Replace the accepted input media kinds.
    pub fn input_media(mut self, media: Vec<MediaKind>) -> Self {
        self.input_media = media;
        self
    }

    /// Replace the produced output media kinds.
    pub fn output_media(mut self, media: Vec<MediaKind>) -> Self {
        self.output_media = media;
        self
    }

    /// Set the context window, in tokens.
    pub const fn context_window(mut self, tokens: u64) -> Self {
        self.context_window = tokens;
        self
    }

    /// Set the per-call output token limit.
    pub const fn max_output_tokens(mut self, tokens: u64) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    /// Set the descriptor refresh timestamp.
    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Build the descriptor. The display name defaults to the id and the
    /// timestamp to now.
    pub fn build(self) -> ModelInfo {
        ModelInfo {
            name: self.name.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            pricing: self.pricing,
            input_media: self.input_media,
            output_media: self.output_media,
            context_window: self.context_window,
            max_output_tokens: self.max_output_tokens,
            updated_at: self.updated_at.unwrap_or_else(Utc::now),
        }
    }
}
