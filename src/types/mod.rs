//! Core data model: requests, responses, configuration, and accounting.

mod client;
mod completion;
mod config;
mod embedding;
mod image;
mod message;
mod model;
mod tool_call;
mod usage;

pub use client::{ClientConfig, ClientConfigBuilder};
pub use completion::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, FinishReason,
};
pub use config::{
    EmbeddingModelConfig, EmbeddingModelConfigBuilder, ImageModelConfig, ImageModelConfigBuilder,
    ModelConfig, ModelConfigBuilder, ReasoningEffort, ResponseFormat,
};
pub use embedding::{EmbeddingRequest, EmbeddingResponse};
pub use image::{ImageGenerationRequest, ImageGenerationResponse};
pub use message::{Artifact, MessageRole, ModelMessage};
pub use model::{MediaKind, ModelInfo, ModelInfoBuilder, ModelPricing};
pub use tool_call::ToolCall;
pub use usage::TokenUsage;
