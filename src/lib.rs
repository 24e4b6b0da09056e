//! unillm
//!
//! A unified, provider-agnostic interface to generative AI models: text
//! completion (streaming and non-streaming), embeddings, and image
//! generation behind one set of capability traits.
//!
//! Provider adapters implement the traits in [`traits`] and translate to and
//! from their vendor wire formats; callers build requests once against the
//! types in [`types`] and consume results through the chunk stream protocol
//! in [`streaming`]. Tool calls interleave with streaming through the bridge
//! in [`tools`].
//!
//! ```rust,ignore
//! use unillm::prelude::*;
//!
//! async fn run(provider: impl CompletionModel) -> Result<(), LlmError> {
//!     let request = CompletionRequest::builder("gpt-4o-mini")
//!         .message(ModelMessage::user("Hello!"))
//!         .temperature(0.3)
//!         .build();
//!     let stream = provider.stream(request, &[]).await?;
//!     let collected = unillm::streaming::collect(stream).await?;
//!     println!("{}", collected.text);
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod streaming;
pub mod tools;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::LlmError;

/// Common imports for callers and adapter implementers.
pub mod prelude {
    pub use crate::error::{ErrorCategory, LlmError};
    pub use crate::streaming::{
        ChunkKind, CompletionStream, CompletionStreamHandle, StreamChunk, StreamCollector, collect,
    };
    pub use crate::tools::{FunctionTool, ModelTool, resolve_tool_call};
    pub use crate::traits::{
        CompletionExtensions, CompletionModel, EmbeddingModel, ImageModel, ModelProvider,
    };
    pub use crate::types::{
        Artifact, ClientConfig, CompletionRequest, CompletionResponse, EmbeddingModelConfig,
        EmbeddingRequest, EmbeddingResponse, FinishReason, ImageGenerationRequest,
        ImageGenerationResponse, ImageModelConfig, MediaKind, MessageRole, ModelConfig, ModelInfo,
        ModelMessage, ModelPricing, TokenUsage, ToolCall,
    };
}
