//! Embedding capability trait.

use async_trait::async_trait;

use super::ModelProvider;
use crate::error::LlmError;
use crate::types::{EmbeddingRequest, EmbeddingResponse};

/// Vector embedding generation.
#[async_trait]
pub trait EmbeddingModel: ModelProvider {
    /// Embed an ordered batch of content strings.
    ///
    /// The response carries one vector per input string, index-aligned with
    /// the request's `contents`.
    async fn generate_embeddings(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, LlmError>;
}
