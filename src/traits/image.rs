//! Image generation capability trait.

use async_trait::async_trait;

use super::ModelProvider;
use crate::error::LlmError;
use crate::types::{ImageGenerationRequest, ImageGenerationResponse};

/// Image generation from instructions and optional reference artifacts.
#[async_trait]
pub trait ImageModel: ModelProvider {
    /// Generate an image.
    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, LlmError>;
}
