//! Capability traits implemented by provider adapters.
//!
//! Each capability is its own trait so a provider can implement exactly what
//! its backend supports; all of them extend [`ModelProvider`] for identity
//! and model discovery. Callers pick a concrete provider at construction
//! time and talk to it through these traits.
//!
//! Adapters own the wire format and must report upstream failures as
//! [`crate::error::LlmError`] values; nothing in this crate retries.

mod completion;
pub use completion::{CompletionExtensions, CompletionModel};

mod embedding;
pub use embedding::EmbeddingModel;

mod image;
pub use image::ImageModel;

use crate::types::ModelInfo;

/// Identity and capability discovery, shared by every provider adapter.
pub trait ModelProvider: Send + Sync {
    /// Canonical provider id (e.g. `"openai"`, `"azure"`).
    fn provider_id(&self) -> std::borrow::Cow<'static, str>;

    /// Descriptors of the models this provider serves.
    fn supported_models(&self) -> Vec<ModelInfo>;
}
