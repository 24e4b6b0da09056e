//! Completion capability trait and extensions.

use std::sync::Arc;

use async_trait::async_trait;

use super::ModelProvider;
use crate::error::LlmError;
use crate::streaming::{CompletionStream, CompletionStreamHandle};
use crate::tools::ModelTool;
use crate::types::{CompletionRequest, CompletionResponse, ModelMessage};

/// Text completion, one-shot and streaming.
#[async_trait]
pub trait CompletionModel: ModelProvider {
    /// One-shot completion. `tools` is the set of capabilities the model may
    /// invoke mid-generation; pass an empty slice for none.
    async fn complete(
        &self,
        request: CompletionRequest,
        tools: &[Arc<dyn ModelTool>],
    ) -> Result<CompletionResponse, LlmError>;

    /// Incremental delivery over the chunk stream.
    ///
    /// A failed call either returns the error synchronously or yields it as
    /// the stream's final item before the stream ends; the stream is never
    /// left open without progress.
    async fn stream(
        &self,
        request: CompletionRequest,
        tools: &[Arc<dyn ModelTool>],
    ) -> Result<CompletionStream, LlmError>;

    /// Like [`stream`](Self::stream), with a first-class cancellation handle
    /// wrapped around the established stream.
    async fn stream_with_cancel(
        &self,
        request: CompletionRequest,
        tools: &[Arc<dyn ModelTool>],
    ) -> Result<CompletionStreamHandle, LlmError> {
        let stream = self.stream(request, tools).await?;
        let (stream, cancel) = crate::utils::cancel::make_cancellable_stream(stream);
        Ok(CompletionStreamHandle { stream, cancel })
    }
}

/// Convenience methods on top of [`CompletionModel`].
#[async_trait]
pub trait CompletionExtensions: CompletionModel {
    /// Single-prompt completion returning just the output text.
    async fn ask(&self, model: String, prompt: String) -> Result<String, LlmError> {
        let request = CompletionRequest::new(model, vec![ModelMessage::user(prompt)]);
        let response = self.complete(request, &[]).await?;
        Ok(response.text)
    }

    /// Append a user message to a conversation, complete, and return the
    /// answer together with the updated conversation.
    async fn continue_conversation(
        &self,
        model: String,
        mut conversation: Vec<ModelMessage>,
        new_message: String,
    ) -> Result<(String, Vec<ModelMessage>), LlmError> {
        conversation.push(ModelMessage::user(new_message));
        let request = CompletionRequest::new(model, conversation.clone());
        let response = self.complete(request, &[]).await?;
        conversation.push(ModelMessage::assistant(response.text.clone()));
        Ok((response.text, conversation))
    }
}

impl<T: CompletionModel + ?Sized> CompletionExtensions for T {}
