//! Fold a chunk stream into a final response.

use futures_util::StreamExt;

use super::types::{CompletionStream, StreamChunk};
use crate::error::LlmError;
use crate::types::{CompletionResponse, FinishReason, TokenUsage, ToolCall};

/// Everything observed while draining one completion stream.
#[derive(Debug, Clone, Default)]
pub struct CollectedCompletion {
    /// Output text, concatenated in emission order.
    pub text: String,
    /// Reasoning text, kept separate from the output.
    pub reasoning: String,
    /// Ledger folded from every usage chunk; `None` when no usage chunk
    /// arrived.
    pub usage: Option<TokenUsage>,
    /// Summed incremental cost, when any usage chunk carried one.
    pub cost: Option<f64>,
    /// Tool calls the model paused on, in emission order.
    pub tool_calls: Vec<ToolCall>,
}

impl CollectedCompletion {
    /// Convert into the non-streaming response shape.
    pub fn into_response(self) -> CompletionResponse {
        let finish_reason = if self.tool_calls.is_empty() {
            FinishReason::Stop
        } else {
            FinishReason::ToolCalls
        };
        CompletionResponse {
            text: self.text,
            usage: self.usage,
            cost: self.cost,
            finish_reason: Some(finish_reason),
        }
    }
}

/// Incremental accumulator over stream chunks.
///
/// Push chunks as they arrive (or use [`collect`] to drain a whole stream);
/// usage chunks fold through the ledger's append rule, text fragments
/// concatenate, reasoning stays separate.
#[derive(Debug, Default)]
pub struct StreamCollector {
    collected: CollectedCompletion,
}

impl StreamCollector {
    /// A fresh collector with a zeroed ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chunk into the accumulated state.
    pub fn push(&mut self, chunk: StreamChunk) {
        match chunk {
            StreamChunk::Text { delta } => self.collected.text.push_str(&delta),
            StreamChunk::Reasoning { delta } => self.collected.reasoning.push_str(&delta),
            StreamChunk::Usage { usage, cost } => {
                self.collected
                    .usage
                    .get_or_insert_with(TokenUsage::default)
                    .append(&usage);
                if let Some(cost) = cost {
                    *self.collected.cost.get_or_insert(0.0) += cost;
                }
            }
            StreamChunk::ToolCall(call) => {
                tracing::debug!(tool = %call.name, id = %call.id, "model paused on tool call");
                self.collected.tool_calls.push(call);
            }
        }
    }

    /// Finish and return everything observed.
    pub fn finish(self) -> CollectedCompletion {
        self.collected
    }
}

/// Drain a completion stream to its end.
///
/// Returns the collected state, or the stream's terminal error. By the
/// stream contract the error, if any, is the final item, so collection stops
/// there.
pub async fn collect(mut stream: CompletionStream) -> Result<CollectedCompletion, LlmError> {
    let mut collector = StreamCollector::new();
    while let Some(item) = stream.next().await {
        collector.push(item?);
    }
    let collected = collector.finish();
    tracing::debug!(
        text_len = collected.text.len(),
        tool_calls = collected.tool_calls.len(),
        "completion stream drained"
    );
    Ok(collected)
}
