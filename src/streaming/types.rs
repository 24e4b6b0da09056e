//! Streaming event types for incremental completion delivery.

use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

use crate::error::LlmError;
use crate::types::{TokenUsage, ToolCall};

/// One discrete event on a completion stream.
///
/// Chunks arrive in the exact order the provider adapter emitted them; the
/// end of the stream is the only end-of-generation signal, and no chunk
/// carries a "last" marker. Terminal errors arrive as the final `Err` item
/// before the stream ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StreamChunk {
    /// Incremental output text. Fragments concatenate in emission order to
    /// form the final output.
    Text {
        /// The text fragment.
        delta: String,
    },
    /// Incremental reasoning text. Surfaced separately; never part of the
    /// final output.
    Reasoning {
        /// The reasoning fragment.
        delta: String,
    },
    /// A usage/cost snapshot. Zero or more per stream; successive snapshots
    /// fold through [`TokenUsage::append`], they do not overwrite.
    Usage {
        /// Counters accumulated since the previous usage chunk.
        usage: TokenUsage,
        /// Incremental cost, when the adapter computes it.
        #[serde(skip_serializing_if = "Option::is_none")]
        cost: Option<f64>,
    },
    /// The model paused this turn on a tool invocation. Generation for the
    /// turn is complete; resolve the call and resubmit the conversation.
    ToolCall(ToolCall),
}

/// Discriminant of a [`StreamChunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    Text,
    Reasoning,
    Usage,
    ToolCall,
}

impl StreamChunk {
    /// The chunk's kind.
    pub const fn kind(&self) -> ChunkKind {
        match self {
            Self::Text { .. } => ChunkKind::Text,
            Self::Reasoning { .. } => ChunkKind::Reasoning,
            Self::Usage { .. } => ChunkKind::Usage,
            Self::ToolCall(_) => ChunkKind::ToolCall,
        }
    }
}

impl std::fmt::Display for StreamChunk {
    /// Human-readable rendering: the raw fragment for text and reasoning,
    /// the canonical usage JSON for usage chunks, and `name(id)` for tool
    /// calls.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text { delta } | Self::Reasoning { delta } => f.write_str(delta),
            Self::Usage { usage, .. } => write!(f, "{usage}"),
            Self::ToolCall(call) => write!(f, "{}({})", call.name, call.id),
        }
    }
}

/// Completion stream: the sole mechanism for incremental delivery.
///
/// Single producer, single logical consumer per call. Yields chunks in
/// emission order and ends exactly once; a terminal error, if any, is the
/// last item. Check for it after the stream ends instead of assuming the end
/// alone means success.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, LlmError>> + Send>>;

/// A completion stream paired with a first-class cancellation handle.
///
/// Cancelling stops delivery at the producer's next suspension point and
/// ends the stream promptly.
pub struct CompletionStreamHandle {
    /// The underlying stream.
    pub stream: CompletionStream,
    /// Handle to cancel the stream.
    pub cancel: crate::utils::cancel::CancelHandle,
}
