//! Streaming chunk protocol and its consumer-side helpers.

mod collector;
mod types;

pub use collector::{CollectedCompletion, StreamCollector, collect};
pub use types::{ChunkKind, CompletionStream, CompletionStreamHandle, StreamChunk};
