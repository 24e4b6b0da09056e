//! Stream protocol contract: ordering, termination, cancellation, usage folding.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use serde_json::json;

use unillm::prelude::*;
use unillm::streaming::collect;
use unillm::tools::ModelTool;

/// A provider that replays a fixed chunk script.
struct ScriptedProvider {
    script: Vec<Result<StreamChunk, fn() -> LlmError>>,
}

impl ScriptedProvider {
    fn new(script: Vec<Result<StreamChunk, fn() -> LlmError>>) -> Self {
        Self { script }
    }
}

impl ModelProvider for ScriptedProvider {
    fn provider_id(&self) -> std::borrow::Cow<'static, str> {
        "scripted".into()
    }

    fn supported_models(&self) -> Vec<ModelInfo> {
        vec![ModelInfo::builder("scripted-model").build()]
    }
}

#[async_trait::async_trait]
impl CompletionModel for ScriptedProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
        tools: &[Arc<dyn ModelTool>],
    ) -> Result<CompletionResponse, LlmError> {
        let stream = self.stream(request, tools).await?;
        Ok(collect(stream).await?.into_response())
    }

    async fn stream(
        &self,
        request: CompletionRequest,
        _tools: &[Arc<dyn ModelTool>],
    ) -> Result<CompletionStream, LlmError> {
        request.validate()?;
        let items: Vec<Result<StreamChunk, LlmError>> = self
            .script
            .iter()
            .map(|item| match item {
                Ok(chunk) => Ok(chunk.clone()),
                Err(make) => Err(make()),
            })
            .collect();
        Ok(Box::pin(futures_util::stream::iter(items)))
    }
}

fn text(delta: &str) -> StreamChunk {
    StreamChunk::Text {
        delta: delta.to_string(),
    }
}

fn usage(input: u64, output: u64) -> StreamChunk {
    StreamChunk::Usage {
        usage: TokenUsage {
            total_input_tokens: input,
            total_output_tokens: output,
            ..Default::default()
        },
        cost: None,
    }
}

fn request() -> CompletionRequest {
    CompletionRequest::new("scripted-model", vec![ModelMessage::user("go")])
}

#[tokio::test]
async fn chunks_arrive_in_emission_order() {
    let provider = ScriptedProvider::new(vec![
        Ok(text("a")),
        Ok(text("b")),
        Ok(usage(10, 2)),
        Ok(text("c")),
    ]);
    let mut stream = provider.stream(request(), &[]).await.expect("stream opens");

    let mut kinds = Vec::new();
    let mut output = String::new();
    while let Some(item) = stream.next().await {
        let chunk = item.expect("no errors in this script");
        kinds.push(chunk.kind());
        if let StreamChunk::Text { delta } = &chunk {
            output.push_str(delta);
        }
    }

    assert_eq!(
        kinds,
        [
            ChunkKind::Text,
            ChunkKind::Text,
            ChunkKind::Usage,
            ChunkKind::Text
        ]
    );
    assert_eq!(output, "abc");
}

#[tokio::test]
async fn stream_ends_exactly_once() {
    let provider = ScriptedProvider::new(vec![Ok(text("only"))]);
    let mut stream = provider.stream(request(), &[]).await.expect("stream opens");

    assert!(stream.next().await.is_some());
    assert!(stream.next().await.is_none());
    // Once ended, the stream stays ended; nothing further is observable.
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn final_ledger_equals_sum_of_all_usage_chunks() {
    let provider = ScriptedProvider::new(vec![
        Ok(usage(10, 5)),
        Ok(text("partial")),
        Ok(usage(3, 0)),
        Ok(usage(0, 7)),
    ]);
    let stream = provider.stream(request(), &[]).await.expect("stream opens");
    let collected = collect(stream).await.expect("stream ok");

    let ledger = collected.usage.expect("usage observed");
    assert_eq!(ledger.total_input_tokens, 13);
    assert_eq!(ledger.total_output_tokens, 12);
}

#[tokio::test]
async fn terminal_error_precedes_closure() {
    let provider = ScriptedProvider::new(vec![
        Ok(text("par")),
        Err(|| LlmError::StreamError("connection reset".to_string())),
    ]);
    let mut stream = provider.stream(request(), &[]).await.expect("stream opens");

    assert!(matches!(stream.next().await, Some(Ok(_))));
    let terminal = stream.next().await.expect("error item before end");
    assert!(matches!(terminal, Err(LlmError::StreamError(_))));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn invalid_request_fails_before_any_stream_exists() {
    let provider = ScriptedProvider::new(vec![Ok(text("never"))]);
    let bad = CompletionRequest::new("", vec![ModelMessage::user("go")]);
    let result = provider.stream(bad, &[]).await;
    assert!(matches!(result, Err(LlmError::InvalidParameter(_))));
}

#[tokio::test]
async fn cancelling_before_consumption_closes_promptly() {
    // A producer that never emits: cancellation is the only way out.
    struct PendingProvider;

    impl ModelProvider for PendingProvider {
        fn provider_id(&self) -> std::borrow::Cow<'static, str> {
            "pending".into()
        }
        fn supported_models(&self) -> Vec<ModelInfo> {
            Vec::new()
        }
    }

    #[async_trait::async_trait]
    impl CompletionModel for PendingProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
            _tools: &[Arc<dyn ModelTool>],
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::UnsupportedOperation("streaming only".into()))
        }

        async fn stream(
            &self,
            _request: CompletionRequest,
            _tools: &[Arc<dyn ModelTool>],
        ) -> Result<CompletionStream, LlmError> {
            Ok(Box::pin(futures_util::stream::pending()))
        }
    }

    let handle = PendingProvider
        .stream_with_cancel(request(), &[])
        .await
        .expect("stream opens");

    handle.cancel.cancel();
    let mut stream = handle.stream;

    let outcome = tokio::time::timeout(Duration::from_millis(200), stream.next())
        .await
        .expect("closure must be prompt after cancellation");
    assert!(outcome.is_none());
}

#[tokio::test]
async fn cancelling_mid_consumption_stops_delivery() {
    // An endless producer; the consumer reads two chunks then cancels.
    struct ChattyProvider;

    impl ModelProvider for ChattyProvider {
        fn provider_id(&self) -> std::borrow::Cow<'static, str> {
            "chatty".into()
        }
        fn supported_models(&self) -> Vec<ModelInfo> {
            Vec::new()
        }
    }

    #[async_trait::async_trait]
    impl CompletionModel for ChattyProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
            _tools: &[Arc<dyn ModelTool>],
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::UnsupportedOperation("streaming only".into()))
        }

        async fn stream(
            &self,
            _request: CompletionRequest,
            _tools: &[Arc<dyn ModelTool>],
        ) -> Result<CompletionStream, LlmError> {
            let stream = async_stream::stream! {
                loop {
                    yield Ok(StreamChunk::Text { delta: "x".to_string() });
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            };
            Ok(Box::pin(stream))
        }
    }

    let handle = ChattyProvider
        .stream_with_cancel(request(), &[])
        .await
        .expect("stream opens");
    let mut stream = handle.stream;

    assert!(stream.next().await.is_some());
    assert!(stream.next().await.is_some());

    handle.cancel.cancel();

    // Delivery stops within a bounded time once cancellation is observed.
    let closed = tokio::time::timeout(Duration::from_millis(500), async {
        while stream.next().await.is_some() {}
    })
    .await;
    assert!(closed.is_ok(), "stream should end promptly after cancel");
}

#[tokio::test]
async fn complete_delegates_to_collected_stream() {
    let provider = ScriptedProvider::new(vec![
        Ok(text("hello ")),
        Ok(text("world")),
        Ok(usage(4, 2)),
    ]);
    let response = provider.complete(request(), &[]).await.expect("call ok");
    assert_eq!(response.text, "hello world");
    assert_eq!(response.finish_reason, Some(FinishReason::Stop));
    assert_eq!(response.usage.expect("usage").total_input_tokens, 4);
}

#[tokio::test]
async fn tool_call_chunk_ends_the_turn() {
    let provider = ScriptedProvider::new(vec![
        Ok(text("let me check")),
        Ok(StreamChunk::ToolCall(ToolCall::pending(
            "call_7",
            "weather",
            json!({"city": "Oslo"}),
        ))),
    ]);
    let response = provider.complete(request(), &[]).await.expect("call ok");
    assert_eq!(response.finish_reason, Some(FinishReason::ToolCalls));
}
