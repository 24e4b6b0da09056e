//! Cancellation utilities for completion streams.

use std::future::Future;
use tokio_util::sync::CancellationToken;

use crate::error::LlmError;
use crate::streaming::{CompletionStream, CompletionStreamHandle};

/// A handle that can be used to request cancellation of a stream.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request cancellation. The wrapped stream stops yielding at its next
    /// suspension point and ends promptly; dropping the ended stream releases
    /// the producer so the adapter stops generating.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Create a standalone cancel handle that can be shared across tasks.
pub fn new_cancel_handle() -> CancelHandle {
    CancelHandle::new()
}

/// Wrap a completion stream so it can be cancelled, returning the handle.
pub fn make_cancellable_stream(stream: CompletionStream) -> (CompletionStream, CancelHandle) {
    let handle = CancelHandle::new();
    let token = handle.token.clone();
    let mut inner = stream;
    let wrapped = async_stream::stream! {
        use futures_util::StreamExt;
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                item = inner.next() => {
                    let Some(item) = item else { break };
                    yield item;
                }
            }
        }
    };
    (Box::pin(wrapped), handle)
}

/// Build a [`CompletionStreamHandle`] whose cancellation aborts both the
/// streaming handshake (connect/send/headers) and the subsequent stream
/// consumption.
///
/// The future must be `'static` (adapters typically clone an `Arc`-based
/// client into it) because the resulting stream is stored as a `'static`
/// trait object. A handshake failure is delivered as the stream's single
/// `Err` item, per the stream contract.
pub fn make_cancellable_stream_handle_from_future<F>(future: F) -> CompletionStreamHandle
where
    F: Future<Output = Result<CompletionStream, LlmError>> + Send + 'static,
{
    let cancel = CancelHandle::new();
    let token = cancel.token.clone();
    let future = std::sync::Mutex::new(Some(future));

    let stream = async_stream::stream! {
        use futures_util::StreamExt;

        let handshake = tokio::select! {
            _ = token.cancelled() => return,
            result = async {
                let fut = {
                    let mut guard = match future.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    guard.take()
                };
                match fut {
                    Some(fut) => fut.await,
                    None => Err(LlmError::InternalError(
                        "handshake future polled twice".to_string(),
                    )),
                }
            } => result,
        };

        let mut inner = match handshake {
            Ok(stream) => stream,
            Err(error) => {
                yield Err(error);
                return;
            }
        };

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                item = inner.next() => {
                    let Some(item) = item else { break };
                    yield item;
                }
            }
        }
    };

    CompletionStreamHandle {
        stream: Box::pin(stream),
        cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn cancel_wakes_pending_next_immediately() {
        // A stream that never yields and never ends.
        let pending: CompletionStream = Box::pin(futures_util::stream::pending());
        let (mut stream, cancel) = make_cancellable_stream(pending);

        let waiter = tokio::spawn(async move { stream.next().await });

        // Give the task a chance to poll and block on `next()`.
        tokio::task::yield_now().await;

        cancel.cancel();

        let out = tokio::time::timeout(std::time::Duration::from_millis(200), waiter)
            .await
            .expect("cancel should wake the waiting task")
            .expect("task ok");

        assert!(out.is_none());
    }

    #[tokio::test]
    async fn cancel_during_handshake_ends_stream_without_items() {
        let handle = make_cancellable_stream_handle_from_future(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok(Box::pin(futures_util::stream::empty()) as CompletionStream)
        });

        handle.cancel.cancel();
        let mut stream = handle.stream;

        let out = tokio::time::timeout(std::time::Duration::from_millis(200), stream.next())
            .await
            .expect("cancelled handshake should end the stream promptly");
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn handshake_failure_becomes_terminal_error() {
        let handle = make_cancellable_stream_handle_from_future(async {
            Err(LlmError::AuthenticationError("bad key".into()))
        });

        let mut stream = handle.stream;
        let first = stream.next().await.expect("one item");
        assert!(matches!(first, Err(LlmError::AuthenticationError(_))));
        assert!(stream.next().await.is_none());
    }
}
