// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use std::error::Error;

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::error::{Result, SkyfeedError};

/// Extension trait providing async subscription capabilities for streams.
///
/// This trait enables processing stream items with async handlers in a
/// sequential manner.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = T> + Sized {
    /// Subscribes to the stream with an async handler, processing items
    /// sequentially.
    ///
    /// This method consumes the stream and processes each item with the
    /// provided handler. Each item's handler completes before the next item
    /// is processed, so handler effects are observed in emission order.
    ///
    /// # Behavior
    ///
    /// - Processes each stream item with the provided async handler
    /// - Continues until the stream ends or the cancellation token fires;
    ///   once cancellation is observed, the handler is not invoked again
    /// - Errors from handlers are passed to the error callback if provided
    /// - If no error callback is provided, errors are collected and returned
    ///   on completion
    ///
    /// # Arguments
    ///
    /// * `on_next_func` - Async function called for each stream item.
    ///   Receives the item and a cancellation token.
    /// * `cancellation_token` - Optional token to stop processing. If `None`,
    ///   a default token is created that never cancels.
    /// * `on_error_callback` - Optional error handler called when
    ///   `on_next_func` returns an error. If `None`, errors are collected and
    ///   returned.
    ///
    /// # Errors
    ///
    /// Returns `Err(SkyfeedError::MultipleErrors)` if any items failed to
    /// process and no error callback was provided. With an error callback,
    /// errors are passed to it and the function returns `Ok(())` on stream
    /// completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use skyfeed_core::SubscribeExt;
    /// use futures::stream;
    /// use std::sync::Arc;
    /// use futures::lock::Mutex;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let results = Arc::new(Mutex::new(Vec::new()));
    /// let results_clone = results.clone();
    ///
    /// let stream = stream::iter(vec![1, 2, 3]);
    ///
    /// stream
    ///     .subscribe(
    ///         move |item, _token| {
    ///             let results = results_clone.clone();
    ///             async move {
    ///                 results.lock().await.push(item * 2);
    ///                 Ok::<(), std::io::Error>(())
    ///             }
    ///         },
    ///         None,                       // No cancellation
    ///         None::<fn(std::io::Error)>, // No error callback
    ///     )
    ///     .await
    ///     .unwrap();
    ///
    /// assert_eq!(*results.lock().await, vec![2, 4, 6]);
    /// # }
    /// ```
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        cancellation_token: Option<CancellationToken>,
        on_error_callback: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Clone + Send + Sync + 'static,
        T: Debug + Send + Clone + 'static,
        E: Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = T> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        mut self,
        on_next_func: F,
        cancellation_token: Option<CancellationToken>,
        on_error_callback: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Clone + Send + Sync + 'static,
        T: Debug + Send + Clone + 'static,
        E: Error + Send + Sync + 'static,
    {
        let cancellation_token = cancellation_token.unwrap_or_default();
        let mut collected_errors = Vec::new();

        while let Some(item) = self.next().await {
            if cancellation_token.is_cancelled() {
                break;
            }

            let result = on_next_func(item.clone(), cancellation_token.clone()).await;

            if let Err(error) = result {
                match &on_error_callback {
                    Some(on_error_callback) => on_error_callback(error),
                    None => collected_errors.push(error),
                }
            }
        }

        if collected_errors.is_empty() {
            Ok(())
        } else {
            Err(SkyfeedError::from_user_errors(collected_errors))
        }
    }
}
