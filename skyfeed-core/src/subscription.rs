// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Explicit subscription handles with cancellation on disposal.
//!
//! Instead of tying observation to a UI-framework lifecycle, skyfeed returns
//! an explicit [`Subscription`] from subscribe calls: cancelling it (or
//! dropping it) signals the observing task to stop.

use core::future::Future;

use tokio_util::sync::CancellationToken;

/// Handle for a spawned observer task, with cancellation on drop.
///
/// The spawned task receives a [`CancellationToken`] that it should monitor
/// to stop observing. When the `Subscription` is dropped or explicitly
/// cancelled, the token is signalled, allowing the task to wind down and
/// release its timers.
///
/// # Example
///
/// ```rust
/// use skyfeed_core::Subscription;
///
/// # #[tokio::main]
/// # async fn main() {
/// let subscription = Subscription::spawn(|cancel| async move {
///     loop {
///         if cancel.is_cancelled() {
///             break;
///         }
///         tokio::task::yield_now().await;
///     }
/// });
///
/// // Cancellation is signalled automatically on drop
/// drop(subscription);
/// # }
/// ```
#[derive(Debug)]
pub struct Subscription {
    cancel: CancellationToken,
}

impl Subscription {
    /// Spawn an observer task with cancellation support.
    ///
    /// The provided closure receives a `CancellationToken` that is triggered
    /// when the subscription is dropped or cancelled. The spawned future
    /// should monitor the token and exit when cancellation is requested.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the observer task to stop.
    ///
    /// This does not wait for the task to complete; the task stops at its
    /// next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
