// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock stream producer.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use chrono::Utc;
use futures::Stream;
use pin_project::pin_project;
use tokio::time::{sleep, Sleep};

/// Milliseconds since the Unix epoch, read from the wall clock at emission
/// time. Ephemeral; never persisted.
pub type Timestamp = i64;

/// Interval between clock emissions.
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Returns an infinite stream of current wall-clock timestamps, one per
/// [`CLOCK_TICK_INTERVAL`].
///
/// Each call returns an independent stream with its own timer: the first
/// timestamp is emitted on the first poll, then one per interval. Dropping
/// the stream releases the timer — the only lifecycle contract.
///
/// # Example
///
/// ```rust
/// use skyfeed_sources::observe_current_time;
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut clock = Box::pin(observe_current_time());
///
/// let first = clock.next().await.unwrap();
/// assert!(first > 0);
/// # }
/// ```
#[must_use]
pub fn observe_current_time() -> ClockStream {
    ClockStream { sleep: None }
}

/// Infinite stream of wall-clock [`Timestamp`]s. See [`observe_current_time`].
#[pin_project]
#[derive(Debug)]
pub struct ClockStream {
    #[pin]
    sleep: Option<Sleep>,
}

impl Stream for ClockStream {
    type Item = Timestamp;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if let Some(pending) = this.sleep.as_mut().as_pin_mut() {
            match pending.poll(cx) {
                Poll::Ready(()) => {}
                Poll::Pending => return Poll::Pending,
            }
        }

        // Read the clock at emission time, then arm the timer for the next
        // tick. The first poll emits immediately.
        this.sleep.set(Some(sleep(CLOCK_TICK_INTERVAL)));
        Poll::Ready(Some(Utc::now().timestamp_millis()))
    }
}
