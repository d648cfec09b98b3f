// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with combinator that prepends initial values to a stream.

use futures::{stream::iter, Stream, StreamExt};

use crate::feed_item::FeedItem;

/// Prepends initial values to the stream.
///
/// The initial values are emitted first, in the order provided, followed by
/// all values from the source stream. This is the concatenation behind
/// replay-1 subscriptions: a snapshot of the current value first, then the
/// live updates.
///
/// # Arguments
///
/// * `stream` - The source stream
/// * `initial_values` - `FeedItem<T>`s to emit before the source stream
///
/// # Error Handling
///
/// Errors in both the initial values and the source stream flow through
/// unchanged; this combinator does not consume or transform them.
///
/// # Examples
///
/// ```rust
/// use skyfeed_core::start_with::start_with;
/// use skyfeed_core::FeedItem;
/// use futures::{pin_mut, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, rx) = async_channel::unbounded();
///
/// let initial = vec![FeedItem::Value(1), FeedItem::Value(2)];
/// let stream = start_with(rx, initial);
/// pin_mut!(stream);
///
/// // Initial values come first
/// assert_eq!(stream.next().await, Some(FeedItem::Value(1)));
/// assert_eq!(stream.next().await, Some(FeedItem::Value(2)));
///
/// // Then stream values
/// tx.try_send(FeedItem::Value(3)).unwrap();
/// assert_eq!(stream.next().await, Some(FeedItem::Value(3)));
/// # }
/// ```
pub fn start_with<S, T>(
    stream: S,
    initial_values: Vec<FeedItem<T>>,
) -> impl Stream<Item = FeedItem<T>> + Send
where
    S: Stream<Item = FeedItem<T>> + Send,
    T: Send,
{
    let initial_stream = iter(initial_values);
    initial_stream.chain(stream)
}
