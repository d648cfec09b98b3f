// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::time::Duration;

use futures::stream::StreamExt;
use futures::Stream;
use skyfeed_core::FeedItem;
use tokio::time::sleep;

/// Asserts that the stream emits nothing within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Returns the next stream item, panicking if none arrives within
/// `timeout_ms`.
pub async fn next_with_timeout<S>(stream: &mut S, timeout_ms: u64) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    tokio::select! {
        item = stream.next() => item,
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("timed out after {timeout_ms}ms waiting for the next item");
        }
    }
}

/// Collects exactly `n` items from the stream.
///
/// # Panics
///
/// Panics if the stream ends before yielding `n` items.
pub async fn collect_n<S>(stream: &mut S, n: usize) -> Vec<S::Item>
where
    S: Stream + Unpin,
{
    let mut items = Vec::with_capacity(n);
    for i in 0..n {
        match stream.next().await {
            Some(item) => items.push(item),
            None => panic!("stream ended after {i} items, expected {n}"),
        }
    }
    items
}

/// Expects the next item to be `FeedItem::Value(expected)`.
pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = FeedItem<T>> + Unpin,
    T: PartialEq + Debug,
{
    match stream.next().await {
        Some(FeedItem::Value(value)) => assert_eq!(value, expected),
        other => panic!("expected value {expected:?}, got {other:?}"),
    }
}
