// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{pin_mut, stream, StreamExt};
use skyfeed_core::{start_with, FeedItem, SkyfeedError};

#[tokio::test]
async fn initial_values_come_before_the_source_stream() {
    let source = stream::iter(vec![FeedItem::Value(3), FeedItem::Value(4)]);
    let stream = start_with(source, vec![FeedItem::Value(1), FeedItem::Value(2)]);
    pin_mut!(stream);

    assert_eq!(stream.next().await, Some(FeedItem::Value(1)));
    assert_eq!(stream.next().await, Some(FeedItem::Value(2)));
    assert_eq!(stream.next().await, Some(FeedItem::Value(3)));
    assert_eq!(stream.next().await, Some(FeedItem::Value(4)));
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn empty_prefix_forwards_the_source_unchanged() {
    let source = stream::iter(vec![FeedItem::Value(1)]);
    let stream = start_with(source, Vec::new());
    pin_mut!(stream);

    assert_eq!(stream.next().await, Some(FeedItem::Value(1)));
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn errors_flow_through_unchanged() {
    let source = stream::iter(vec![
        FeedItem::Error(SkyfeedError::fetch_failed("boom")),
        FeedItem::Value(2),
    ]);
    let stream = start_with(source, vec![FeedItem::Value(1)]);
    pin_mut!(stream);

    assert_eq!(stream.next().await, Some(FeedItem::Value(1)));
    assert!(matches!(stream.next().await, Some(FeedItem::Error(_))));
    assert_eq!(stream.next().await, Some(FeedItem::Value(2)));
}
