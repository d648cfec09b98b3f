// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::convert::Infallible;
use std::time::Duration;

use futures::StreamExt;
use skyfeed_core::{SubscribeExt, Subscription};
use skyfeed_sources::observe_current_time;
use skyfeed_test_utils::{assert_no_element_emitted, next_with_timeout};
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{advance, pause};
use tokio_stream::wrappers::UnboundedReceiverStream;

#[tokio::test]
async fn emits_immediately_then_once_per_interval() {
    pause();
    let mut clock = Box::pin(observe_current_time());

    // First emission happens on the first poll, before any tick elapses
    assert!(clock.next().await.is_some());

    // Nothing more until the interval has passed
    assert_no_element_emitted(&mut clock, 500).await;

    advance(Duration::from_millis(500)).await;
    assert!(next_with_timeout(&mut clock, 100).await.is_some());
}

#[tokio::test]
async fn timestamps_are_non_decreasing() {
    pause();
    let mut clock = Box::pin(observe_current_time());

    let first = clock.next().await.unwrap();
    advance(Duration::from_secs(1)).await;
    let second = clock.next().await.unwrap();
    advance(Duration::from_secs(1)).await;
    let third = clock.next().await.unwrap();

    assert!(second >= first);
    assert!(third >= second);
}

#[tokio::test]
async fn each_subscription_gets_its_own_timer() {
    pause();
    let mut first = Box::pin(observe_current_time());
    let mut second = Box::pin(observe_current_time());

    // Consuming one stream does not advance the other's schedule
    assert!(first.next().await.is_some());
    advance(Duration::from_secs(1)).await;
    assert!(first.next().await.is_some());

    // A fresh subscription still emits immediately
    assert!(next_with_timeout(&mut second, 100).await.is_some());
}

#[tokio::test]
async fn cancellation_stops_further_emissions() {
    pause();
    let (tx, rx) = unbounded_channel();
    let mut observed = UnboundedReceiverStream::new(rx);

    let subscription = Subscription::spawn(move |token| async move {
        let _ = Box::pin(observe_current_time())
            .subscribe(
                move |timestamp, _token| {
                    let tx = tx.clone();
                    async move {
                        let _ = tx.send(timestamp);
                        Ok::<(), Infallible>(())
                    }
                },
                Some(token),
                None::<fn(Infallible)>,
            )
            .await;
    });

    // At least one emission arrives while the subscription is live
    assert!(next_with_timeout(&mut observed, 500).await.is_some());

    subscription.cancel();
    advance(Duration::from_secs(5)).await;

    // Once cancellation is acknowledged no further emission is observed
    assert_no_element_emitted(&mut observed, 500).await;
}
