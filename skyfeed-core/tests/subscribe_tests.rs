// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use futures::lock::Mutex;
use futures::stream;
use skyfeed_core::{CancellationToken, SkyfeedError, SubscribeExt};

#[derive(Debug, thiserror::Error)]
#[error("handler error: {0}")]
struct HandlerError(String);

#[tokio::test]
async fn processes_items_sequentially_in_order() {
    let results = Arc::new(Mutex::new(Vec::new()));
    let results_clone = results.clone();

    stream::iter(vec![1, 2, 3, 4, 5])
        .subscribe(
            move |item, _token| {
                let results = results_clone.clone();
                async move {
                    results.lock().await.push(item);
                    Ok::<(), HandlerError>(())
                }
            },
            None,
            None::<fn(HandlerError)>,
        )
        .await
        .unwrap();

    assert_eq!(*results.lock().await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn collects_errors_when_no_callback_is_provided() {
    let result = stream::iter(vec![1, 2, 3, 4, 5])
        .subscribe(
            |item, _token| async move {
                if item % 2 == 0 {
                    Err(HandlerError(format!("even number: {item}")))
                } else {
                    Ok(())
                }
            },
            None,
            None::<fn(HandlerError)>,
        )
        .await;

    match result {
        Err(SkyfeedError::MultipleErrors { count, errors }) => {
            assert_eq!(count, 2);
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected MultipleErrors, got {other:?}"),
    }
}

#[tokio::test]
async fn routes_errors_to_the_callback() {
    let errors = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let errors_clone = errors.clone();

    stream::iter(vec![1, 2, 3, 4])
        .subscribe(
            |item, _token| async move {
                if item % 2 == 0 {
                    Err(HandlerError(format!("even number: {item}")))
                } else {
                    Ok(())
                }
            },
            None,
            Some(move |err: HandlerError| errors_clone.lock().push(err.to_string())),
        )
        .await
        .unwrap();

    assert_eq!(
        *errors.lock(),
        vec![
            "handler error: even number: 2".to_string(),
            "handler error: even number: 4".to_string(),
        ]
    );
}

#[tokio::test]
async fn pre_cancelled_token_processes_nothing() {
    let token = CancellationToken::new();
    token.cancel();

    let processed = Arc::new(Mutex::new(Vec::new()));
    let processed_clone = processed.clone();

    stream::iter(vec![1, 2, 3])
        .subscribe(
            move |item, _token| {
                let processed = processed_clone.clone();
                async move {
                    processed.lock().await.push(item);
                    Ok::<(), HandlerError>(())
                }
            },
            Some(token),
            None::<fn(HandlerError)>,
        )
        .await
        .unwrap();

    assert!(processed.lock().await.is_empty());
}

#[tokio::test]
async fn handler_is_not_invoked_after_cancellation() {
    let processed = Arc::new(Mutex::new(Vec::new()));
    let processed_clone = processed.clone();

    stream::iter(vec![1, 2, 3])
        .subscribe(
            move |item, token: CancellationToken| {
                let processed = processed_clone.clone();
                async move {
                    processed.lock().await.push(item);
                    // Cancel from inside the first handler invocation
                    token.cancel();
                    Ok::<(), HandlerError>(())
                }
            },
            None,
            None::<fn(HandlerError)>,
        )
        .await
        .unwrap();

    assert_eq!(*processed.lock().await, vec![1]);
}
