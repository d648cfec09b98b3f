// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use futures::StreamExt;
use skyfeed::prelude::*;
use skyfeed::{INITIAL_CACHE_TEXT, LOADING_MARKER};
use skyfeed_test_utils::{collect_n, expect_next_value};
use tokio::time::pause;

#[tokio::test]
async fn test_dashboard_wiring() -> anyhow::Result<()> {
    pause();

    // Explicit construction: the store is wired from its fetcher
    let store = CachedValueStore::new(Arc::new(SimulatedFetcher::new()));
    let mut cached = store.observe()?;
    let mut clock = Box::pin(observe_current_time());
    let mut weather = Box::pin(observe_weather());

    // Every source is immediately observable
    assert!(clock.next().await.is_some());
    assert_eq!(weather.next().await, Some(WeatherReading::Cloudy));
    expect_next_value(&mut cached, INITIAL_CACHE_TEXT.to_string()).await;

    // A user-triggered refresh flows through loading into fresh data
    store.refresh().await?;
    expect_next_value(&mut cached, LOADING_MARKER.to_string()).await;
    expect_next_value(&mut cached, "New data from request #1".to_string()).await;

    // The timer-driven sources keep producing
    assert!(clock.next().await.is_some());
    assert_eq!(weather.next().await, Some(WeatherReading::Rainy));

    Ok(())
}

#[tokio::test]
async fn test_all_observers_see_the_same_write_order() -> anyhow::Result<()> {
    pause();

    let store = CachedValueStore::new(Arc::new(SimulatedFetcher::new()));
    let mut first = store.observe()?;
    let mut second = store.observe()?;

    store.refresh().await?;
    store.refresh().await?;

    let expected = vec![
        INITIAL_CACHE_TEXT.to_string(),
        LOADING_MARKER.to_string(),
        "New data from request #1".to_string(),
        LOADING_MARKER.to_string(),
        "New data from request #2".to_string(),
    ];

    let first_writes: Vec<_> = collect_n(&mut first, 5)
        .await
        .into_iter()
        .map(FeedItem::unwrap)
        .collect();
    let second_writes: Vec<_> = collect_n(&mut second, 5)
        .await
        .into_iter()
        .map(FeedItem::unwrap)
        .collect();

    assert_eq!(first_writes, expected);
    assert_eq!(second_writes, expected);

    Ok(())
}

#[tokio::test]
async fn test_weather_rotation_scenario() {
    pause();

    let mut weather = Box::pin(observe_weather());
    let readings = collect_n(&mut weather, 3).await;

    assert_eq!(
        readings,
        vec![
            WeatherReading::Cloudy,
            WeatherReading::Rainy,
            WeatherReading::Stormy,
        ]
    );
}
