// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal Dashboard Demo
//!
//! Plays the role of the presentation adapter in front of the skyfeed data
//! sources:
//! - Clock stream -> formatted wall-clock line, once per second
//! - Weather stream -> rotating reading, every two seconds
//! - Cached value store -> initial value plus every refresh write
//!
//! Refreshes are triggered periodically in place of a user action. Timestamp
//! formatting suspends briefly to simulate rendering cost; that cost belongs
//! here, not in the data sources. Shutdown is a Ctrl+C cancellation fanned
//! out to every subscription.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use skyfeed::prelude::*;
use skyfeed::Timestamp;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Simulated cost of turning a timestamp into a human-readable line.
const FORMAT_DELAY: Duration = Duration::from_millis(500);

/// How often the dashboard triggers a cache refresh.
const REFRESH_PERIOD: Duration = Duration::from_secs(5);

fn format_timestamp(timestamp: Timestamp) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🛰️  Skyfeed Terminal Dashboard starting...\n");

    // Cancellation token for graceful shutdown
    let cancel_token = CancellationToken::new();

    let cancel_token_ctrlc = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n🛑 Ctrl+C received, shutting down gracefully...");
        cancel_token_ctrlc.cancel();
    });

    // Explicit dependency construction: the store is wired from its fetcher
    let store = Arc::new(CachedValueStore::new(Arc::new(SimulatedFetcher::new())));

    let clock_subscription = Subscription::spawn(|token| async move {
        let _ = Box::pin(observe_current_time())
            .subscribe(
                |timestamp, _token| async move {
                    // Formatting is presentation work with a simulated cost
                    sleep(FORMAT_DELAY).await;
                    println!("🕐 time    | {}", format_timestamp(timestamp));
                    Ok::<(), Infallible>(())
                },
                Some(token),
                None::<fn(Infallible)>,
            )
            .await;
    });

    let weather_subscription = Subscription::spawn(|token| async move {
        let _ = Box::pin(observe_weather())
            .subscribe(
                |reading, _token| async move {
                    println!("⛅ weather | {reading}");
                    Ok::<(), Infallible>(())
                },
                Some(token),
                None::<fn(Infallible)>,
            )
            .await;
    });

    let cache_stream = store.observe()?;
    let cache_subscription = Subscription::spawn(|token| async move {
        let _ = cache_stream
            .subscribe(
                |item, _token| async move {
                    match item {
                        FeedItem::Value(value) => println!("📦 cache   | {value}"),
                        FeedItem::Error(err) => eprintln!("📦 cache   | refresh failed: {err}"),
                    }
                    Ok::<(), Infallible>(())
                },
                Some(token),
                None::<fn(Infallible)>,
            )
            .await;
    });

    // Periodic refresh trigger standing in for a user action
    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            _ = sleep(REFRESH_PERIOD) => {
                println!("🔄 refresh | requesting new data...");
                if let Err(err) = store.refresh().await {
                    eprintln!("🔄 refresh | failed: {err}");
                }
            }
        }
    }

    clock_subscription.cancel();
    weather_subscription.cancel();
    cache_subscription.cancel();

    println!("\n👋 Dashboard stopped.");
    Ok(())
}
