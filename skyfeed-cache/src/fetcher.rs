// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The slow-fetch seam behind cache refreshes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use skyfeed_core::Result;
use tokio::time::sleep;

/// Latency of the simulated slow fetch.
pub const SIMULATED_FETCH_LATENCY: Duration = Duration::from_secs(3);

/// The slow operation a cache refresh awaits.
///
/// Implementations model a network or disk fetch. Real implementations can
/// fail and should return a `FetchFailed` error; the store's refresh then
/// leaves the cache at its last good value and surfaces the failure to
/// observers.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch a fresh value.
    async fn fetch(&self) -> Result<String>;
}

/// Simulated slow fetcher: suspends for [`SIMULATED_FETCH_LATENCY`], then
/// returns `"New data from request #N"` with a strictly increasing request
/// counter. Deliberately cannot fail.
#[derive(Debug, Default)]
pub struct SimulatedFetcher {
    requests: AtomicU64,
}

impl SimulatedFetcher {
    /// Creates a fetcher whose first response is request #1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
        }
    }

    /// Number of fetches completed so far.
    #[must_use]
    pub fn completed_requests(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataFetcher for SimulatedFetcher {
    async fn fetch(&self) -> Result<String> {
        sleep(SIMULATED_FETCH_LATENCY).await;
        let request = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("New data from request #{request}"))
    }
}
