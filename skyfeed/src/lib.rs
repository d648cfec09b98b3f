// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Skyfeed
//!
//! Reactive data sources with an observable, refreshable cached value.
//!
//! ## Overview
//!
//! Skyfeed exposes time-based and simulated-network values as observable
//! streams, plus a single cached string that can be refreshed on demand:
//!
//! - [`observe_current_time`] — wall-clock timestamps, one per second
//! - [`observe_weather`] — a rotating list of weather readings, one every
//!   two seconds
//! - [`CachedValueStore`] — one observable string, refreshed through an
//!   injected [`DataFetcher`]; every refresh is observed as a loading marker
//!   followed by the fetched result
//!
//! ## Design Philosophy
//!
//! Consumers are plain presentation adapters: they subscribe to the streams,
//! render values and call [`CachedValueStore::refresh`] on user action.
//! Construction is explicit — a store is built from its fetcher by
//! constructor injection, and observation is scoped by explicit
//! [`Subscription`] handles rather than a framework-managed lifecycle.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skyfeed::prelude::*;
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = CachedValueStore::new(Arc::new(SimulatedFetcher::new()));
//!
//!     let mut cached = store.observe().unwrap();
//!     // First item is the initial value, then every refresh write follows
//!     let initial = cached.next().await;
//!     println!("cache holds: {initial:?}");
//!
//!     store.refresh().await.unwrap();
//! }
//! ```

// Re-export core types
pub use skyfeed_core::{
    start_with, CancellationToken, FeedItem, Result, SkyfeedError, StateSubject, SubjectError,
    SubjectStream, SubscribeExt, Subscription,
};

// Re-export the data sources
pub use skyfeed_sources::{
    observe_current_time, observe_weather, ClockStream, Timestamp, WeatherReading, WeatherStream,
    CLOCK_TICK_INTERVAL, WEATHER_EMIT_INTERVAL, WEATHER_ROTATION,
};

// Re-export the cache layer
pub use skyfeed_cache::{
    CachedValueStore, DataFetcher, SimulatedFetcher, INITIAL_CACHE_TEXT, LOADING_MARKER,
    SIMULATED_FETCH_LATENCY,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        observe_current_time, observe_weather, CachedValueStore, DataFetcher, FeedItem,
        SimulatedFetcher, SkyfeedError, SubscribeExt, Subscription, WeatherReading,
    };
}
