// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Refreshable observable cached value for skyfeed.
//!
//! [`CachedValueStore`] holds a single observable string and refreshes it on
//! demand through an injected [`DataFetcher`]. Every refresh is observed as
//! exactly two ordered writes: the loading marker, then the fetched result.
//! [`SimulatedFetcher`] stands in for the network/disk analog.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fetcher;
pub mod store;

pub use self::fetcher::{DataFetcher, SimulatedFetcher, SIMULATED_FETCH_LATENCY};
pub use self::store::{CachedValueStore, INITIAL_CACHE_TEXT, LOADING_MARKER};
