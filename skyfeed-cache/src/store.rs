// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The cached value store.

use std::sync::Arc;

use skyfeed_core::{Result, StateSubject, SubjectError, SubjectStream};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::fetcher::DataFetcher;

/// Value held by the store before the first refresh.
pub const INITIAL_CACHE_TEXT: &str = "This is old data";

/// Transient marker written while a refresh is fetching, so in-progress state
/// is observable.
pub const LOADING_MARKER: &str = "Fetching new data...";

/// A single observable cached string, refreshable through an injected
/// [`DataFetcher`].
///
/// The store always holds exactly one value, readable by any number of
/// observers. Writes happen only through [`refresh`](Self::refresh) and always
/// in the sequence {[`LOADING_MARKER`], fetched result}; concurrent refresh
/// calls are queued so their write pairs never interleave.
///
/// # Example
///
/// ```rust
/// use skyfeed_cache::{CachedValueStore, SimulatedFetcher, INITIAL_CACHE_TEXT};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = CachedValueStore::new(Arc::new(SimulatedFetcher::new()));
/// assert_eq!(store.current(), INITIAL_CACHE_TEXT);
///
/// store.refresh().await.unwrap();
/// assert_eq!(store.current(), "New data from request #1");
/// # }
/// ```
pub struct CachedValueStore {
    subject: StateSubject<String>,
    fetcher: Arc<dyn DataFetcher>,
    // Queues concurrent refresh calls so the two-step write sequences of
    // distinct refreshes never interleave.
    refresh_gate: Mutex<()>,
}

impl CachedValueStore {
    /// Creates a store holding [`INITIAL_CACHE_TEXT`], refreshing through the
    /// given fetcher.
    #[must_use]
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Self {
        Self {
            subject: StateSubject::new(INITIAL_CACHE_TEXT.to_string()),
            fetcher,
            refresh_gate: Mutex::new(()),
        }
    }

    /// Observe the cached value: the current value first, then every write in
    /// write order.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the store has been torn down.
    pub fn observe(&self) -> std::result::Result<SubjectStream<String>, SubjectError> {
        self.subject.subscribe()
    }

    /// Returns a snapshot of the current cached value.
    #[must_use]
    pub fn current(&self) -> String {
        self.subject.current()
    }

    /// Refresh the cached value through the fetcher.
    ///
    /// Ordering contract, visible to every observer:
    /// 1. [`LOADING_MARKER`] is written before the fetch starts;
    /// 2. on success the fetched result is written;
    /// 3. on failure the pre-refresh value is restored, the error is
    ///    broadcast to observers and returned.
    ///
    /// Concurrent calls queue behind each other; a refresh's two writes are
    /// always observed back to back. Cancelling a refresh mid-flight is not
    /// supported.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures and subject lifecycle errors.
    pub async fn refresh(&self) -> Result<()> {
        let _guard = self.refresh_gate.lock().await;

        let previous = self.subject.current();
        debug!("cache refresh started");
        self.subject.set(LOADING_MARKER.to_string())?;

        match self.fetcher.fetch().await {
            Ok(value) => {
                debug!(%value, "cache refresh completed");
                self.subject.set(value)?;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "cache refresh failed, keeping last good value");
                self.subject.error(err.clone())?;
                self.subject.set(previous)?;
                Err(err)
            }
        }
    }

    /// Tears the store down, completing all observer streams.
    pub fn close(&self) {
        self.subject.close();
    }
}
