// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scripted fetcher for exercising cache refresh paths, including failures
//! the simulated production fetcher can never produce.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use skyfeed_cache::DataFetcher;
use skyfeed_core::{Result, SkyfeedError};

/// A [`DataFetcher`] that replays a scripted sequence of responses.
///
/// Each call to `fetch` pops the next scripted response. Once the script is
/// exhausted, further calls fail with a `FetchFailed` error.
///
/// # Example
///
/// ```rust
/// use skyfeed_test_utils::ScriptedFetcher;
/// use skyfeed_core::SkyfeedError;
///
/// let fetcher = ScriptedFetcher::new([
///     Ok("first".to_string()),
///     Err(SkyfeedError::fetch_failed("connection reset")),
/// ]);
/// ```
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<String>>>,
}

impl ScriptedFetcher {
    /// Creates a fetcher replaying the given responses in order.
    pub fn new(responses: impl IntoIterator<Item = Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

#[async_trait]
impl DataFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<String> {
        let next = self.responses.lock().pop_front();
        match next {
            Some(response) => response,
            None => Err(SkyfeedError::fetch_failed("fetch script exhausted")),
        }
    }
}
