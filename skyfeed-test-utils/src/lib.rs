// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the skyfeed workspace.
//!
//! This crate provides stream assertion helpers and scripted fetchers for
//! testing observable stores and timer-driven sources. It is designed for use
//! in development and testing only, not for production code.

pub mod helpers;
pub mod scripted_fetcher;

pub use self::helpers::{assert_no_element_emitted, collect_n, expect_next_value, next_with_timeout};
pub use self::scripted_fetcher::ScriptedFetcher;
