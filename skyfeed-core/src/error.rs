// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the skyfeed data-source crates.
//!
//! This module defines a root [`SkyfeedError`] type with specific variants for
//! the failure modes of the workspace: fetch failures, stream processing
//! failures, errors raised by subscriber callbacks and subject lifecycle
//! errors.

use crate::subject_error::SubjectError;

/// Root error type for all skyfeed operations.
#[derive(Debug, thiserror::Error)]
pub enum SkyfeedError {
    /// A slow fetch (the network/disk analog behind a cache refresh) failed.
    ///
    /// When a refresh fails with this error the cache is left at its last
    /// good value; see `CachedValueStore::refresh` in `skyfeed-cache`.
    #[error("fetch failed: {context}")]
    FetchFailed {
        /// Description of what went wrong during the fetch
        context: String,
    },

    /// Stream processing encountered an error.
    ///
    /// General error for stream operations that don't fit other categories.
    #[error("stream processing error: {context}")]
    StreamProcessing {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Error raised by a subscriber callback.
    ///
    /// Wraps errors produced by user-provided handlers so they can be
    /// propagated through the skyfeed error system.
    #[error("subscriber error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Multiple subscriber errors occurred.
    ///
    /// When a subscription runs without an error callback, handler failures
    /// are collected and aggregated into this variant.
    #[error("multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<SkyfeedError>,
    },

    /// A subject lifecycle error, e.g. writing to a closed subject.
    #[error(transparent)]
    Subject(#[from] SubjectError),
}

impl SkyfeedError {
    /// Create a fetch failure with the given context.
    pub fn fetch_failed(context: impl Into<String>) -> Self {
        Self::FetchFailed {
            context: context.into(),
        }
    }

    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessing {
            context: context.into(),
        }
    }

    /// Wrap a subscriber error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Aggregate multiple subscriber errors into a `MultipleErrors` variant.
    ///
    /// Used by subscriptions that run without an error callback, so that
    /// collected handler failures can be surfaced as a single error on
    /// completion.
    pub fn from_user_errors<E>(errors: Vec<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors
            .into_iter()
            .map(|e| Self::UserError(Box::new(e)))
            .collect();

        Self::MultipleErrors { count, errors }
    }
}

/// Specialized Result type for skyfeed operations.
pub type Result<T> = std::result::Result<T, SkyfeedError>;

impl Clone for SkyfeedError {
    fn clone(&self) -> Self {
        match self {
            Self::FetchFailed { context } => Self::FetchFailed {
                context: context.clone(),
            },
            Self::StreamProcessing { context } => Self::StreamProcessing {
                context: context.clone(),
            },
            // The boxed error cannot be cloned, so degrade to its message
            Self::UserError(e) => Self::StreamProcessing {
                context: format!("subscriber error: {e}"),
            },
            Self::MultipleErrors { count, errors } => Self::MultipleErrors {
                count: *count,
                errors: errors.clone(),
            },
            Self::Subject(e) => Self::Subject(e.clone()),
        }
    }
}
