// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SkyfeedError;

/// A stream item that can be either a value or an error.
///
/// This enum allows observers to naturally receive failures through the same
/// stream that carries values. Unlike Rx-style hot streams, skyfeed state
/// subjects treat errors as transient notifications: an error item does not
/// terminate the stream (see [`StateSubject`](crate::StateSubject)).
#[derive(Debug, Clone)]
pub enum FeedItem<T> {
    /// A successful value
    Value(T),
    /// A failure surfaced to observers
    Error(SkyfeedError),
}

impl<T: PartialEq> PartialEq for FeedItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FeedItem::Value(a), FeedItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T: Eq> Eq for FeedItem<T> {}

impl<T> FeedItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, FeedItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, FeedItem::Error(_))
    }

    /// Converts from `FeedItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            FeedItem::Value(v) => Some(v),
            FeedItem::Error(_) => None,
        }
    }

    /// Converts from `FeedItem<T>` to `Option<SkyfeedError>`, discarding values.
    pub fn err(self) -> Option<SkyfeedError> {
        match self {
            FeedItem::Value(_) => None,
            FeedItem::Error(e) => Some(e),
        }
    }

    /// Maps a `FeedItem<T>` to `FeedItem<U>` by applying a function to the
    /// contained value. Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> FeedItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FeedItem::Value(v) => FeedItem::Value(f(v)),
            FeedItem::Error(e) => FeedItem::Error(e),
        }
    }

    /// Maps a `FeedItem<T>` to `FeedItem<U>` by applying a function that can
    /// fail. Errors are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> FeedItem<U>
    where
        F: FnOnce(T) -> FeedItem<U>,
    {
        match self {
            FeedItem::Value(v) => f(v),
            FeedItem::Error(e) => FeedItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            FeedItem::Value(v) => v,
            FeedItem::Error(e) => {
                panic!("called `FeedItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained value, panicking with a custom message if it's
    /// an error.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the item is an `Error`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            FeedItem::Value(v) => v,
            FeedItem::Error(e) => panic!("{msg}: {e:?}"),
        }
    }
}

impl<T> From<Result<T, SkyfeedError>> for FeedItem<T> {
    fn from(result: Result<T, SkyfeedError>) -> Self {
        match result {
            Ok(v) => FeedItem::Value(v),
            Err(e) => FeedItem::Error(e),
        }
    }
}

impl<T> From<FeedItem<T>> for Result<T, SkyfeedError> {
    fn from(item: FeedItem<T>) -> Self {
        match item {
            FeedItem::Value(v) => Ok(v),
            FeedItem::Error(e) => Err(e),
        }
    }
}
