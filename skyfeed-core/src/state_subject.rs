// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable single-value cell for skyfeed data sources.
//!
//! A [`StateSubject`] always holds exactly one current value and broadcasts
//! every write to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Replay-1**: New subscribers receive the current value first, then all
//!   subsequent writes in write order.
//! - **Totally ordered writes**: All mutations go through one lock; every
//!   subscriber observes every write in the same order.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same state.
//! - **Non-terminal errors**: [`error`](StateSubject::error) notifies
//!   subscribers without closing the subject; the current value is retained.
//!
//! ## Example
//!
//! ```
//! use skyfeed_core::{FeedItem, StateSubject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = StateSubject::new("initial".to_string());
//!
//! let mut stream = subject.subscribe().unwrap();
//!
//! // The current value is replayed to the new subscriber
//! assert_eq!(
//!     stream.next().await,
//!     Some(FeedItem::Value("initial".to_string()))
//! );
//!
//! // Writes are broadcast to all subscribers
//! subject.set("updated".to_string()).unwrap();
//! assert_eq!(
//!     stream.next().await,
//!     Some(FeedItem::Value("updated".to_string()))
//! );
//! # }
//! ```

use std::pin::Pin;
use std::sync::Arc;

use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;

use crate::error::SkyfeedError;
use crate::feed_item::FeedItem;
use crate::start_with::start_with;
use crate::subject_error::SubjectError;

/// Boxed stream of [`FeedItem`]s handed out by [`StateSubject::subscribe`].
pub type SubjectStream<T> = Pin<Box<dyn Stream<Item = FeedItem<T>> + Send + 'static>>;

struct SubjectState<T> {
    current: T,
    closed: bool,
    senders: Vec<Sender<FeedItem<T>>>,
}

/// An observable cell holding one current value, broadcast to all subscribers.
///
/// `StateSubject` is the storage primitive behind refreshable caches: reads
/// happen through [`current`](Self::current) or by subscribing, writes happen
/// through [`set`](Self::set), and every subscriber sees the full write
/// sequence in order.
///
/// See the [module documentation](crate::state_subject) for examples.
pub struct StateSubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> StateSubject<T> {
    /// Creates a new subject holding `initial` as its current value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                current: initial,
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject.
    ///
    /// The returned stream yields the current value immediately, followed by
    /// every subsequent write in write order.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        // Snapshot and registration happen under the same lock, so the
        // subscriber cannot observe a gap between snapshot and stream.
        let snapshot = FeedItem::Value(state.current.clone());
        Ok(Box::pin(start_with(rx, vec![snapshot])))
    }

    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn current(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Store a new current value and broadcast it to all subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn set(&self, value: T) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state.current = value.clone();
        Self::broadcast(&mut state, FeedItem::Value(value));
        Ok(())
    }

    /// Broadcast an error to all subscribers.
    ///
    /// The current value is retained and the subject stays open: a state cell
    /// outlives transient failures, so subscribers keep receiving subsequent
    /// writes after an error item.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn error(&self, err: SkyfeedError) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        Self::broadcast(&mut state, FeedItem::Error(err));
        Ok(())
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing:
    /// - All existing subscribers will receive `None` on their next poll.
    /// - `set()` and `error()` will return `SubjectError::Closed`.
    /// - `subscribe()` will return `SubjectError::Closed`.
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: the count is updated lazily. Dropped subscribers are removed on
    /// the next write, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }

    fn broadcast(state: &mut SubjectState<T>, item: FeedItem<T>) {
        let mut next_senders = Vec::with_capacity(state.senders.len());

        for tx in state.senders.drain(..) {
            if tx.try_send(item.clone()).is_ok() {
                next_senders.push(tx);
            }
        }

        state.senders = next_senders;
    }
}

impl<T: Clone + Send + 'static> Clone for StateSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
