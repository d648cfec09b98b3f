// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod feed_item;
pub mod start_with;
pub mod state_subject;
pub mod subject_error;
pub mod subscribe;
pub mod subscription;

pub use self::error::{Result, SkyfeedError};
pub use self::feed_item::FeedItem;
pub use self::start_with::start_with;
pub use self::state_subject::{StateSubject, SubjectStream};
pub use self::subject_error::SubjectError;
pub use self::subscribe::SubscribeExt;
pub use self::subscription::Subscription;

pub use tokio_util::sync::CancellationToken;
