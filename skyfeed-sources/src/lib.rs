// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer-driven data sources for skyfeed.
//!
//! Two producers live here, both lazy pull-based [`Stream`](futures::Stream)s
//! with one timer per subscription:
//!
//! - [`observe_current_time`] emits the current wall-clock timestamp once per
//!   [`CLOCK_TICK_INTERVAL`].
//! - [`observe_weather`] rotates through [`WEATHER_ROTATION`] once per
//!   [`WEATHER_EMIT_INTERVAL`].
//!
//! Production is driven entirely by the subscriber's polls; dropping a stream
//! releases its timer and stops production.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod clock;
pub mod weather;

pub use self::clock::{observe_current_time, ClockStream, Timestamp, CLOCK_TICK_INTERVAL};
pub use self::weather::{
    observe_weather, WeatherReading, WeatherStream, WEATHER_EMIT_INTERVAL, WEATHER_ROTATION,
};
