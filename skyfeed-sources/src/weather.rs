// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Weather stream producer.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use pin_project::pin_project;
use tokio::time::{sleep, Sleep};

/// Interval between weather emissions.
pub const WEATHER_EMIT_INTERVAL: Duration = Duration::from_secs(2);

/// One reading out of the fixed, ordered set of weather labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherReading {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Snowy => "Snowy",
        };
        write!(f, "{label}")
    }
}

/// The fixed rotation the weather stream cycles through, in order.
pub const WEATHER_ROTATION: [WeatherReading; 5] = [
    WeatherReading::Sunny,
    WeatherReading::Cloudy,
    WeatherReading::Rainy,
    WeatherReading::Stormy,
    WeatherReading::Snowy,
];

/// Returns an infinite stream of [`WeatherReading`]s rotating through
/// [`WEATHER_ROTATION`], one per [`WEATHER_EMIT_INTERVAL`].
///
/// The rotation counter starts at 0 and is incremented before each index, so
/// the first emission is `Cloudy` (index 1) and `Sunny` only appears once the
/// rotation wraps around.
///
/// Each call returns an independent stream with its own counter and timer.
/// Dropping the stream releases the timer.
///
/// # Example
///
/// ```rust
/// use skyfeed_sources::{observe_weather, WeatherReading};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut weather = Box::pin(observe_weather());
///
/// assert_eq!(weather.next().await, Some(WeatherReading::Cloudy));
/// # }
/// ```
#[must_use]
pub fn observe_weather() -> WeatherStream {
    WeatherStream {
        counter: 0,
        sleep: None,
    }
}

/// Infinite stream of [`WeatherReading`]s. See [`observe_weather`].
#[pin_project]
#[derive(Debug)]
pub struct WeatherStream {
    counter: usize,
    #[pin]
    sleep: Option<Sleep>,
}

impl Stream for WeatherStream {
    type Item = WeatherReading;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if let Some(pending) = this.sleep.as_mut().as_pin_mut() {
            match pending.poll(cx) {
                Poll::Ready(()) => {}
                Poll::Pending => return Poll::Pending,
            }
        }

        // Pre-increment before indexing: index 0 is skipped on the first lap.
        *this.counter = this.counter.wrapping_add(1);
        let reading = WEATHER_ROTATION[*this.counter % WEATHER_ROTATION.len()];

        this.sleep.set(Some(sleep(WEATHER_EMIT_INTERVAL)));
        Poll::Ready(Some(reading))
    }
}
