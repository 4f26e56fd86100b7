use std::fmt;
use std::time::Duration;

use chrono::{Local, NaiveTime};

/// Local wall-clock time of day, rendered as `HH:MM:SS.mmm`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Timestamp(NaiveTime);

impl Timestamp {
    /// Captures the current local time.
    #[inline]
    pub fn now() -> Self {
        Self(Local::now().time())
    }

    #[inline]
    pub const fn from_time(time: NaiveTime) -> Self {
        Self(time)
    }

    #[inline]
    pub fn time(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // %.3f truncates to milliseconds and includes the leading dot.
        write!(f, "{}", self.0.format("%H:%M:%S%.3f"))
    }
}

/// Duration in milliseconds with microsecond precision.
#[inline]
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_micros() as f64 / 1000.0
}
