use std::time::{Duration, SystemTime};

/// `Retry-After` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RetryAfter {
    /// Absolute date after which to retry.
    Date(SystemTime),
    /// Delay after the response was received.
    Delay(Duration),
}

impl RetryAfter {
    /// Resolve into an absolute date, relative to `now` for a delay.
    pub fn at(&self, now: SystemTime) -> SystemTime {
        match self {
            Self::Date(date) => *date,
            Self::Delay(delay) => now + *delay,
        }
    }
}

impl From<SystemTime> for RetryAfter {
    #[inline]
    fn from(value: SystemTime) -> Self {
        Self::Date(value)
    }
}

impl From<Duration> for RetryAfter {
    #[inline]
    fn from(value: Duration) -> Self {
        Self::Delay(value)
    }
}
