use std::time::Duration;

use crate::waiter::Waiter;

/// Each retry pauses for the same fixed duration.
///
/// A zero duration disables the pause entirely, so a `Fixed` built from
/// zero behaves like [`NoDelay`](crate::waiter::NoDelay) while staying
/// usable where a `Fixed` is expected.
#[derive(Debug)]
pub struct Fixed {
    duration: Duration,
}

impl Fixed {
    /// Create a new [`Fixed`] using the given duration in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Fixed {
            duration: Duration::from_millis(millis),
        }
    }
}

impl Waiter for Fixed {
    fn next_delay(&mut self) -> Duration {
        self.duration
    }
}

impl From<Duration> for Fixed {
    fn from(duration: Duration) -> Self {
        Self { duration }
    }
}
