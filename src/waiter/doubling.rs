use std::time::Duration;

use crate::waiter::Waiter;

/// Each retry doubles the pause since the last one, up to a ceiling.
///
/// The pauses run first-delay, 2x, 4x, ... until the doubled value passes
/// the maximum, after which every pause is exactly the maximum. The state
/// initializes itself on first use: a zero first delay falls back to
/// [`Doubling::DEFAULT_FIRST`] and a zero maximum to
/// [`Doubling::DEFAULT_MAX`].
///
/// The stored delay is clamped to the maximum at the start of each call,
/// not right after doubling, so between calls it may sit above the
/// maximum; the value actually paused on never does.
#[derive(Debug)]
pub struct Doubling {
    first: Duration,
    max: Duration,
    current: Option<Duration>,
}

impl Doubling {
    /// First delay used when a zero first delay is given.
    pub const DEFAULT_FIRST: Duration = Duration::from_secs(1);
    /// Maximum delay used when a zero maximum is given.
    pub const DEFAULT_MAX: Duration = Duration::from_secs(5 * 60);

    /// Create a new [`Doubling`] with the given first and maximum delays.
    pub fn new(first: Duration, max: Duration) -> Self {
        Doubling {
            first,
            max,
            current: None,
        }
    }

    /// Create a new [`Doubling`] using millisecond first and maximum delays.
    pub fn from_millis(first: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(first), Duration::from_millis(max))
    }
}

impl Waiter for Doubling {
    fn next_delay(&mut self) -> Duration {
        let mut delay = match self.current {
            Some(delay) => delay,
            None => {
                if self.first.is_zero() {
                    self.first = Self::DEFAULT_FIRST;
                }
                if self.max.is_zero() {
                    self.max = Self::DEFAULT_MAX;
                }
                self.first
            }
        };

        if delay > self.max {
            delay = self.max;
        }
        self.current = Some(delay.saturating_mul(2));

        delay
    }
}

#[test]
fn doubling_clamps_at_the_maximum() {
    let mut waiter = Doubling::from_millis(1, 5);
    assert_eq!(waiter.next_delay(), Duration::from_millis(1));
    assert_eq!(waiter.next_delay(), Duration::from_millis(2));
    assert_eq!(waiter.next_delay(), Duration::from_millis(4));
    assert_eq!(waiter.next_delay(), Duration::from_millis(5));
    assert_eq!(waiter.next_delay(), Duration::from_millis(5));
    assert_eq!(waiter.next_delay(), Duration::from_millis(5));
}

#[test]
fn doubling_first_delay_above_the_maximum() {
    let mut waiter = Doubling::from_millis(8, 5);
    assert_eq!(waiter.next_delay(), Duration::from_millis(5));
    assert_eq!(waiter.next_delay(), Duration::from_millis(5));
}

#[test]
fn doubling_defaults_for_zero_values() {
    let mut waiter = Doubling::from_millis(0, 0);
    assert_eq!(waiter.next_delay(), Duration::from_secs(1));
    assert_eq!(waiter.next_delay(), Duration::from_secs(2));
    assert_eq!(waiter.next_delay(), Duration::from_secs(4));
}

#[test]
fn doubling_saturates_instead_of_overflowing() {
    let mut waiter = Doubling::new(Duration::MAX, Duration::MAX);
    assert_eq!(waiter.next_delay(), Duration::MAX);
    assert_eq!(waiter.next_delay(), Duration::MAX);
}
