//! Delay policies that pace the gap between retry attempts.
use std::thread::sleep;
use std::time::Duration;

/// A no-delay policy whose every pause is zero.
pub mod nodelay;
pub use nodelay::NoDelay;

/// A fixed-delay policy that pauses for the same duration every time.
pub mod fixed;
pub use fixed::Fixed;

/// A doubling-delay policy that doubles the pause up to a ceiling.
pub mod doubling;
pub use doubling::Doubling;

/// A source of delay between calls to the operation being retried.
///
/// A waiter carries mutable pacing state across calls, so each retry run
/// must own its own instance; the drivers take the waiter by value to make
/// sharing one between concurrent runs a deliberate act.
pub trait Waiter {
    /// Advance the policy and return the duration of the upcoming pause.
    fn next_delay(&mut self) -> Duration;

    /// Block the calling thread for the duration of [`next_delay`].
    ///
    /// A zero duration returns immediately without touching the sleep
    /// primitive. Async drivers pause on [`next_delay`] directly instead
    /// of calling this.
    ///
    /// [`next_delay`]: Waiter::next_delay
    fn wait(&mut self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            sleep(delay);
        }
    }
}
