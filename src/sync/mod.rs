//! Synchronous retry drivers that block the calling thread between attempts.
use tracing::trace;

use crate::error::RetryError;
use crate::waiter::Waiter;

/// Execute an operation up to `count` times, pausing between failed attempts.
///
/// The operation is invoked with the current attempt number, starting at 1.
/// As soon as it succeeds the driver stops and returns the attempt number it
/// succeeded at together with the produced value. After every failed attempt
/// that is not the last one, the waiter pauses the thread once; when the
/// budget runs out, the error from the final attempt is returned untouched.
///
/// # Parameters
///
/// * `count` - The maximum number of attempts. Must be greater than zero;
///   a zero count fails with [`RetryError::ZeroAttempts`] without invoking
///   the operation.
/// * `waiter` - The delay policy that paces the attempts. Each run owns its
///   waiter, so pass a fresh one per run.
/// * `operation` - The operation to execute, typically a closure taking the
///   attempt number and returning a value convertible to `Result`.
///
/// # Returns
///
/// `Ok((attempts, value))` once the operation succeeds, or
/// `Err(RetryError::Exhausted { attempts, error })` carrying the last
/// observed error when all attempts fail.
///
/// # Examples
///
/// ```
/// use attempt::sync::retry;
/// use attempt::waiter::Fixed;
///
/// // Try to get data from a potentially failing API
/// let result = retry(3, Fixed::from_millis(100), |_attempt| {
///     let response = make_api_request();
///     if response.is_success() {
///         Ok(response.data)
///     } else {
///         Err(response.error)
///     }
/// });
///
/// match result {
///     Ok((attempts, data)) => println!("Got data on attempt {attempts}: {data:?}"),
///     Err(e) => println!("Failed after multiple retries: {e}"),
/// }
/// # fn make_api_request() -> Response { Response { is_success: true, data: "data", error: "error" } }
/// # struct Response { is_success: bool, data: &'static str, error: &'static str }
/// # impl Response { fn is_success(&self) -> bool { self.is_success } }
/// ```
///
/// You can use different delay policies:
///
/// ```
/// use attempt::sync::retry;
/// use attempt::waiter::{Doubling, NoDelay};
///
/// // Back off from 50ms, doubling up to a 1s ceiling
/// let result_doubling = retry(5, Doubling::from_millis(50, 1_000), |attempt| {
///     if attempt < 3 { Err("not yet") } else { Ok("success") }
/// });
///
/// // Retry immediately without pausing
/// let result_nodelay = retry(3, NoDelay, |_| Ok::<_, &str>("success"));
/// ```
pub fn retry<W, OP, R, O, E>(count: u64, waiter: W, operation: OP) -> Result<(u64, O), RetryError<E>>
where
    W: Waiter,
    OP: FnMut(u64) -> R,
    R: Into<Result<O, E>>,
{
    if count == 0 {
        return Err(RetryError::ZeroAttempts);
    }

    run(Some(count), waiter, operation)
        .map_err(|(attempts, error)| RetryError::Exhausted { attempts, error })
}

/// Execute an operation until it succeeds, pausing between failed attempts.
///
/// Identical to [`retry`] except that no attempt budget applies, so the run
/// only ever ends in success. Note that the attempt number passed to the
/// operation can overflow and silently wrap to zero.
///
/// # Examples
///
/// ```
/// use attempt::sync::retry_forever;
/// use attempt::waiter::NoDelay;
///
/// let (attempts, value) = retry_forever(NoDelay, |attempt| {
///     if attempt < 4 { Err("try again") } else { Ok(attempt * 10) }
/// });
///
/// assert_eq!(attempts, 4);
/// assert_eq!(value, 40);
/// ```
pub fn retry_forever<W, OP, R, O, E>(waiter: W, operation: OP) -> (u64, O)
where
    W: Waiter,
    OP: FnMut(u64) -> R,
    R: Into<Result<O, E>>,
{
    match run(None, waiter, operation) {
        Ok(success) => success,
        Err(_) => unreachable!("an unbounded run only ever stops on success"),
    }
}

/// Shared attempt loop. A `limit` of `None` means run until success.
fn run<W, OP, R, O, E>(
    limit: Option<u64>,
    mut waiter: W,
    mut operation: OP,
) -> Result<(u64, O), (u64, E)>
where
    W: Waiter,
    OP: FnMut(u64) -> R,
    R: Into<Result<O, E>>,
{
    let mut attempt: u64 = 0;

    loop {
        attempt = attempt.wrapping_add(1);

        match operation(attempt).into() {
            Ok(value) => return Ok((attempt, value)),
            Err(error) => {
                if limit.is_some_and(|limit| attempt >= limit) {
                    return Err((attempt, error));
                }

                trace!(attempt, "attempt failed, waiting before the next try");
                waiter.wait();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use super::{retry, retry_forever};
    use crate::error::RetryError;
    use crate::waiter::{Doubling, Fixed, NoDelay, Waiter};

    /// Counts calls instead of pausing.
    struct CountingWaiter(Rc<Cell<u64>>);

    impl Waiter for CountingWaiter {
        fn next_delay(&mut self) -> Duration {
            self.0.set(self.0.get() + 1);
            Duration::ZERO
        }
    }

    fn fail_until(succeed_at: u64) -> impl FnMut(u64) -> Result<u64, &'static str> {
        move |attempt| {
            if attempt < succeed_at {
                Err("error")
            } else {
                Ok(attempt)
            }
        }
    }

    #[test]
    fn zero_attempts_is_a_configuration_error() {
        let calls = Rc::new(Cell::new(0u64));
        let calls_seen = calls.clone();

        let res = retry(0, NoDelay, move |_| {
            calls_seen.set(calls_seen.get() + 1);
            Ok::<_, &str>(())
        });

        assert_eq!(res, Err(RetryError::ZeroAttempts));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn succeeds_on_the_first_attempt() {
        assert_eq!(retry(1, NoDelay, fail_until(1)), Ok((1, 1)));
    }

    #[test]
    fn succeeds_on_a_later_attempt() {
        assert_eq!(retry(9, NoDelay, fail_until(3)), Ok((3, 3)));
    }

    #[test]
    fn fails_with_the_error_from_the_final_attempt() {
        let res = retry(2, NoDelay, |attempt| -> Result<(), String> {
            Err(format!("error from attempt {attempt}"))
        });

        assert_eq!(
            res,
            Err(RetryError::Exhausted {
                attempts: 2,
                error: "error from attempt 2".to_string(),
            })
        );
    }

    #[test]
    fn waits_once_per_failed_attempt() {
        let waits = Rc::new(Cell::new(0));

        let res = retry(10, CountingWaiter(waits.clone()), fail_until(4));

        assert_eq!(res, Ok((4, 4)));
        assert_eq!(waits.get(), 3);
    }

    #[test]
    fn never_waits_when_the_budget_is_a_single_attempt() {
        let waits = Rc::new(Cell::new(0));

        let res = retry(1, CountingWaiter(waits.clone()), |_| -> Result<(), &'static str> {
            Err("error")
        });

        assert_eq!(
            res,
            Err(RetryError::Exhausted {
                attempts: 1,
                error: "error",
            })
        );
        assert_eq!(waits.get(), 0);
    }

    #[test]
    fn forever_runs_until_success() {
        assert_eq!(retry_forever(NoDelay, fail_until(5)), (5, 5));
    }

    #[test]
    fn fixed_delay_paces_the_attempts() {
        let start = Instant::now();

        let res = retry(4, Fixed::from_millis(10), fail_until(4));

        assert_eq!(res, Ok((4, 4)));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn zero_fixed_delay_does_not_sleep() {
        let start = Instant::now();

        let res = retry(100, Fixed::from_millis(0), fail_until(100));

        assert_eq!(res, Ok((100, 100)));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn doubling_delay_pauses_add_up() {
        let start = Instant::now();

        let res = retry(7, Doubling::from_millis(1, 5), |_| -> Result<(), &'static str> {
            Err("error")
        });

        assert_eq!(
            res,
            Err(RetryError::Exhausted {
                attempts: 7,
                error: "error",
            })
        );
        // 1 + 2 + 4 + 5 + 5 + 5 ms across the six pauses
        assert!(start.elapsed() >= Duration::from_millis(22));
    }
}
