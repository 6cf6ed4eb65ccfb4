//! Asynchronous retry drivers that suspend the task between attempts.
use std::future::Future;

use tokio::time::sleep;
use tracing::trace;

use crate::error::RetryError;
use crate::waiter::Waiter;

/// Execute an asynchronous operation up to `count` times, pausing between
/// failed attempts.
///
/// The asynchronous twin of [`retry`](crate::sync::retry): the operation is
/// invoked with the attempt number starting at 1, success at attempt `k`
/// returns `Ok((k, value))`, and running out of attempts returns the error
/// from the final attempt untouched. The pause between attempts suspends
/// the task instead of blocking the thread.
///
/// # Examples
///
/// ```
/// use attempt::unsync::retry;
/// use attempt::waiter::Fixed;
///
/// async fn fetch_data() -> Result<String, String> {
///     let result = retry(3, Fixed::from_millis(100), |attempt| async move {
///         // Your async operation that may fail
///         let response = make_api_request().await;
///         if response.is_success() {
///             Ok(response.data.to_string())
///         } else {
///             Err(format!("attempt {attempt}: {}", response.error))
///         }
///     })
///     .await;
///
///     match result {
///         Ok((_, data)) => Ok(data),
///         Err(e) => Err(e.to_string()),
///     }
/// }
/// # async fn make_api_request() -> Response { Response { is_success: true, data: "data", error: "error" } }
/// # struct Response { is_success: bool, data: &'static str, error: &'static str }
/// # impl Response { fn is_success(&self) -> bool { self.is_success } }
/// ```
pub async fn retry<W, OP, F, R, O, E>(
    count: u64,
    waiter: W,
    operation: OP,
) -> Result<(u64, O), RetryError<E>>
where
    W: Waiter,
    OP: FnMut(u64) -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    if count == 0 {
        return Err(RetryError::ZeroAttempts);
    }

    run(Some(count), waiter, operation)
        .await
        .map_err(|(attempts, error)| RetryError::Exhausted { attempts, error })
}

/// Execute an asynchronous operation until it succeeds, pausing between
/// failed attempts.
///
/// Identical to [`retry`] except that no attempt budget applies, so the run
/// only ever ends in success. Note that the attempt number passed to the
/// operation can overflow and silently wrap to zero.
///
/// # Examples
///
/// ```
/// use attempt::unsync::retry_forever;
/// use attempt::waiter::NoDelay;
///
/// async fn example() {
///     let (attempts, value) = retry_forever(NoDelay, |attempt| async move {
///         if attempt < 4 { Err("try again") } else { Ok(attempt * 10) }
///     })
///     .await;
///
///     assert_eq!(attempts, 4);
///     assert_eq!(value, 40);
/// }
/// ```
pub async fn retry_forever<W, OP, F, R, O, E>(waiter: W, operation: OP) -> (u64, O)
where
    W: Waiter,
    OP: FnMut(u64) -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    match run(None, waiter, operation).await {
        Ok(success) => success,
        Err(_) => unreachable!("an unbounded run only ever stops on success"),
    }
}

/// Shared attempt loop. A `limit` of `None` means run until success.
async fn run<W, OP, F, R, O, E>(
    limit: Option<u64>,
    mut waiter: W,
    mut operation: OP,
) -> Result<(u64, O), (u64, E)>
where
    W: Waiter,
    OP: FnMut(u64) -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    let mut attempt: u64 = 0;

    loop {
        attempt = attempt.wrapping_add(1);

        match operation(attempt).await.into() {
            Ok(value) => return Ok((attempt, value)),
            Err(error) => {
                if limit.is_some_and(|limit| attempt >= limit) {
                    return Err((attempt, error));
                }

                trace!(attempt, "attempt failed, waiting before the next try");
                let delay = waiter.next_delay();
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
        }
    }
}
