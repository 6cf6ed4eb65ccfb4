//! Error type returned by the bounded retry drivers.
use thiserror::Error;

/// The ways a bounded retry run can fail.
///
/// The type is generic over `E`, the error type of the operation being
/// retried. The driver never inspects or rewrites `E`; on exhaustion the
/// last error the operation produced is handed back verbatim.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RetryError<E> {
    /// A bounded run was asked for zero attempts. The operation is never
    /// invoked in this case.
    #[error("the number of attempts must be greater than zero")]
    ZeroAttempts,

    /// Every attempt failed and the budget ran out.
    #[error("still failing after {attempts} attempts: {error}")]
    Exhausted {
        /// How many times the operation was invoked.
        attempts: u64,
        /// The error from the final attempt, unmodified.
        error: E,
    },
}
