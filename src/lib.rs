//! # Attempt
//!
//! A small retry library that keeps calling a fallible operation until it
//! succeeds or an attempt budget runs out.
//!
//! `attempt` hands the operation its current attempt number (starting at 1)
//! and, after each failed attempt, asks a [`Waiter`](waiter::Waiter) how
//! long to pause before the next one. It supports both synchronous and
//! asynchronous execution models with various delay policies for retries.
//!
//! ## Features
//!
//! - Synchronous retries through the `sync` module
//! - Asynchronous retries through the `unsync` module
//! - Customizable delay policies (doubling with a ceiling, fixed interval,
//!   no delay)
//! - Bounded runs that report how many attempts were spent, and unbounded
//!   runs that keep going until success
//!
//! ## Usage Examples
//!
//! ### Synchronous Usage
//!
//! ```rust
//! use attempt::sync::retry;
//! use attempt::waiter::Doubling;
//!
//! // Retry an operation, doubling the pause from 100ms up to 5s
//! let result = retry(3, Doubling::from_millis(100, 5_000), |_attempt| {
//!     // Your fallible operation here
//!     if some_condition() {
//!         Ok("success")
//!     } else {
//!         Err("failure")
//!     }
//! });
//!
//! # fn some_condition() -> bool { true }
//! ```
//!
//! ### Asynchronous Usage
//!
//! ```rust
//! use attempt::unsync::retry;
//! use attempt::waiter::Fixed;
//!
//! async fn example() -> Result<(u64, &'static str), attempt::RetryError<&'static str>> {
//!     retry(5, Fixed::from_millis(100), |attempt| async move {
//!         if attempt < 2 {
//!             Err("Error")
//!         } else {
//!             Ok("Success")
//!         }
//!     })
//!     .await
//! }
//! ```
pub mod error;
pub mod sync;
pub mod unsync;
pub mod waiter;

pub use error::RetryError;
