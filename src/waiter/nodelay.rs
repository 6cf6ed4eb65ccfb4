use std::time::Duration;

use crate::waiter::Waiter;

/// Each retry happens immediately without any pause.
#[derive(Debug)]
pub struct NoDelay;

impl Waiter for NoDelay {
    fn next_delay(&mut self) -> Duration {
        Duration::default()
    }
}
