//! Retry policy for coverage fetches.

use std::time::Duration;

/// How failed coverage requests are retried.
///
/// The default retries forever with a fixed 60 second delay, treating
/// every fetch failure as transient. Callers can bound the attempt count
/// or switch to a backoff schedule; tests substitute zero-delay policies.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the delay once backoff is applied.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each failure; 1 keeps the
    /// delay fixed.
    pub backoff_multiplier: u32,
    /// Total attempts before giving up; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(60),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 1,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Retry forever with the same delay after every failure.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            max_delay: delay,
            backoff_multiplier: 1,
            max_attempts: None,
        }
    }

    /// Double the delay after each failure, up to `max`.
    pub fn backoff(initial: Duration, max: Duration) -> Self {
        Self {
            initial_delay: initial,
            max_delay: max,
            backoff_multiplier: 2,
            max_attempts: None,
        }
    }

    /// Stop after `attempts` total attempts instead of retrying forever.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// The delay to use after the current one.
    pub fn next_delay(&self, current: Duration) -> Duration {
        std::cmp::min(
            current.saturating_mul(self.backoff_multiplier),
            self.max_delay,
        )
    }
}
