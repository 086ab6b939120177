//! Bounded sequential retry with failure-dependent backoff.

use std::thread;
use std::time::Duration;

use log::{info, warn};
use playscout_core::{FetchError, FetchFailure};

/// Attempts made when no policy is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

const STATUS_STEP_SECS: u64 = 10;
const TIMEOUT_STEP_SECS: u64 = 15;
const OTHER_DELAY_SECS: u64 = 10;

/// Failure classes that select a backoff schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-200 HTTP status.
    HttpStatus,
    /// Per-attempt timeout elapsed.
    Timeout,
    /// Connection or decoding failure.
    Other,
}

impl FailureKind {
    /// Classify a transport failure.
    #[must_use]
    pub const fn of(failure: &FetchFailure) -> Self {
        match failure {
            FetchFailure::HttpStatus { .. } => Self::HttpStatus,
            FetchFailure::Timeout { .. } => Self::Timeout,
            FetchFailure::Network { .. } | FetchFailure::Decode { .. } => Self::Other,
        }
    }
}

/// Wait before the attempt following the zero-based `attempt_index`.
///
/// Status failures back off linearly in steps of 10 seconds, timeouts in
/// steps of 15 seconds, and anything else waits a flat 10 seconds.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use playscout_data::overpass::{FailureKind, backoff_delay};
///
/// assert_eq!(backoff_delay(FailureKind::HttpStatus, 1), Duration::from_secs(20));
/// assert_eq!(backoff_delay(FailureKind::Timeout, 0), Duration::from_secs(15));
/// assert_eq!(backoff_delay(FailureKind::Other, 5), Duration::from_secs(10));
/// ```
#[must_use]
pub fn backoff_delay(kind: FailureKind, attempt_index: u32) -> Duration {
    let step = u64::from(attempt_index).saturating_add(1);
    let secs = match kind {
        FailureKind::HttpStatus => step.saturating_mul(STATUS_STEP_SECS),
        FailureKind::Timeout => step.saturating_mul(TIMEOUT_STEP_SECS),
        FailureKind::Other => OTHER_DELAY_SECS,
    };
    Duration::from_secs(secs)
}

/// How many attempts to make before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// Policy allowing `max_attempts` attempts; zero is raised to one.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Total attempts permitted.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before retrying after `failure` on `attempt_index`, or `None`
    /// when that was the final attempt.
    #[must_use]
    pub fn delay_after(&self, failure: &FetchFailure, attempt_index: u32) -> Option<Duration> {
        let remaining = attempt_index.saturating_add(1) < self.max_attempts;
        remaining.then(|| backoff_delay(FailureKind::of(failure), attempt_index))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Blocks the caller between attempts.
pub trait Sleeper {
    /// Pause for `duration`.
    fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Result of one attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome<T> {
    /// The attempt produced a value; stop retrying.
    Success(T),
    /// The attempt failed; retry if the policy allows.
    Failure(FetchFailure),
}

impl<T> From<Result<T, FetchFailure>> for AttemptOutcome<T> {
    fn from(result: Result<T, FetchFailure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

/// Run `attempt` until it succeeds or the policy is exhausted.
///
/// `attempt` receives the zero-based attempt index. Between failures the
/// loop sleeps for the backoff chosen by [`RetryPolicy::delay_after`]; it
/// never sleeps after the final attempt.
///
/// # Errors
///
/// Returns [`FetchError::Exhausted`] with the last failure when every
/// attempt failed.
pub fn retry_with_backoff<T, S, F>(
    policy: RetryPolicy,
    sleeper: &S,
    mut attempt: F,
) -> Result<T, FetchError>
where
    S: Sleeper + ?Sized,
    F: FnMut(u32) -> AttemptOutcome<T>,
{
    let mut attempt_index = 0;
    loop {
        let failure = match attempt(attempt_index) {
            AttemptOutcome::Success(value) => return Ok(value),
            AttemptOutcome::Failure(failure) => failure,
        };
        warn!("attempt {} failed: {failure}", attempt_index + 1);
        let Some(delay) = policy.delay_after(&failure, attempt_index) else {
            warn!("giving up after {} attempt(s)", attempt_index + 1);
            return Err(FetchError::Exhausted {
                attempts: attempt_index + 1,
                last_failure: failure,
            });
        };
        info!("waiting {}s before retrying", delay.as_secs());
        sleeper.sleep(delay);
        attempt_index += 1;
    }
}
