//! [`AttractionFetcher`] backed by an Overpass transport.

use log::info;
use playscout_core::{Attraction, AttractionFetcher, FetchError};

use super::retry::{RetryPolicy, Sleeper, ThreadSleeper, retry_with_backoff};
use super::{OverpassQuery, OverpassTransport, extract_attractions};

/// Fetches attractions from Overpass with bounded retry.
#[derive(Debug)]
pub struct OverpassFetcher<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: OverpassTransport> OverpassFetcher<T> {
    /// Fetcher using the default policy and real sleeps.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_sleeper(transport, ThreadSleeper)
    }
}

impl<T: OverpassTransport, S: Sleeper> OverpassFetcher<T, S> {
    /// Fetcher that waits through `sleeper` between attempts.
    #[must_use]
    pub fn with_sleeper(transport: T, sleeper: S) -> Self {
        Self {
            transport,
            sleeper,
            policy: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Retry policy in force.
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sleeper used between attempts.
    #[must_use]
    pub const fn sleeper(&self) -> &S {
        &self.sleeper
    }
}

impl<T: OverpassTransport, S: Sleeper> AttractionFetcher for OverpassFetcher<T, S> {
    fn fetch(&self, city: &str) -> Result<Vec<Attraction>, FetchError> {
        let query = OverpassQuery::kids_attractions(city);
        let max_attempts = self.policy.max_attempts();
        let response = retry_with_backoff(self.policy, &self.sleeper, |attempt_index| {
            info!(
                "searching {city} via {} (attempt {}/{max_attempts})",
                self.transport.endpoint(),
                attempt_index + 1
            );
            self.transport.execute(&query).into()
        })?;

        if response.elements.is_empty() {
            info!("no data returned for {city}");
            return Ok(Vec::new());
        }
        info!("found {} raw results for {city}", response.elements.len());
        Ok(extract_attractions(city, &response.elements))
    }
}
