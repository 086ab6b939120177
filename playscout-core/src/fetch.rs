//! Retrieve attractions for a city from an external source.
//!
//! A fetch either yields records (possibly none) or reports that every
//! attempt failed. Callers can tell "the city has no matches" apart from
//! "the service never answered".

use thiserror::Error;

use crate::Attraction;

/// Why a single request attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The service answered with a status other than 200.
    #[error("request to {url} returned HTTP status {status}")]
    HttpStatus {
        /// Endpoint that was queried.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs} seconds")]
    Timeout {
        /// Endpoint that was queried.
        url: String,
        /// Timeout applied to the attempt.
        timeout_secs: u64,
    },
    /// The request failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Endpoint that was queried.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// A 200 response carried a body that could not be decoded.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Endpoint that was queried.
        url: String,
        /// Decoder error description.
        message: String,
    },
}

/// Errors from [`AttractionFetcher::fetch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Every permitted attempt failed.
    #[error("gave up after {attempts} attempt(s): {last_failure}")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// Failure observed on the final attempt.
        #[source]
        last_failure: FetchFailure,
    },
}

/// Source of attractions for a named city.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use playscout_core::{Attraction, AttractionFetcher, FetchError, Tags};
///
/// struct OnePlayground;
///
/// impl AttractionFetcher for OnePlayground {
///     fn fetch(&self, city: &str) -> Result<Vec<Attraction>, FetchError> {
///         let tags = Tags::from([("name".to_owned(), "Spielplatz".to_owned())]);
///         Ok(Attraction::from_tags(city, Coord { x: 13.4, y: 52.5 }, &tags)
///             .into_iter()
///             .collect())
///     }
/// }
///
/// let found = OnePlayground.fetch("berlin")?;
/// assert_eq!(found.len(), 1);
/// # Ok::<(), FetchError>(())
/// ```
pub trait AttractionFetcher {
    /// Return the attractions currently listed for `city`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Exhausted`] when no attempt succeeded.
    fn fetch(&self, city: &str) -> Result<Vec<Attraction>, FetchError>;
}
