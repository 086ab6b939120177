//! Overpass API client for family attractions.
//!
//! [`OverpassFetcher`] implements [`playscout_core::AttractionFetcher`] by
//! building an [`OverpassQuery`] for the city, sending it through an
//! [`OverpassTransport`] under a [`RetryPolicy`], and extracting scored
//! attractions from the elements returned.
//!
//! # Architecture
//!
//! The transport trait is synchronous. [`HttpOverpassTransport`] bridges to
//! `reqwest` by blocking on a Tokio runtime it owns. Waits between attempts
//! go through a [`Sleeper`] so tests can record them instead of blocking.
//!
//! # Example
//!
//! ```no_run
//! use playscout_core::AttractionFetcher;
//! use playscout_data::overpass::{HttpOverpassTransport, OverpassConfig, OverpassFetcher};
//! use std::time::Duration;
//!
//! let config = OverpassConfig::default().with_timeout(Duration::from_secs(60));
//! let transport = HttpOverpassTransport::with_config(config)?;
//! let fetcher = OverpassFetcher::new(transport);
//!
//! let attractions = fetcher.fetch("berlin")?;
//! println!("found {}", attractions.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod extract;
mod fetcher;
mod query;
mod response;
mod retry;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use extract::extract_attractions;
pub use fetcher::OverpassFetcher;
pub use query::{LEISURE_CATEGORIES, OverpassQuery, SHOP_CATEGORY, TOURISM_CATEGORIES};
pub use response::{Center, OverpassElement, OverpassResponse};
pub use retry::{
    AttemptOutcome, DEFAULT_MAX_ATTEMPTS, FailureKind, RetryPolicy, Sleeper, ThreadSleeper,
    backoff_delay, retry_with_backoff,
};
pub use transport::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpOverpassTransport,
    OverpassConfig, OverpassTransport, TransportBuildError,
};
