//! Data access for Playscout.
//!
//! Responsibilities:
//! - Query the Overpass API for family attractions, retrying with backoff.
//! - Turn raw Overpass elements into scored [`playscout_core::Attraction`]s.
//! - Persist the attraction collection as a JSON file.
//!
//! Boundaries:
//! - Scoring and merge rules live in `playscout-core`.
//! - Callers see synchronous interfaces; async HTTP stays internal.
//!
//! Invariants:
//! - No global mutable state.
//! - Persisted files are replaced atomically.

#![forbid(unsafe_code)]

pub mod overpass;
pub mod store;

pub use overpass::{
    DEFAULT_ENDPOINT, HttpOverpassTransport, OverpassConfig, OverpassFetcher, OverpassQuery,
    OverpassTransport, RetryPolicy, Sleeper, ThreadSleeper, TransportBuildError,
};
pub use store::{DEFAULT_STORE_FILE, JsonFileStore, JsonStoreError};
