//! Facade crate for Playscout, a collector of family attractions.
//!
//! This crate re-exports the core domain types and, behind the `overpass`
//! feature, the Overpass client and JSON file store.
//!
//! ```no_run
//! # #[cfg(feature = "overpass")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use playscout::{HttpOverpassTransport, JsonFileStore, OverpassFetcher, merge_city};
//!
//! let fetcher = OverpassFetcher::new(HttpOverpassTransport::new(playscout::DEFAULT_ENDPOINT)?);
//! let store = JsonFileStore::default();
//! let report = merge_city("berlin", &fetcher, &store)?;
//! println!("added {} of {}", report.added, report.fetched);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "overpass"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use playscout_core::{
    Attraction, AttractionCollection, AttractionFetcher, AttractionStore, Coordinates, FetchError,
    FetchFailure, MAX_SCORE, MergeError, MergeReport, Tags, merge_city, search_popularity,
    seo_saturation,
};

#[cfg(feature = "overpass")]
pub use playscout_data::{
    DEFAULT_ENDPOINT, DEFAULT_STORE_FILE, HttpOverpassTransport, JsonFileStore, JsonStoreError,
    OverpassConfig, OverpassFetcher, OverpassQuery, RetryPolicy, TransportBuildError,
};
