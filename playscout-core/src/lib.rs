//! Core domain types for Playscout.
//!
//! These models describe family attractions gathered from map data and the
//! rules for scoring and accumulating them:
//! - [`Attraction`] is the unit of persistence, scored by
//!   [`seo_saturation`] and [`search_popularity`].
//! - [`AttractionCollection`] is the ordered, name-keyed collection that
//!   grows across runs.
//! - [`AttractionFetcher`] and [`AttractionStore`] are the seams for the
//!   network source and the persisted state; [`merge_city`] joins them.
//!
//! Transport and file formats live in `playscout-data`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
pub mod collection;
pub mod fetch;
pub mod merge;
pub mod score;
pub mod store;
mod text;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attraction::{Attraction, Coordinates, FALLBACK_KIND, Tags};
pub use collection::AttractionCollection;
pub use fetch::{AttractionFetcher, FetchError, FetchFailure};
pub use merge::{MergeError, MergeReport, merge_city};
pub use score::{MAX_SCORE, search_popularity, seo_saturation};
pub use store::AttractionStore;
pub use text::title_case;
