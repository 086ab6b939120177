//! Fold a fresh fetch into the persisted collection.
//!
//! One call loads the stored collection, fetches a single city, appends the
//! records whose names were not already stored, and saves the result. The
//! store is touched twice, once to load and once to save; nothing is held
//! across the fetch.

use log::{info, warn};
use thiserror::Error;

use crate::{AttractionFetcher, AttractionStore, FetchError};

/// Outcome of a [`merge_city`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// City as supplied by the caller.
    pub city: String,
    /// Records returned by the fetcher.
    pub fetched: usize,
    /// Records appended to the collection.
    pub added: usize,
    /// Collection size after the merge.
    pub total: usize,
    /// Set when the fetcher gave up; the merge then adds nothing.
    pub fetch_error: Option<FetchError>,
}

/// Errors from [`merge_city`].
///
/// Fetch failures never surface here; only storage failures do.
#[derive(Debug, Error)]
pub enum MergeError<E>
where
    E: std::error::Error + 'static,
{
    /// Reading the persisted collection failed.
    #[error("failed to load attraction collection: {0}")]
    Load(#[source] E),
    /// Writing the updated collection failed.
    #[error("failed to save attraction collection: {0}")]
    Save(#[source] E),
}

/// Fetch `city` and append its unseen attractions to `store`.
///
/// The collection is saved even when nothing was added. A fetch that
/// exhausts its retries is logged and recorded in
/// [`MergeReport::fetch_error`], and counts as an empty batch.
///
/// # Errors
///
/// Returns [`MergeError`] when the store cannot be loaded or saved.
pub fn merge_city<F, S>(
    city: &str,
    fetcher: &F,
    store: &S,
) -> Result<MergeReport, MergeError<S::Error>>
where
    F: AttractionFetcher + ?Sized,
    S: AttractionStore + ?Sized,
{
    let mut collection = store.load().map_err(MergeError::Load)?;
    let (batch, fetch_error) = match fetcher.fetch(city) {
        Ok(batch) => (batch, None),
        Err(error) => {
            warn!("Fetching attractions for {city} failed: {error}");
            (Vec::new(), Some(error))
        }
    };
    let fetched = batch.len();
    let added = collection.append_unseen(batch);
    store.save(&collection).map_err(MergeError::Save)?;
    info!(
        "Merged {added} of {fetched} fetched attractions for {city}; collection holds {}",
        collection.len()
    );
    Ok(MergeReport {
        city: city.to_owned(),
        fetched,
        added,
        total: collection.len(),
        fetch_error,
    })
}

#[cfg(test)]
mod tests;
