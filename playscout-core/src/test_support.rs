//! In-memory test doubles for the fetch and store seams.

use std::cell::{Cell, RefCell};

use thiserror::Error;

use crate::{
    Attraction, AttractionCollection, AttractionFetcher, AttractionStore, Coordinates, FetchError,
};

/// Build an attraction with fixed metadata for tests.
#[must_use]
pub fn sample_attraction(name: &str, lat: f64, lng: f64) -> Attraction {
    Attraction {
        city: "Berlin".to_owned(),
        name: name.to_owned(),
        kind: "Zoo".to_owned(),
        coordinates: Coordinates::new(lat, lng),
        seo_saturation: 4,
        search_popularity: 6,
    }
}

/// Errors injected by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStoreError {
    /// Loading was configured to fail.
    #[error("memory store refused to load")]
    LoadRefused,
    /// Saving was configured to fail.
    #[error("memory store refused to save")]
    SaveRefused,
}

/// `AttractionStore` holding its collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RefCell<AttractionCollection>,
    saves: Cell<usize>,
    fail_load: bool,
    fail_save: bool,
}

impl MemoryStore {
    /// Create a store pre-populated with `records`.
    #[must_use]
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Attraction>,
    {
        Self {
            collection: RefCell::new(records.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Make every `load` fail.
    #[must_use]
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make every `save` fail.
    #[must_use]
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// Snapshot of the stored collection.
    #[must_use]
    pub fn snapshot(&self) -> AttractionCollection {
        self.collection.borrow().clone()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl AttractionStore for MemoryStore {
    type Error = MemoryStoreError;

    fn load(&self) -> Result<AttractionCollection, Self::Error> {
        if self.fail_load {
            return Err(MemoryStoreError::LoadRefused);
        }
        Ok(self.collection.borrow().clone())
    }

    fn save(&self, collection: &AttractionCollection) -> Result<(), Self::Error> {
        if self.fail_save {
            return Err(MemoryStoreError::SaveRefused);
        }
        self.collection.replace(collection.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// `AttractionFetcher` returning a fixed outcome for any city.
#[derive(Debug, Clone)]
pub struct StubFetcher {
    outcome: Result<Vec<Attraction>, FetchError>,
    calls: Cell<usize>,
}

impl StubFetcher {
    /// Return `records` on every call.
    #[must_use]
    pub fn with_records(records: Vec<Attraction>) -> Self {
        Self {
            outcome: Ok(records),
            calls: Cell::new(0),
        }
    }

    /// Return `error` on every call.
    #[must_use]
    pub fn with_error(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Number of times `fetch` was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AttractionFetcher for StubFetcher {
    fn fetch(&self, _city: &str) -> Result<Vec<Attraction>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}
