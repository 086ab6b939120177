//! Persisted attraction state.

use crate::AttractionCollection;

/// Read and replace the persisted [`AttractionCollection`].
///
/// Implementations return an empty collection from [`load`](Self::load) when
/// nothing has been saved yet, and [`save`](Self::save) replaces the stored
/// state wholesale.
pub trait AttractionStore {
    /// Error raised by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when existing state cannot be read or decoded.
    fn load(&self) -> Result<AttractionCollection, Self::Error>;

    /// Replace the stored collection with `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the state cannot be written.
    fn save(&self, collection: &AttractionCollection) -> Result<(), Self::Error>;
}
