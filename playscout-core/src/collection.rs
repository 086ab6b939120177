//! Ordered attraction collection keyed by name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Attraction;

/// Attractions in insertion order.
///
/// Records are only ever appended. The collection serialises as a plain JSON
/// array of [`Attraction`] values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttractionCollection {
    records: Vec<Attraction>,
}

impl AttractionCollection {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attraction> {
        self.records.iter()
    }

    /// Borrow the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Attraction] {
        &self.records
    }

    /// Whether a record with exactly this name is present.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.name == name)
    }

    /// Append every record whose name was absent before this call.
    ///
    /// Names are snapshotted once up front and the snapshot is not extended
    /// while appending, so repeated names inside `batch` are all kept when
    /// they are new to the collection. Existing records are never replaced.
    /// Returns the number of records appended.
    ///
    /// # Examples
    /// ```
    /// use playscout_core::{Attraction, AttractionCollection, Coordinates};
    ///
    /// let record = |name: &str| Attraction {
    ///     city: "Berlin".to_owned(),
    ///     name: name.to_owned(),
    ///     kind: "Zoo".to_owned(),
    ///     coordinates: Coordinates::new(52.5, 13.4),
    ///     seo_saturation: 0,
    ///     search_popularity: 1,
    /// };
    /// let mut collection: AttractionCollection = [record("Kids Zoo")].into_iter().collect();
    ///
    /// let added = collection.append_unseen([record("Kids Zoo"), record("Aquarium")]);
    ///
    /// assert_eq!(added, 1);
    /// assert_eq!(collection.len(), 2);
    /// ```
    pub fn append_unseen<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = Attraction>,
    {
        let existing: HashSet<String> = self
            .records
            .iter()
            .map(|record| record.name.clone())
            .collect();
        let before = self.records.len();
        self.records.extend(
            batch
                .into_iter()
                .filter(|record| !existing.contains(&record.name)),
        );
        self.records.len() - before
    }

    /// Consume the collection, yielding its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Attraction> {
        self.records
    }
}

impl FromIterator<Attraction> for AttractionCollection {
    fn from_iter<T: IntoIterator<Item = Attraction>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttractionCollection {
    type Item = &'a Attraction;
    type IntoIter = std::slice::Iter<'a, Attraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
