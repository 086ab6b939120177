//! JSON file persistence for the attraction collection.
//!
//! The file holds a single JSON array of attraction objects, pretty-printed
//! with four-space indentation. A missing file reads as an empty
//! collection; saves replace the whole file atomically.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use playscout_core::{AttractionCollection, AttractionStore};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

/// File name used when no store path is configured.
pub const DEFAULT_STORE_FILE: &str = "attractions.json";

const INDENT: &[u8] = b"    ";

/// Errors raised by [`JsonFileStore`].
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// The store file exists but could not be read.
    #[error("failed to read attraction store {path}")]
    Read {
        /// Store location.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The store file is not a JSON array of attractions.
    #[error("failed to parse attraction store {path}")]
    Parse {
        /// Store location.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The collection could not be encoded.
    #[error("failed to serialise attractions for {path}")]
    Serialise {
        /// Store location.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The encoded collection could not be written.
    #[error("failed to write attraction store {path}")]
    Write {
        /// Store location.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// [`AttractionStore`] backed by a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: Utf8PathBuf,
}

impl JsonFileStore {
    /// Store reading and writing `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn encode(&self, collection: &AttractionCollection) -> Result<Vec<u8>, JsonStoreError> {
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(INDENT));
        collection
            .serialize(&mut serializer)
            .map_err(|source| JsonStoreError::Serialise {
                path: self.path.clone(),
                source,
            })?;
        Ok(bytes)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl AttractionStore for JsonFileStore {
    type Error = JsonStoreError;

    fn load(&self) -> Result<AttractionCollection, Self::Error> {
        let contents = playscout_fs::read_optional_to_string(&self.path).map_err(|source| {
            JsonStoreError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        let Some(contents) = contents else {
            return Ok(AttractionCollection::new());
        };
        serde_json::from_str(&contents).map_err(|source| JsonStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, collection: &AttractionCollection) -> Result<(), Self::Error> {
        let bytes = self.encode(collection)?;
        playscout_fs::replace_file(&self.path, &bytes).map_err(|source| JsonStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
