//! Test helpers for running the collect command against a temporary store.

use crate::collect::run_collect_with;
use crate::CliError;
use camino::Utf8PathBuf;
use playscout_core::{AttractionFetcher, MergeReport};
use playscout_data::JsonFileStore;
use tempfile::TempDir;

/// Temporary directory holding an attraction store.
#[derive(Debug)]
pub(super) struct StoreDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl StoreDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8PathBuf {
        &self.root
    }

    pub(super) fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.root.join("attractions.json"))
    }
}

/// Output of one collect run.
#[derive(Debug)]
pub(super) struct CollectRun {
    pub(super) result: Result<MergeReport, CliError>,
    pub(super) stdout: String,
}

pub(super) fn collect_into(
    store: &JsonFileStore,
    city: &str,
    fetcher: &dyn AttractionFetcher,
) -> CollectRun {
    let mut buffer = Vec::new();
    let result = run_collect_with(city, fetcher, store, &mut buffer);
    CollectRun {
        result,
        stdout: String::from_utf8(buffer).expect("utf-8 summary"),
    }
}
