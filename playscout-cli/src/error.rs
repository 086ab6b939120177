//! Error types emitted by the Playscout CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use playscout_core::MergeError;
use playscout_data::{JsonStoreError, TransportBuildError};
use thiserror::Error;

/// Errors emitted by the Playscout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A numeric option was set to zero.
    #[error("{field} must be at least 1 (set --{field} or {env})")]
    ZeroValue {
        field: &'static str,
        env: &'static str,
    },
    /// Constructing the Overpass transport failed.
    #[error("failed to build Overpass client for {endpoint:?}: {source}")]
    BuildTransport {
        endpoint: String,
        #[source]
        source: TransportBuildError,
    },
    /// Loading or saving the attraction store failed.
    #[error("failed to update attractions for {city}: {source}")]
    Merge {
        city: String,
        #[source]
        source: Box<MergeError<JsonStoreError>>,
    },
    /// Writing the run summary failed.
    #[error("failed to write summary: {0}")]
    WriteSummary(#[source] std::io::Error),
}
