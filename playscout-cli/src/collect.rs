//! Collect command implementation for the Playscout CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use playscout_core::{AttractionFetcher, MergeReport, merge_city};
use playscout_data::overpass::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use playscout_data::{
    DEFAULT_ENDPOINT, DEFAULT_STORE_FILE, HttpOverpassTransport, JsonFileStore, OverpassConfig,
    OverpassFetcher, RetryPolicy,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CITY, ARG_ENDPOINT, ARG_MAX_ATTEMPTS, ARG_STORE, ARG_TIMEOUT_SECS, CliError, DEFAULT_CITY,
    ENV_MAX_ATTEMPTS, ENV_TIMEOUT_SECS,
};

/// CLI arguments for the `collect` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "collect",
    long_about = "Query the Overpass API for playgrounds, parks, zoos, \
                 museums, and toy shops in one city and append the ones not \
                 yet stored. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Collect one city's attractions"
)]
#[ortho_config(prefix = "PLAYSCOUT")]
pub(crate) struct CollectArgs {
    /// City whose attractions are fetched.
    #[arg(long = ARG_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// JSON file holding the attraction collection.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
    /// Overpass interpreter URL.
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// Requests to try before giving up.
    #[arg(long = ARG_MAX_ATTEMPTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_attempts: Option<u32>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl CollectArgs {
    pub(crate) fn into_config(self) -> Result<CollectConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CollectConfig::try_from(merged)
    }
}

/// Resolved `collect` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectConfig {
    pub(crate) city: String,
    pub(crate) store: Utf8PathBuf,
    pub(crate) endpoint: String,
    pub(crate) max_attempts: u32,
    pub(crate) timeout: Duration,
}

impl TryFrom<CollectArgs> for CollectConfig {
    type Error = CliError;

    fn try_from(args: CollectArgs) -> Result<Self, Self::Error> {
        let max_attempts = args.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(CliError::ZeroValue {
                field: ARG_MAX_ATTEMPTS,
                env: ENV_MAX_ATTEMPTS,
            });
        }
        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::ZeroValue {
                field: ARG_TIMEOUT_SECS,
                env: ENV_TIMEOUT_SECS,
            });
        }
        Ok(Self {
            city: args.city.unwrap_or_else(|| DEFAULT_CITY.to_owned()),
            store: args
                .store
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_FILE)),
            endpoint: args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            max_attempts,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn build_fetcher(
    config: &CollectConfig,
) -> Result<OverpassFetcher<HttpOverpassTransport>, CliError> {
    let transport_config =
        OverpassConfig::new(config.endpoint.clone()).with_timeout(config.timeout);
    let transport = HttpOverpassTransport::with_config(transport_config).map_err(|source| {
        CliError::BuildTransport {
            endpoint: config.endpoint.clone(),
            source,
        }
    })?;
    Ok(OverpassFetcher::new(transport).with_policy(RetryPolicy::new(config.max_attempts)))
}

pub(crate) fn run_collect(args: CollectArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    debug!("resolved collect configuration: {config:?}");
    let fetcher = build_fetcher(&config)?;
    let store = JsonFileStore::new(config.store.clone());
    let mut stdout = std::io::stdout().lock();
    run_collect_with(&config.city, &fetcher, &store, &mut stdout).map(|_| ())
}

/// Merge `city` into `store` and write the run summary to `writer`.
pub(crate) fn run_collect_with(
    city: &str,
    fetcher: &dyn AttractionFetcher,
    store: &JsonFileStore,
    writer: &mut dyn Write,
) -> Result<MergeReport, CliError> {
    let report = merge_city(city, fetcher, store).map_err(|source| CliError::Merge {
        city: city.to_owned(),
        source: Box::new(source),
    })?;
    write_summary(writer, &report).map_err(CliError::WriteSummary)?;
    Ok(report)
}

fn write_summary(writer: &mut dyn Write, report: &MergeReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "Added {} attractions from {}.",
        report.added, report.city
    )?;
    writeln!(writer, "Total attractions: {}", report.total)?;
    if report.added == 0 {
        writeln!(writer, "No new attractions were added. Maybe duplicates.")?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CollectConfig, CliError> {
    let merged = CollectArgs::merge_from_layers(layers).map_err(CliError::from)?;
    CollectConfig::try_from(merged)
}
