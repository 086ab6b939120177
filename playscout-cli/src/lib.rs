//! Command-line interface for collecting family attractions.
//!
//! `playscout` with no subcommand collects the default city once;
//! `playscout collect` accepts overrides from flags, configuration files,
//! or `PLAYSCOUT_` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod collect;
mod error;

pub use error::CliError;

use collect::CollectArgs;

pub(crate) const ARG_CITY: &str = "city";
pub(crate) const ARG_STORE: &str = "store";
pub(crate) const ARG_ENDPOINT: &str = "endpoint";
pub(crate) const ARG_MAX_ATTEMPTS: &str = "max-attempts";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ENV_MAX_ATTEMPTS: &str = "PLAYSCOUT_CMDS_COLLECT_MAX_ATTEMPTS";
pub(crate) const ENV_TIMEOUT_SECS: &str = "PLAYSCOUT_CMDS_COLLECT_TIMEOUT_SECS";

/// City collected when none is configured.
pub const DEFAULT_CITY: &str = "berlin";

/// Run the Playscout CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// Overpass client cannot be built, or the store cannot be read or written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let args = match cli.command {
        Some(Command::Collect(args)) => args,
        None => CollectArgs::default(),
    };
    collect::run_collect(args)
}

#[derive(Debug, Parser)]
#[command(
    name = "playscout",
    about = "Collect family attractions from OpenStreetMap into a JSON file",
    after_help = "Use the RUST_LOG environment variable to control logging, \
                  e.g. RUST_LOG=debug.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one city's attractions and merge them into the store.
    Collect(CollectArgs),
}

#[cfg(test)]
mod tests;
