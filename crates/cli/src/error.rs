//! crates/cli/src/error.rs
//! Failures surfaced by the command-line front end.

use std::io;
use std::path::PathBuf;

use logging::TracingInitError;
use thiserror::Error;
use unparser::{OptionsError, ParseVersionError};

use crate::probe::ProbeError;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for every [`CliError`].
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for command-line usage errors.
pub const EXIT_USAGE: i32 = 2;

/// Error produced while running the front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The options file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
    /// The options document or a `--set` assignment was rejected.
    #[error("{origin}: {source}")]
    Options {
        /// Where the rejected input came from.
        origin: String,
        /// Loader error.
        source: OptionsError,
    },
    /// `LAUNCHARGS_RUNTIME_VERSION` held an unparsable version.
    #[error("{variable}: {source}")]
    EnvVersion {
        /// Environment variable name.
        variable: &'static str,
        /// Parser error.
        source: ParseVersionError,
    },
    /// The host runtime could not be queried.
    #[error(transparent)]
    Probe(#[from] ProbeError),
    /// The log filter was invalid.
    #[error(transparent)]
    Logging(#[from] TracingInitError),
    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
