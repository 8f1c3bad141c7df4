//! crates/logging/src/tracing_bridge.rs
//! Installs the `tracing-subscriber` formatter used by the command-line front end.
//!
//! Warnings meant for the user go through [`crate::WarningSink`]; this
//! subscriber only carries the debug traces emitted on [`crate::targets`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Verbosity, init_tracing};
//!
//! init_tracing(Verbosity::from_flags(2, false))?;
//! tracing::debug!(target: "launchargs::rules", "rule fired");
//! ```

use std::error::Error;
use std::fmt;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::verbosity::Verbosity;

/// Environment variable holding a full `EnvFilter` directive that replaces the
/// one derived from [`Verbosity`].
pub const LOG_ENV: &str = "LAUNCHARGS_LOG";

/// Failure to set up the global subscriber.
#[derive(Debug)]
pub enum TracingInitError {
    /// The filter directive could not be parsed.
    Filter {
        /// Directive text that was rejected.
        directive: String,
        /// Parser error from `tracing-subscriber`.
        source: ParseError,
    },
    /// A global subscriber was already installed.
    Install(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for TracingInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter { directive, source } => {
                write!(f, "invalid log filter '{directive}': {source}")
            }
            Self::Install(source) => write!(f, "failed to install log subscriber: {source}"),
        }
    }
}

impl Error for TracingInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Filter { source, .. } => Some(source),
            Self::Install(source) => Some(source.as_ref()),
        }
    }
}

/// Builds the filter for `verbosity`, or from `override_directive` when present.
pub fn build_filter(
    verbosity: Verbosity,
    override_directive: Option<&str>,
) -> Result<EnvFilter, TracingInitError> {
    let directive = override_directive.map_or_else(|| verbosity.directive(), str::to_owned);
    EnvFilter::try_new(&directive).map_err(|source| TracingInitError::Filter { directive, source })
}

/// Installs a stderr formatter filtered by `verbosity` or by [`LOG_ENV`].
pub fn init_tracing(verbosity: Verbosity) -> Result<(), TracingInitError> {
    let from_env = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let filter = build_filter(verbosity, from_env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .map_err(TracingInitError::Install)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_from_verbosity() {
        let filter = build_filter(Verbosity::Debug, None).unwrap();
        assert!(filter.to_string().contains("launchargs=debug"));
    }

    #[test]
    fn override_replaces_verbosity() {
        let filter = build_filter(Verbosity::Quiet, Some("launchargs::rules=trace")).unwrap();
        assert!(filter.to_string().contains("launchargs::rules=trace"));
    }

    #[test]
    fn rejects_malformed_directive() {
        let error = build_filter(Verbosity::Normal, Some("launchargs=notalevel")).unwrap_err();
        assert!(error.to_string().contains("invalid log filter 'launchargs=notalevel'"));
        assert!(error.source().is_some());
    }
}
