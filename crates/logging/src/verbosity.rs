//! crates/logging/src/verbosity.rs
//! Mapping from repeated `-v` / `-q` flags to a tracing filter.

use std::fmt;

/// Diagnostic verbosity selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Adds informational traces (`-v`).
    Verbose,
    /// Adds rule decisions and serialization traces (`-vv`).
    Debug,
    /// Adds per-key classification traces (`-vvv` and beyond).
    Trace,
}

impl Verbosity {
    /// Resolves the level from the number of `-v` occurrences and `--quiet`.
    ///
    /// `--quiet` wins over any number of `-v` flags.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Level name understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn level_name(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter directive restricting output to the workspace targets at this level.
    ///
    /// Dependencies stay at `warn` so only launchargs traces grow with `-v`.
    #[must_use]
    pub fn directive(self) -> String {
        match self {
            Self::Quiet | Self::Normal => self.level_name().to_owned(),
            _ => format!("warn,launchargs={}", self.level_name()),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level_name())
    }
}
