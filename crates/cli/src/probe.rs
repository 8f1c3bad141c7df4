//! crates/cli/src/probe.rs
//! Host runtime probe that asks the real binary for its version.

use std::ffi::{OsStr, OsString};
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use unparser::{ParseVersionError, RuntimeProbe, RuntimeVersion};

/// Failure to determine the host runtime version.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The binary could not be started.
    #[error("failed to run '{binary} --version': {source}")]
    Spawn {
        /// Binary that was invoked.
        binary: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The binary exited unsuccessfully.
    #[error("'{binary} --version' exited with {status}")]
    Status {
        /// Binary that was invoked.
        binary: String,
        /// Exit status reported by the child.
        status: ExitStatus,
    },
    /// The reported version could not be parsed.
    #[error("'{binary} --version' printed an unrecognised version: {source}")]
    Version {
        /// Binary that was invoked.
        binary: String,
        /// Parser error.
        source: ParseVersionError,
    },
}

/// Probe backed by `<binary> --version`.
///
/// The binary is queried once, when the probe is created; flag support is
/// answered from the builtin registry for the detected version.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandProbe {
    binary: OsString,
    version: RuntimeVersion,
}

impl CommandProbe {
    /// Runs `binary --version` and records the result.
    pub fn detect(binary: impl AsRef<OsStr>) -> Result<Self, ProbeError> {
        let binary = binary.as_ref();
        let shown = binary.to_string_lossy().into_owned();

        let output = Command::new(binary)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProbeError::Spawn {
                binary: shown.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(ProbeError::Status {
                binary: shown,
                status: output.status,
            });
        }

        let version = parse_version_output(&shown, &output.stdout)?;
        logging::trace_probe!(binary = %shown, %version, "detected host runtime");
        Ok(Self {
            binary: binary.to_os_string(),
            version,
        })
    }

    /// Binary that was queried.
    #[must_use]
    pub fn binary(&self) -> &OsStr {
        &self.binary
    }
}

impl RuntimeProbe for CommandProbe {
    fn version(&self) -> RuntimeVersion {
        self.version
    }
}

/// Parses the first non-empty line of `--version` output.
fn parse_version_output(binary: &str, stdout: &[u8]) -> Result<RuntimeVersion, ProbeError> {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    line.parse().map_err(|source| ProbeError::Version {
        binary: binary.to_owned(),
        source,
    })
}
