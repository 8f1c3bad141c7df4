//! crates/cli/src/env.rs
//! Environment overrides.

use std::env;
use std::ffi::OsString;

use unparser::RuntimeVersion;

use crate::error::CliError;

/// Host runtime version used when `--runtime-version` is absent.
pub const RUNTIME_VERSION_ENV: &str = "LAUNCHARGS_RUNTIME_VERSION";

/// Binary queried by the version probe, overriding `--runtime-binary`.
pub const NODE_ENV: &str = "LAUNCHARGS_NODE";

/// Version from [`RUNTIME_VERSION_ENV`], if set to something non-blank.
pub(crate) fn env_runtime_version() -> Result<Option<RuntimeVersion>, CliError> {
    runtime_version_from(env::var_os(RUNTIME_VERSION_ENV))
}

/// Probe binary from [`NODE_ENV`], if set to something non-blank.
pub(crate) fn env_node_binary() -> Option<OsString> {
    non_blank(env::var_os(NODE_ENV))
}

fn runtime_version_from(value: Option<OsString>) -> Result<Option<RuntimeVersion>, CliError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };
    value
        .to_string_lossy()
        .parse()
        .map(Some)
        .map_err(|source| CliError::EnvVersion {
            variable: RUNTIME_VERSION_ENV,
            source,
        })
}

fn non_blank(value: Option<OsString>) -> Option<OsString> {
    value.filter(|value| !value.to_string_lossy().trim().is_empty())
}
