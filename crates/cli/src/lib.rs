#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front end of the `launchargs` workspace. It reads
//! a merged options object (JSON on stdin or from `--options FILE`), applies
//! `--set KEY=VALUE` overrides, determines the host runtime version, and prints
//! the runtime and framework argument vectors produced by
//! [`unparser::Unparser`].
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error; [`run_with_input`] additionally takes the reader used in
//! place of standard input. A [`clap`](https://docs.rs/clap/) builder command
//! recognises the flags, with `--help` and `--version` handled here so their
//! text stays fixed. The host runtime version comes from `--runtime-version`,
//! then [`RUNTIME_VERSION_ENV`], and finally from running
//! `<binary> --version` through [`CommandProbe`].
//!
//! Warnings from the unparser are written to standard error as
//! `launchargs: warning: ...` lines (`--quiet` drops them) and listed under
//! `warnings` in the JSON output. Debug traces go through `tracing`, filtered
//! by `-v` repetitions or `LAUNCHARGS_LOG`.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Standard output only ever carries the rendered vectors, help or version.
//!
//! # Errors
//!
//! Usage errors reported by `clap` exit with [`EXIT_USAGE`]. Every
//! [`CliError`] (unreadable input, rejected options, probe failures) is
//! printed as `launchargs: error: ...` and exits with [`EXIT_FAILURE`].
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run_with_input(
//!     ["launchargs", "--runtime-version", "10.15.3", "--options", "-"],
//!     &br#"{"_": ["debug", "test"], "timeout": 2000}"#[..],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(exit_code, 0);
//! let output: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
//! assert_eq!(output["runtime_args"], serde_json::json!(["inspect"]));
//! assert_eq!(output["framework_args"], serde_json::json!(["test", "--timeout", "0"]));
//! ```

mod arguments;
mod env;
mod error;
mod input;
mod output;
mod probe;

use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};

use logging::{MessageSink, TracingInitError, Verbosity, Warning};
use unparser::{RuntimeProbe, StaticProbe, Unparser};

use arguments::{PROGRAM_NAME, ParsedArgs, parse_args};
use output::Launch;

pub use env::{NODE_ENV, RUNTIME_VERSION_ENV};
pub use error::{CliError, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
pub use probe::{CommandProbe, ProbeError};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text.
const HELP_TEXT: &str = concat!(
    "launchargs ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: launchargs [OPTIONS]\n",
    "\n",
    "Splits a merged test-runner options object (JSON) into the arguments for\n",
    "the host runtime and the arguments for the test framework.\n",
    "\n",
    "Options:\n",
    "      --options FILE          Read the options object from FILE ('-' for stdin).\n",
    "                              Defaults to stdin unless only --set is given.\n",
    "      --set KEY=VALUE         Set KEY after loading; VALUE is parsed as JSON when\n",
    "                              possible and taken verbatim otherwise.\n",
    "      --runtime-version VER   Assume host runtime version VER instead of probing.\n",
    "      --runtime-binary PATH   Host runtime executable (default: node).\n",
    "      --entry PATH            Framework entry point (required by shell/command).\n",
    "      --value-style STYLE     Runtime flag layout: separate (default) or joined.\n",
    "      --format FORMAT         json (default), shell or command.\n",
    "  -v, --verbose               Increase diagnostic output; repeat for more detail.\n",
    "  -q, --quiet                 Suppress warnings.\n",
    "  -h, --help                  Show this help message and exit.\n",
    "  -V, --version               Output version information and exit.\n",
    "\n",
    "Environment:\n",
    "  LAUNCHARGS_RUNTIME_VERSION  Version used when --runtime-version is absent.\n",
    "  LAUNCHARGS_NODE             Binary probed for its version.\n",
    "  LAUNCHARGS_LOG              Log filter directive, e.g. launchargs::rules=debug.\n",
);

/// Runs the CLI with standard input as the options source.
///
/// Returns the process exit code the caller should use.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with_input(arguments, io::stdin().lock(), stdout, stderr)
}

/// Runs the CLI reading the options document from `stdin`.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            return EXIT_USAGE;
        }
    };

    if parsed.show_help {
        return write_or_fail(stdout, HELP_TEXT);
    }
    if parsed.show_version {
        let banner = format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"));
        return write_or_fail(stdout, &banner);
    }

    match execute(&parsed, stdin, stdout, stderr) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {error}");
            EXIT_FAILURE
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn write_or_fail<Out: Write>(stdout: &mut Out, text: &str) -> i32 {
    if stdout.write_all(text.as_bytes()).is_err() {
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}

fn execute<In, Out, Err>(
    parsed: &ParsedArgs,
    stdin: In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<(), CliError>
where
    In: Read,
    Out: Write,
    Err: Write,
{
    match logging::init_tracing(Verbosity::from_flags(parsed.verbose, parsed.quiet)) {
        // A subscriber installed by an embedding process stays in charge.
        Ok(()) | Err(TracingInitError::Install(_)) => {}
        Err(error) => return Err(error.into()),
    }

    let options = input::load_options(&parsed.resolved_source(), stdin, &parsed.assignments)?;
    let probe = select_probe(parsed)?;
    tracing::info!(
        target: logging::targets::PROBE,
        version = %probe.version(),
        "host runtime selected"
    );

    let unparser = Unparser::new(probe).runtime_value_style(parsed.value_style);
    let mut warnings: Vec<Warning> = Vec::new();
    let args = unparser.unparse(&options, &mut warnings);
    if !parsed.quiet {
        let _ = MessageSink::new(&mut *stderr)
            .program_name(PROGRAM_NAME)
            .write_all(&warnings);
    }

    let launch = Launch {
        runtime_binary: &parsed.runtime_binary,
        entry: parsed.entry.as_deref(),
    };
    output::render(stdout, parsed.format, &args, &warnings, launch)?;
    stdout.flush().map_err(CliError::Write)
}

fn select_probe(parsed: &ParsedArgs) -> Result<Box<dyn RuntimeProbe>, CliError> {
    if let Some(version) = parsed.runtime_version {
        return Ok(Box::new(StaticProbe::new(version)));
    }
    if let Some(version) = env::env_runtime_version()? {
        return Ok(Box::new(StaticProbe::new(version)));
    }
    let binary = env::env_node_binary()
        .unwrap_or_else(|| OsStr::new(&parsed.runtime_binary).to_os_string());
    Ok(Box::new(CommandProbe::detect(binary)?))
}
