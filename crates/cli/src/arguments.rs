//! crates/cli/src/arguments.rs
//! Command definition and argument extraction.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::PathBufValueParser};
use unparser::{RuntimeVersion, ValueStyle};

/// Program name used when `argv` is empty.
pub(crate) const PROGRAM_NAME: &str = "launchargs";

/// Where the merged options are read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum OptionsSource {
    /// Standard input.
    Stdin,
    /// A JSON file.
    File(PathBuf),
    /// No input document; only `--set` assignments.
    Empty,
}

/// How the resulting vectors are printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    /// `{"runtime_args": [...], "framework_args": [...]}`.
    #[default]
    Json,
    /// The full launch command on one line, quoted for a POSIX shell.
    Shell,
    /// The full launch command, one token per line.
    Command,
}

impl OutputFormat {
    fn from_name(name: &str) -> Self {
        match name {
            "shell" => Self::Shell,
            "command" => Self::Command,
            _ => Self::Json,
        }
    }
}

/// Parsed command produced by [`parse_args`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) source: Option<OptionsSource>,
    pub(crate) assignments: Vec<(String, String)>,
    pub(crate) runtime_version: Option<RuntimeVersion>,
    pub(crate) runtime_binary: String,
    pub(crate) entry: Option<String>,
    pub(crate) value_style: ValueStyle,
    pub(crate) format: OutputFormat,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
}

impl ParsedArgs {
    /// Input source after defaulting: stdin, unless only `--set` was given.
    pub(crate) fn resolved_source(&self) -> OptionsSource {
        match &self.source {
            Some(source) => source.clone(),
            None if self.assignments.is_empty() => OptionsSource::Stdin,
            None => OptionsSource::Empty,
        }
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .value_name("FILE")
                .help("Read the merged options object from FILE ('-' for stdin).")
                .value_parser(PathBufValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Set KEY after the input document is loaded.")
                .value_parser(parse_assignment)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("runtime-version")
                .long("runtime-version")
                .value_name("VERSION")
                .help("Assume this host runtime version instead of probing.")
                .value_parser(|value: &str| value.parse::<RuntimeVersion>())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("runtime-binary")
                .long("runtime-binary")
                .value_name("PATH")
                .help("Host runtime executable.")
                .default_value("node")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("entry")
                .long("entry")
                .value_name("PATH")
                .help("Framework entry point placed between the two vectors.")
                .required_if_eq_any([("format", "shell"), ("format", "command")])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("value-style")
                .long("value-style")
                .value_name("STYLE")
                .help("Runtime flag layout: 'separate' or 'joined'.")
                .value_parser([ValueStyle::Separate.as_str(), ValueStyle::Joined.as_str()])
                .default_value(ValueStyle::Separate.as_str())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format: 'json', 'shell' or 'command'.")
                .value_parser(["json", "shell", "command"])
                .default_value("json")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress warnings.")
                .action(ArgAction::SetTrue),
        )
}

/// Splits `KEY=VALUE`, rejecting an empty key.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        Some(_) => Err(format!("missing key in '{raw}'")),
        None => Err(format!("expected KEY=VALUE, found '{raw}'")),
    }
}

/// Parses the command line.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let source = matches.remove_one::<PathBuf>("options").map(|path| {
        if path.as_os_str() == "-" {
            OptionsSource::Stdin
        } else {
            OptionsSource::File(path)
        }
    });
    let assignments: Vec<(String, String)> = matches
        .remove_many::<(String, String)>("set")
        .map(|values| values.collect())
        .unwrap_or_default();
    let value_style = match matches.get_one::<String>("value-style").map(String::as_str) {
        Some("joined") => ValueStyle::Joined,
        _ => ValueStyle::Separate,
    };
    let format = matches
        .get_one::<String>("format")
        .map_or_else(OutputFormat::default, |name| OutputFormat::from_name(name));

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        source,
        assignments,
        runtime_version: matches.remove_one::<RuntimeVersion>("runtime-version"),
        runtime_binary: matches
            .remove_one::<String>("runtime-binary")
            .unwrap_or_else(|| "node".to_owned()),
        entry: matches.remove_one::<String>("entry"),
        value_style,
        format,
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
    })
}
