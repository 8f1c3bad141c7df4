//! crates/cli/src/output.rs
//! Renders the unparsed vectors to standard output.

use std::borrow::Cow;
use std::io::Write;

use logging::Warning;
use serde::Serialize;
use unparser::UnparsedArgs;

use crate::arguments::OutputFormat;
use crate::error::CliError;

/// Launch command pieces needed by the command-line formats.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Launch<'a> {
    pub(crate) runtime_binary: &'a str,
    pub(crate) entry: Option<&'a str>,
}

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    runtime_args: &'a [String],
    framework_args: &'a [String],
    warnings: &'a [Warning],
}

/// Writes `args` to `out` in `format`. Only the JSON format carries `warnings`.
pub(crate) fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    args: &UnparsedArgs,
    warnings: &[Warning],
    launch: Launch<'_>,
) -> Result<(), CliError> {
    match (format, launch.entry) {
        (OutputFormat::Json, _) | (_, None) => {
            let report = Report {
                runtime_args: &args.runtime_args,
                framework_args: &args.framework_args,
                warnings,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out).map_err(CliError::Write)
        }
        (OutputFormat::Shell, Some(entry)) => {
            let line = args
                .command_line(launch.runtime_binary, entry)
                .iter()
                .map(|token| shell_quote(token))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}").map_err(CliError::Write)
        }
        (OutputFormat::Command, Some(entry)) => {
            for token in args.command_line(launch.runtime_binary, entry) {
                writeln!(out, "{token}").map_err(CliError::Write)?;
            }
            Ok(())
        }
    }
}

/// Quotes `token` for a POSIX shell when it contains anything but safe characters.
fn shell_quote(token: &str) -> Cow<'_, str> {
    let safe = !token.is_empty()
        && token.bytes().all(|byte| {
            byte.is_ascii_alphanumeric() || b"_@%+=:,./-".contains(&byte)
        });
    if safe {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("'{}'", token.replace('\'', r"'\''")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UnparsedArgs {
        UnparsedArgs {
            runtime_args: vec!["--inspect".to_owned()],
            framework_args: vec!["my spec.js".to_owned(), "--grep".to_owned(), "it's".to_owned()],
        }
    }

    fn rendered(format: OutputFormat, entry: Option<&str>) -> String {
        let mut out = Vec::new();
        let launch = Launch {
            runtime_binary: "node",
            entry,
        };
        let warnings = [Warning::deprecation("\"-gc\" is deprecated")];
        render(&mut out, format, &sample(), &warnings, launch).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quoting() {
        assert_eq!(shell_quote("--timeout"), "--timeout");
        assert_eq!(shell_quote("0.0.0.0:9229"), "0.0.0.0:9229");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote("$HOME"), "'$HOME'");
    }

    #[test]
    fn json_output_is_pretty_object() {
        let text = rendered(OutputFormat::Json, None);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["runtime_args"][0], "--inspect");
        assert_eq!(value["framework_args"][1], "--grep");
        assert_eq!(
            value["warnings"],
            serde_json::json!([{"kind": "deprecation", "message": "\"-gc\" is deprecated"}])
        );
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn shell_output_is_one_quoted_line() {
        assert_eq!(
            rendered(OutputFormat::Shell, Some("bin/run.js")),
            "node --inspect bin/run.js 'my spec.js' --grep 'it'\\''s'\n"
        );
    }

    #[test]
    fn command_output_is_one_token_per_line() {
        assert_eq!(
            rendered(OutputFormat::Command, Some("bin/run.js")),
            "node\n--inspect\nbin/run.js\nmy spec.js\n--grep\nit's\n"
        );
    }
}
