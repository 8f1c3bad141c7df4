//! crates/cli/src/input.rs
//! Loads the merged options object and applies `--set` assignments.

use std::fs;
use std::io::Read;

use unparser::{LogicalOptions, OptionValue};

use crate::arguments::OptionsSource;
use crate::error::CliError;

/// Reads the options document from `source` and applies `assignments` in order.
///
/// Blank input counts as an empty object so `--options -` can be combined
/// with `--set` on an empty pipe.
pub(crate) fn load_options<R: Read>(
    source: &OptionsSource,
    stdin: R,
    assignments: &[(String, String)],
) -> Result<LogicalOptions, CliError> {
    let (origin, text) = match source {
        OptionsSource::Stdin => ("<stdin>".to_owned(), read_stdin(stdin)?),
        OptionsSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            (path.display().to_string(), text)
        }
        OptionsSource::Empty => (String::new(), String::new()),
    };

    let mut options = if text.trim().is_empty() {
        LogicalOptions::new()
    } else {
        LogicalOptions::from_json_str(&text)
            .map_err(|source| CliError::Options { origin, source })?
    };

    for (key, raw) in assignments {
        options
            .set(key.as_str(), assignment_value(raw))
            .map_err(|source| CliError::Options {
                origin: format!("--set {key}"),
                source,
            })?;
    }
    Ok(options)
}

fn read_stdin<R: Read>(mut stdin: R) -> Result<String, CliError> {
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(CliError::Stdin)?;
    Ok(text)
}

/// Interprets an assignment value as JSON, falling back to a plain string.
///
/// `true`, `false`, `null`, numbers, arrays and objects keep their JSON
/// meaning; anything else (`dot`, `127.0.0.1:9229`) is taken verbatim.
fn assignment_value(raw: &str) -> OptionValue {
    serde_json::from_str(raw).unwrap_or_else(|_| OptionValue::String(raw.to_owned()))
}
