use thiserror::Error;

/// Error produced while building [`LogicalOptions`](crate::LogicalOptions) from external input.
///
/// The unparser itself never fails; these errors only arise at the loading edge.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The input was not valid JSON or not a JSON object.
    #[error("failed to read options: {0}")]
    Json(#[from] serde_json::Error),
    /// A reserved key held something other than a list of tokens.
    #[error("reserved key '{key}' must hold a list of tokens, found {found}")]
    ReservedKey {
        /// The reserved key (`_` or `--`).
        key: &'static str,
        /// Kind of value that was supplied instead.
        found: &'static str,
    },
    /// A reserved list contained a list or object instead of a scalar token.
    #[error("reserved key '{key}' cannot hold a nested {found} at index {index}")]
    NestedToken {
        /// The reserved key (`_` or `--`).
        key: &'static str,
        /// Position of the offending element.
        index: usize,
        /// Kind of value that was supplied.
        found: &'static str,
    },
}

/// Error returned when a host runtime version string cannot be parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseVersionError {
    /// The input was empty or only whitespace.
    #[error("runtime version is empty")]
    Empty,
    /// A dotted component was not a decimal number.
    #[error("invalid component '{component}' in runtime version '{input}'")]
    InvalidComponent {
        /// Full input text.
        input: String,
        /// The offending component.
        component: String,
    },
    /// More than `major.minor.patch` was supplied.
    #[error("too many components in runtime version '{input}'")]
    TooManyComponents {
        /// Full input text.
        input: String,
    },
}
