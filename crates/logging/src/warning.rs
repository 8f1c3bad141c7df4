//! crates/logging/src/warning.rs
//! Non-fatal diagnostics reported while rewriting launch options.

use std::fmt;

/// Category of a non-fatal diagnostic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WarningKind {
    /// A supported but discouraged spelling or flag was translated.
    Deprecation,
    /// Two mutually exclusive forms were supplied and one was discarded.
    Conflict,
}

impl WarningKind {
    /// Label rendered between the program name and the message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deprecation => "deprecated",
            Self::Conflict => "warning",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A warning together with its rendered text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    kind: WarningKind,
    message: String,
}

impl Warning {
    /// Creates a warning of the given kind.
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`WarningKind::Deprecation`] warning.
    #[must_use]
    pub fn deprecation(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Deprecation, message)
    }

    /// Creates a [`WarningKind::Conflict`] warning.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Conflict, message)
    }

    /// Returns the warning category.
    #[must_use]
    pub const fn kind(&self) -> WarningKind {
        self.kind
    }

    /// Returns the message text without any prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
