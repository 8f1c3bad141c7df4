//! Host runtime version numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseVersionError;

/// Major version from which the host runtime launches its debugger with
/// `inspect` rather than the legacy `debug` command.
pub const MODERN_DEBUGGER_MAJOR: u32 = 8;

/// `major.minor.patch` version of the host runtime.
///
/// Displays with the leading `v` the runtime itself prints (`v10.15.3`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RuntimeVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl RuntimeVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Major component.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    /// Patch component.
    #[must_use]
    pub const fn patch(self) -> u32 {
        self.patch
    }

    /// Reports whether the runtime launches its debugger as `inspect`.
    #[must_use]
    pub const fn has_modern_debugger(self) -> bool {
        self.major >= MODERN_DEBUGGER_MAJOR
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for RuntimeVersion {
    type Err = ParseVersionError;

    /// Accepts `v10.15.3`, `10.15.3`, `10.15` and `10`; pre-release and build
    /// suffixes (`-nightly2019`, `+build`) are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unprefixed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        let core = unprefixed
            .split(['-', '+'])
            .next()
            .unwrap_or(unprefixed);
        if core.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let mut components = [0_u32; 3];
        for (index, component) in core.split('.').enumerate() {
            let slot = components
                .get_mut(index)
                .ok_or_else(|| ParseVersionError::TooManyComponents {
                    input: input.to_owned(),
                })?;
            *slot = component
                .parse()
                .map_err(|_| ParseVersionError::InvalidComponent {
                    input: input.to_owned(),
                    component: component.to_owned(),
                })?;
        }

        let [major, minor, patch] = components;
        Ok(Self::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_runtime_banner() {
        let version: RuntimeVersion = "v10.15.3\n".parse().unwrap();
        assert_eq!(version, RuntimeVersion::new(10, 15, 3));
        assert_eq!(version.to_string(), "v10.15.3");
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!("12".parse(), Ok(RuntimeVersion::new(12, 0, 0)));
        assert_eq!("7.6".parse(), Ok(RuntimeVersion::new(7, 6, 0)));
    }

    #[test]
    fn ignores_prerelease_suffix() {
        assert_eq!(
            "v13.0.0-nightly20190801".parse(),
            Ok(RuntimeVersion::new(13, 0, 0))
        );
    }

    #[test]
    fn rejects_malformed_versions() {
        assert_eq!("".parse::<RuntimeVersion>(), Err(ParseVersionError::Empty));
        assert_eq!("v".parse::<RuntimeVersion>(), Err(ParseVersionError::Empty));
        assert!(matches!(
            "10.x".parse::<RuntimeVersion>(),
            Err(ParseVersionError::InvalidComponent { component, .. }) if component == "x"
        ));
        assert!(matches!(
            "1.2.3.4".parse::<RuntimeVersion>(),
            Err(ParseVersionError::TooManyComponents { .. })
        ));
        assert!(matches!(
            "10..1".parse::<RuntimeVersion>(),
            Err(ParseVersionError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn debugger_threshold() {
        assert!(!RuntimeVersion::new(7, 10, 1).has_modern_debugger());
        assert!(RuntimeVersion::new(8, 0, 0).has_modern_debugger());
    }

    #[test]
    fn orders_numerically() {
        assert!(RuntimeVersion::new(10, 0, 0) > RuntimeVersion::new(9, 11, 2));
        assert!(RuntimeVersion::new(6, 3, 0) < RuntimeVersion::new(6, 10, 0));
    }
}
