//! Host runtime detection seam.
//!
//! The rules only need two facts about the runtime that will launch the
//! framework: its version and whether it accepts a given flag. Both come from a
//! [`RuntimeProbe`] so the core stays free of process spawning; the CLI
//! supplies a probe that asks the real binary.

use crate::registry::RuntimeFlagRegistry;
use crate::version::RuntimeVersion;

/// Source of facts about the host runtime.
pub trait RuntimeProbe {
    /// Version of the host runtime.
    fn version(&self) -> RuntimeVersion;

    /// Reports whether the host runtime accepts `name` as a flag.
    ///
    /// Defaults to the builtin registry's answer for [`RuntimeProbe::version`].
    fn accepts_flag(&self, name: &str) -> bool {
        RuntimeFlagRegistry::builtin().accepts(name, self.version())
    }
}

impl<P: RuntimeProbe + ?Sized> RuntimeProbe for &P {
    fn version(&self) -> RuntimeVersion {
        (**self).version()
    }

    fn accepts_flag(&self, name: &str) -> bool {
        (**self).accepts_flag(name)
    }
}

impl<P: RuntimeProbe + ?Sized> RuntimeProbe for Box<P> {
    fn version(&self) -> RuntimeVersion {
        (**self).version()
    }

    fn accepts_flag(&self, name: &str) -> bool {
        (**self).accepts_flag(name)
    }
}

/// Probe reporting a fixed version.
///
/// # Examples
///
/// ```
/// use unparser::{RuntimeProbe, RuntimeVersion, StaticProbe};
///
/// let probe = StaticProbe::new(RuntimeVersion::new(10, 0, 0));
/// assert!(probe.accepts_flag("inspect"));
/// assert!(!probe.accepts_flag("debug"));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StaticProbe {
    version: RuntimeVersion,
}

impl StaticProbe {
    /// Creates a probe reporting `version`.
    #[must_use]
    pub const fn new(version: RuntimeVersion) -> Self {
        Self { version }
    }
}

impl From<RuntimeVersion> for StaticProbe {
    fn from(version: RuntimeVersion) -> Self {
        Self::new(version)
    }
}

impl RuntimeProbe for StaticProbe {
    fn version(&self) -> RuntimeVersion {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Permissive;

    impl RuntimeProbe for Permissive {
        fn version(&self) -> RuntimeVersion {
            RuntimeVersion::new(12, 0, 0)
        }

        fn accepts_flag(&self, _name: &str) -> bool {
            true
        }
    }

    #[test]
    fn static_probe_consults_registry() {
        let old = StaticProbe::new(RuntimeVersion::new(6, 11, 0));
        assert!(old.accepts_flag("debug-brk"));
        assert!(!old.accepts_flag("inspect-brk"));
        assert_eq!(old.version().major(), 6);
    }

    fn accepts_debug<P: RuntimeProbe>(probe: P) -> bool {
        probe.accepts_flag("debug")
    }

    #[test]
    fn overrides_reach_through_references() {
        let probe = Permissive;
        assert!(accepts_debug(&probe));

        let boxed: Box<dyn RuntimeProbe> = Box::new(Permissive);
        assert!(accepts_debug(boxed));
        assert!(!accepts_debug(StaticProbe::new(RuntimeVersion::new(12, 0, 0))));
    }
}
