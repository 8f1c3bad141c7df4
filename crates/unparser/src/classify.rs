//! crates/unparser/src/classify.rs
//! Decides whether an option belongs to the host runtime or to the framework.
//!
//! Classification is total: every name, including the empty string, maps to
//! exactly one [`Owner`]. Anything not recognised as a runtime flag stays with
//! the framework.

use std::borrow::Cow;
use std::fmt;

use crate::registry::RuntimeFlagRegistry;
use crate::version::RuntimeVersion;

/// Prefix passing an option straight through to the V8 engine.
pub const V8_PREFIX: &str = "v8-";

/// "List all V8 options". Begins with [`V8_PREFIX`] but is a runtime flag in
/// its own right, so the prefix is never trimmed from it.
pub const V8_OPTIONS: &str = "v8-options";

/// Debugger flags, always owned by the runtime.
pub const DEBUG_FLAGS: [&str; 4] = ["debug", "debug-brk", "inspect", "inspect-brk"];

/// Names the runtime also understands but the framework keeps for itself.
const FRAMEWORK_RESERVED: [&str; 2] = ["require", "r"];

/// Exact names recognised without a registry lookup.
const FIXED_FAMILY: [&str; 6] = [
    "preserve-symlinks",
    "preserve-symlinks-main",
    "gc",
    "gc-global",
    "es-staging",
    "use-strict",
];

/// Destination of an option.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Owner {
    /// Passed to the host runtime ahead of the framework entry point.
    Runtime,
    /// Passed to the framework after its entry point.
    Framework,
}

impl Owner {
    /// Lower-case name used in traces and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Framework => "framework",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reports whether `name` is a host runtime flag on any supported host version,
/// using the builtin registry.
///
/// # Examples
///
/// ```
/// use unparser::is_runtime_flag;
///
/// assert!(is_runtime_flag("inspect-brk"));
/// assert!(is_runtime_flag("v8-stack-size"));
/// assert!(is_runtime_flag("no-warnings"));
/// assert!(!is_runtime_flag("require"));
/// assert!(!is_runtime_flag("reporter"));
/// assert!(!is_runtime_flag(""));
/// ```
#[must_use]
pub fn is_runtime_flag(name: &str) -> bool {
    runtime_flag(RuntimeFlagRegistry::builtin(), None, name)
}

/// Reports whether a host at `version` takes `name` as a runtime flag
/// according to `registry`.
///
/// Registered flags count only inside their version bounds. Debugger flags,
/// the pattern families and the `v8-` escape prefix do not depend on the
/// version.
///
/// # Examples
///
/// ```
/// use unparser::{RuntimeFlagRegistry, RuntimeVersion, is_runtime_flag_in};
///
/// let registry = RuntimeFlagRegistry::builtin();
/// assert!(!is_runtime_flag_in(registry, RuntimeVersion::new(8, 0, 0), "title"));
/// assert!(is_runtime_flag_in(registry, RuntimeVersion::new(10, 7, 0), "title"));
/// assert!(is_runtime_flag_in(registry, RuntimeVersion::new(4, 0, 0), "v8-stack-size"));
/// ```
#[must_use]
pub fn is_runtime_flag_in(
    registry: &RuntimeFlagRegistry,
    version: RuntimeVersion,
    name: &str,
) -> bool {
    runtime_flag(registry, Some(version), name)
}

/// Owner of `name` on any supported host version, using the builtin registry.
#[must_use]
pub fn classify(name: &str) -> Owner {
    owner(is_runtime_flag(name))
}

/// Owner of `name` on a host at `version` according to `registry`.
#[must_use]
pub fn classify_in(registry: &RuntimeFlagRegistry, version: RuntimeVersion, name: &str) -> Owner {
    owner(is_runtime_flag_in(registry, version, name))
}

/// Spelling of a runtime-owned key on the runtime command line.
///
/// The [`V8_PREFIX`] is trimmed (`v8-stack-size` becomes `stack-size`,
/// `no-v8-lazy` becomes `no-lazy`) unless the key is [`V8_OPTIONS`]. Other
/// names are returned unchanged.
#[must_use]
pub fn runtime_flag_name(name: &str) -> Cow<'_, str> {
    match name.strip_prefix("no-") {
        Some(positive) => match trimmed_v8(positive) {
            Some(suffix) => Cow::Owned(format!("no-{suffix}")),
            None => Cow::Borrowed(name),
        },
        None => Cow::Borrowed(trimmed_v8(name).unwrap_or(name)),
    }
}

const fn owner(runtime: bool) -> Owner {
    if runtime { Owner::Runtime } else { Owner::Framework }
}

/// `None` means any supported host version.
fn runtime_flag(
    registry: &RuntimeFlagRegistry,
    version: Option<RuntimeVersion>,
    name: &str,
) -> bool {
    if FRAMEWORK_RESERVED.contains(&name) {
        return false;
    }
    if is_known(registry, version, name) {
        return true;
    }
    match name.strip_prefix("no-") {
        Some(positive) => {
            !FRAMEWORK_RESERVED.contains(&positive) && is_known(registry, version, positive)
        }
        None => match version {
            Some(version) => registry.accepts_negation_of(name, version),
            None => registry.contains_negation_of(name),
        },
    }
}

fn is_known(registry: &RuntimeFlagRegistry, version: Option<RuntimeVersion>, name: &str) -> bool {
    let registered = match version {
        Some(version) => registry.accepts(name, version),
        None => registry.contains(name),
    };
    DEBUG_FLAGS.contains(&name) || registered || matches_family(name) || v8_suffix(name).is_some()
}

fn trimmed_v8(name: &str) -> Option<&str> {
    v8_suffix(name).filter(|_| !is_v8_options(name))
}

fn matches_family(name: &str) -> bool {
    let dashed = dashed(name);
    let name: &str = &dashed;
    FIXED_FAMILY.contains(&name)
        || name == "harmony"
        || name.starts_with("harmony-")
        || name.strip_prefix("trace-").is_some_and(|rest| !rest.is_empty())
}

fn v8_suffix(name: &str) -> Option<&str> {
    name.strip_prefix(V8_PREFIX)
        .or_else(|| name.strip_prefix("v8_"))
        .filter(|suffix| !suffix.is_empty())
}

fn is_v8_options(name: &str) -> bool {
    dashed(name) == V8_OPTIONS
}

fn dashed(name: &str) -> Cow<'_, str> {
    if name.contains('_') {
        Cow::Owned(name.replace('_', "-"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debugger_flags_are_runtime_owned() {
        for flag in DEBUG_FLAGS {
            assert_eq!(classify(flag), Owner::Runtime, "{flag}");
        }
    }

    #[test]
    fn pattern_families() {
        for name in [
            "preserve-symlinks",
            "preserve_symlinks_main",
            "harmony",
            "harmony-async-iteration",
            "harmony_shipping",
            "trace-warnings",
            "trace_deopt",
            "gc",
            "gc-global",
            "gc_global",
            "es-staging",
            "use_strict",
        ] {
            assert!(is_runtime_flag(name), "{name}");
        }
    }

    #[test]
    fn families_are_anchored() {
        for name in ["trace", "trace-", "my-harmony", "no-gc-globals", "strict"] {
            assert!(!is_runtime_flag(name), "{name}");
        }
    }

    #[test]
    fn framework_reserved_names_win() {
        assert!(!is_runtime_flag("require"));
        assert!(!is_runtime_flag("r"));
        assert!(!is_runtime_flag("no-require"));
    }

    #[test]
    fn negations_classify_their_positive_form() {
        assert!(is_runtime_flag("no-harmony"));
        assert!(is_runtime_flag("no-expose-gc"));
        assert!(is_runtime_flag("no-warnings"));
        assert!(is_runtime_flag("warnings"));
        assert!(!is_runtime_flag("no-colors"));
        assert!(!is_runtime_flag("no-"));
    }

    #[test]
    fn v8_escape_hatch() {
        assert!(is_runtime_flag("v8-something"));
        assert!(is_runtime_flag("v8_max_inlined"));
        assert!(is_runtime_flag(V8_OPTIONS));
        assert!(!is_runtime_flag("v8-"));
        assert!(!is_runtime_flag("v8_"));
        assert!(!is_runtime_flag("v8"));
    }

    #[test]
    fn empty_and_unknown_names_stay_with_framework() {
        assert_eq!(classify(""), Owner::Framework);
        assert_eq!(classify("reporter"), Owner::Framework);
        assert_eq!(classify("timeout"), Owner::Framework);
        assert_eq!(classify("t"), Owner::Framework);
    }

    #[test]
    fn runtime_names_trim_v8_prefix() {
        assert_eq!(runtime_flag_name("v8-something"), "something");
        assert_eq!(runtime_flag_name("v8_max_inlined"), "max_inlined");
        assert_eq!(runtime_flag_name(V8_OPTIONS), V8_OPTIONS);
        assert_eq!(runtime_flag_name("v8_options"), "v8_options");
        assert_eq!(runtime_flag_name("v8-"), "v8-");
        assert_eq!(runtime_flag_name("inspect"), "inspect");
    }

    #[test]
    fn runtime_names_trim_v8_prefix_after_negation() {
        assert_eq!(runtime_flag_name("no-v8-lazy"), "no-lazy");
        assert_eq!(runtime_flag_name("no-v8_opt"), "no-opt");
        assert_eq!(runtime_flag_name("no-v8-options"), "no-v8-options");
        assert_eq!(runtime_flag_name("no-warnings"), "no-warnings");
        assert_eq!(runtime_flag_name("no-"), "no-");
    }

    #[test]
    fn custom_registry_extends_classification() {
        use crate::registry::FlagEntry;

        static FLAGS: [FlagEntry; 1] = [FlagEntry::new("cpu-prof")];
        let registry = RuntimeFlagRegistry::new(&FLAGS);
        let version = RuntimeVersion::new(12, 0, 0);

        assert!(is_runtime_flag_in(&registry, version, "cpu-prof"));
        assert!(!is_runtime_flag_in(&registry, version, "max-old-space-size"));
        assert!(is_runtime_flag_in(&registry, version, "inspect"));
        assert!(!is_runtime_flag("cpu-prof"));
    }

    #[test]
    fn registered_flags_follow_host_version() {
        let registry = RuntimeFlagRegistry::builtin();
        let v8 = RuntimeVersion::new(8, 0, 0);
        let v12 = RuntimeVersion::new(12, 12, 0);

        assert_eq!(classify_in(registry, v8, "title"), Owner::Framework);
        assert_eq!(classify_in(registry, v8, "enable-source-maps"), Owner::Framework);
        assert_eq!(classify_in(registry, v12, "title"), Owner::Runtime);
        assert_eq!(classify_in(registry, v12, "enable-source-maps"), Owner::Runtime);
        assert_eq!(classify("title"), Owner::Runtime);

        assert_eq!(classify_in(registry, v8, "no-force-async-hooks-checks"), Owner::Framework);
        assert_eq!(classify_in(registry, v8, "force-async-hooks-checks"), Owner::Framework);
        assert_eq!(classify_in(registry, v12, "force-async-hooks-checks"), Owner::Runtime);
    }

    #[test]
    fn version_independent_names_ignore_host_version() {
        let registry = RuntimeFlagRegistry::builtin();
        let old = RuntimeVersion::new(4, 0, 0);
        let modern = RuntimeVersion::new(12, 0, 0);

        for name in ["debug", "debug-brk", "inspect", "inspect-brk"] {
            assert_eq!(classify_in(registry, old, name), Owner::Runtime, "{name}");
            assert_eq!(classify_in(registry, modern, name), Owner::Runtime, "{name}");
        }
        for name in ["v8-stack-size", "v8-options", "harmony", "trace-deopt", "gc"] {
            assert_eq!(classify_in(registry, old, name), Owner::Runtime, "{name}");
        }
        assert_eq!(classify_in(registry, old, "require"), Owner::Framework);
    }
}
