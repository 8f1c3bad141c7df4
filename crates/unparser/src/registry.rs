//! crates/unparser/src/registry.rs
//! Static registry of long-form host runtime flags.
//!
//! Each entry optionally records the first host version that accepts the
//! flag and the first version that no longer does. Classification for a
//! detected host only counts entries whose bounds include its version, so a
//! flag the host would reject as a bad option stays with the framework.

use crate::version::RuntimeVersion;

/// A runtime flag together with the host versions accepting it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagEntry {
    name: &'static str,
    since: Option<RuntimeVersion>,
    until: Option<RuntimeVersion>,
}

impl FlagEntry {
    /// Flag accepted by every known host version.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            since: None,
            until: None,
        }
    }

    /// Restricts the flag to hosts at or above `version`.
    #[must_use]
    pub const fn since(mut self, version: RuntimeVersion) -> Self {
        self.since = Some(version);
        self
    }

    /// Restricts the flag to hosts below `version`.
    #[must_use]
    pub const fn until(mut self, version: RuntimeVersion) -> Self {
        self.until = Some(version);
        self
    }

    /// Canonical dash-separated name, without leading dashes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// First host version accepting the flag.
    #[must_use]
    pub const fn first_version(&self) -> Option<RuntimeVersion> {
        self.since
    }

    /// First host version that rejects the flag again.
    #[must_use]
    pub const fn removed_in(&self) -> Option<RuntimeVersion> {
        self.until
    }

    /// Reports whether a host at `version` accepts the flag.
    #[must_use]
    pub fn accepts(&self, version: RuntimeVersion) -> bool {
        self.since.is_none_or(|since| version >= since)
            && self.until.is_none_or(|until| version < until)
    }
}

const fn v(major: u32, minor: u32) -> RuntimeVersion {
    RuntimeVersion::new(major, minor, 0)
}

const BUILTIN_FLAGS: &[FlagEntry] = &[
    FlagEntry::new("abort-on-uncaught-exception"),
    FlagEntry::new("debug").until(v(8, 0)),
    FlagEntry::new("debug-brk").until(v(8, 0)),
    FlagEntry::new("debug-port").since(v(7, 6)),
    FlagEntry::new("disallow-code-generation-from-strings").since(v(9, 8)),
    FlagEntry::new("enable-fips").since(v(6, 0)),
    FlagEntry::new("enable-source-maps").since(v(12, 12)),
    FlagEntry::new("experimental-loader").since(v(12, 11)),
    FlagEntry::new("experimental-modules").since(v(8, 5)),
    FlagEntry::new("experimental-policy").since(v(11, 8)),
    FlagEntry::new("experimental-repl-await").since(v(10, 0)),
    FlagEntry::new("experimental-report").since(v(11, 8)),
    FlagEntry::new("experimental-vm-modules").since(v(9, 6)),
    FlagEntry::new("experimental-wasm-modules").since(v(12, 3)),
    FlagEntry::new("experimental-worker").since(v(10, 5)),
    FlagEntry::new("expose-gc"),
    FlagEntry::new("force-fips").since(v(6, 0)),
    FlagEntry::new("frozen-intrinsics").since(v(11, 12)),
    FlagEntry::new("heapsnapshot-signal").since(v(12, 0)),
    FlagEntry::new("http-parser").since(v(11, 4)),
    FlagEntry::new("icu-data-dir"),
    FlagEntry::new("inspect").since(v(6, 3)),
    FlagEntry::new("inspect-brk").since(v(7, 6)),
    FlagEntry::new("inspect-port").since(v(7, 6)),
    FlagEntry::new("max-http-header-size").since(v(11, 6)),
    FlagEntry::new("max-old-space-size"),
    FlagEntry::new("napi-modules").since(v(7, 10)),
    FlagEntry::new("no-deprecation"),
    FlagEntry::new("no-force-async-hooks-checks").since(v(9, 0)),
    FlagEntry::new("no-warnings"),
    FlagEntry::new("openssl-config").since(v(6, 9)),
    FlagEntry::new("pending-deprecation").since(v(8, 0)),
    FlagEntry::new("perf-basic-prof"),
    FlagEntry::new("perf-prof"),
    FlagEntry::new("prof"),
    FlagEntry::new("prof-process").since(v(5, 2)),
    FlagEntry::new("redirect-warnings").since(v(8, 0)),
    FlagEntry::new("stack-size"),
    FlagEntry::new("stack-trace-limit"),
    FlagEntry::new("throw-deprecation"),
    FlagEntry::new("title").since(v(10, 7)),
    FlagEntry::new("tls-cipher-list"),
    FlagEntry::new("tls-max-v1.2").since(v(12, 0)),
    FlagEntry::new("tls-min-v1.0").since(v(12, 0)),
    FlagEntry::new("track-heap-objects"),
    FlagEntry::new("unhandled-rejections").since(v(12, 0)),
    FlagEntry::new("use-bundled-ca").since(v(7, 5)),
    FlagEntry::new("use-openssl-ca").since(v(7, 5)),
    FlagEntry::new("v8-pool-size").since(v(5, 10)),
    FlagEntry::new("zero-fill-buffers"),
];

static BUILTIN: RuntimeFlagRegistry = RuntimeFlagRegistry::new(BUILTIN_FLAGS);

/// Lookup table of runtime flag names.
///
/// Lookups treat `_` and `-` as the same character, matching how the host
/// runtime itself parses its options.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeFlagRegistry {
    entries: &'static [FlagEntry],
}

impl RuntimeFlagRegistry {
    /// Creates a registry over a static flag list.
    #[must_use]
    pub const fn new(entries: &'static [FlagEntry]) -> Self {
        Self { entries }
    }

    /// Registry of the flags known to the supported host runtimes.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Looks up the entry for `name`.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&FlagEntry> {
        self.entries
            .iter()
            .find(|entry| same_flag(entry.name, name))
    }

    /// Reports whether any host version knows `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Reports whether a registered flag is the `no-` negation of `name`.
    #[must_use]
    pub fn contains_negation_of(&self, name: &str) -> bool {
        self.negation_of(name).is_some()
    }

    /// Reports whether a host at `version` accepts the `no-` negation of `name`.
    #[must_use]
    pub fn accepts_negation_of(&self, name: &str, version: RuntimeVersion) -> bool {
        self.negation_of(name).is_some_and(|entry| entry.accepts(version))
    }

    /// Reports whether a host at `version` accepts `name`.
    ///
    /// Unregistered names are never accepted.
    #[must_use]
    pub fn accepts(&self, name: &str, version: RuntimeVersion) -> bool {
        self.entry(name).is_some_and(|entry| entry.accepts(version))
    }

    /// Iterates the registered flags.
    pub fn iter(&self) -> impl Iterator<Item = &FlagEntry> {
        self.entries.iter()
    }

    fn negation_of(&self, name: &str) -> Option<&FlagEntry> {
        if name.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| {
            entry
                .name
                .strip_prefix("no-")
                .is_some_and(|positive| same_flag(positive, name))
        })
    }
}

fn same_flag(registered: &str, candidate: &str) -> bool {
    registered.len() == candidate.len()
        && registered
            .bytes()
            .zip(candidate.bytes())
            .all(|(left, right)| normalise(left) == normalise(right))
}

const fn normalise(byte: u8) -> u8 {
    if byte == b'_' { b'-' } else { byte }
}
