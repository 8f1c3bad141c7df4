//! Framework option spellings.
//!
//! The framework accepts several spellings for many of its options (`-t`,
//! `--timeouts` and `--timeout` all set the test timeout). The unparser emits
//! one preferred spelling per option, the canonical long name, so the rebuilt
//! command line never repeats an option under two names.

/// Canonical option name with the other spellings the framework accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AliasEntry {
    canonical: &'static str,
    aliases: &'static [&'static str],
}

impl AliasEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }

    /// Canonical name.
    #[must_use]
    pub const fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// Alternative spellings, in declaration order.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Spelling emitted on output.
    #[must_use]
    pub const fn preferred(&self) -> &'static str {
        self.canonical
    }

    /// Every accepted spelling, canonical first.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }

    /// Reports whether `name` is one of the entry's spellings.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        self.spellings().any(|spelling| spelling == name)
    }
}

const BUILTIN_ALIASES: &[AliasEntry] = &[
    AliasEntry::new("async-only", &["A"]),
    AliasEntry::new("bail", &["b"]),
    AliasEntry::new("color", &["c", "colors"]),
    AliasEntry::new("extension", &["watch-extensions"]),
    AliasEntry::new("fgrep", &["f"]),
    AliasEntry::new("global", &["globals"]),
    AliasEntry::new("grep", &["g"]),
    AliasEntry::new("growl", &["G"]),
    AliasEntry::new("ignore", &["exclude"]),
    AliasEntry::new("invert", &["i"]),
    AliasEntry::new("no-colors", &["C"]),
    AliasEntry::new("reporter", &["R"]),
    AliasEntry::new("reporter-option", &["reporter-options", "O"]),
    AliasEntry::new("require", &["r"]),
    AliasEntry::new("slow", &["s"]),
    AliasEntry::new("sort", &["S"]),
    AliasEntry::new("timeout", &["t", "timeouts"]),
    AliasEntry::new("ui", &["u"]),
    AliasEntry::new("watch", &["w"]),
];

static BUILTIN: AliasTable = AliasTable::new(BUILTIN_ALIASES);

/// Lookup table from any accepted spelling to its [`AliasEntry`].
#[derive(Clone, Copy, Debug)]
pub struct AliasTable {
    entries: &'static [AliasEntry],
}

impl AliasTable {
    /// Creates a table over a static entry list.
    #[must_use]
    pub const fn new(entries: &'static [AliasEntry]) -> Self {
        Self { entries }
    }

    /// The framework's own alias table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Entry owning `name`, whichever spelling it is.
    #[must_use]
    pub fn entry_for(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|entry| entry.accepts(name))
    }

    /// Canonical name for `name`, or `None` when the table does not know it.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        self.entry_for(name).map(AliasEntry::canonical)
    }

    /// Spelling to emit for `name`; unknown names are returned unchanged.
    #[must_use]
    pub fn preferred_spelling<'a>(&self, name: &'a str) -> &'a str {
        self.entry_for(name).map_or(name, |entry| entry.preferred())
    }

    /// Iterates the entries.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }
}
