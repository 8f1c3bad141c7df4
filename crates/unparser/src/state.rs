//! crates/unparser/src/state.rs
//! Classified option state shared by the rule pass and the serializer.
//!
//! Classification tags every ordinary key with an [`Owner`] and splits the
//! option set into a runtime map and a framework map. Compatibility rules may
//! then rewrite that state, but only through the mutators on
//! [`ClassifiedState`], each of which appends an [`AuditEntry`] naming the
//! rule and the [`Transition`] it performed.

use std::fmt;

use crate::classify::{Owner, classify_in};
use crate::options::{LogicalOptions, OptionMap};
use crate::registry::RuntimeFlagRegistry;
use crate::rules::RuleName;
use crate::value::OptionValue;
use crate::version::RuntimeVersion;

/// An option tagged with its destination.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedOption {
    /// Destination chosen by the classifier.
    pub owner: Owner,
    /// Option name as supplied.
    pub key: String,
    /// Option value as supplied.
    pub value: OptionValue,
}

/// Tags every ordinary key of `options` for a host at `version`, using the
/// builtin runtime registry.
///
/// Reserved keys (positionals and pass-through tokens) are not tagged; they
/// always travel with the framework.
#[must_use]
pub fn partition(options: &LogicalOptions, version: RuntimeVersion) -> Vec<TaggedOption> {
    partition_in(RuntimeFlagRegistry::builtin(), version, options)
}

/// Tags every ordinary key of `options` for a host at `version`, using
/// `registry`.
#[must_use]
pub fn partition_in(
    registry: &RuntimeFlagRegistry,
    version: RuntimeVersion,
    options: &LogicalOptions,
) -> Vec<TaggedOption> {
    options
        .options()
        .iter()
        .map(|(key, value)| {
            let owner = classify_in(registry, version, key);
            logging::trace_classify!(key, owner = owner.as_str(), "classified option");
            TaggedOption {
                owner,
                key: key.to_owned(),
                value: value.clone(),
            }
        })
        .collect()
}

/// A single change made by a compatibility rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// `key` now holds `value` in the `owner` map.
    Set {
        /// Map written to.
        owner: Owner,
        /// Key written.
        key: String,
        /// New value.
        value: OptionValue,
    },
    /// `key` was deleted from the `owner` map.
    Removed {
        /// Map deleted from.
        owner: Owner,
        /// Key deleted.
        key: String,
        /// Value it held.
        value: OptionValue,
    },
    /// The value under `from` moved to `to` within the `owner` map.
    Renamed {
        /// Map holding both keys.
        owner: Owner,
        /// Former key.
        from: String,
        /// New key.
        to: String,
    },
    /// The leading framework positional was consumed.
    PositionalTaken {
        /// The consumed token.
        token: String,
    },
    /// The positional list of `owner` was replaced.
    PositionalSet {
        /// Side whose positionals changed.
        owner: Owner,
        /// Replacement list.
        tokens: Vec<String>,
    },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { owner, key, value } => write!(f, "set {owner} '{key}' to '{value}'"),
            Self::Removed { owner, key, .. } => write!(f, "removed {owner} '{key}'"),
            Self::Renamed { owner, from, to } => write!(f, "renamed {owner} '{from}' to '{to}'"),
            Self::PositionalTaken { token } => write!(f, "took positional '{token}'"),
            Self::PositionalSet { owner, tokens } => {
                write!(f, "set {owner} positionals to [{}]", tokens.join(", "))
            }
        }
    }
}

/// Audit log record: which rule performed which transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditEntry {
    /// Rule responsible for the change.
    pub rule: RuleName,
    /// The change itself.
    pub transition: Transition,
}

/// Options split by destination, plus the audit log of rule changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedState {
    runtime: OptionMap,
    framework: OptionMap,
    runtime_positional: Vec<String>,
    framework_positional: Vec<String>,
    passthrough: Vec<String>,
    audit: Vec<AuditEntry>,
}

impl ClassifiedState {
    /// Classifies a copy of `options` for a host at `version` with the builtin
    /// runtime registry.
    #[must_use]
    pub fn classify(options: &LogicalOptions, version: RuntimeVersion) -> Self {
        Self::classify_in(RuntimeFlagRegistry::builtin(), version, options)
    }

    /// Classifies a copy of `options` for a host at `version` with `registry`.
    #[must_use]
    pub fn classify_in(
        registry: &RuntimeFlagRegistry,
        version: RuntimeVersion,
        options: &LogicalOptions,
    ) -> Self {
        let mut state = Self {
            framework_positional: options.positional().to_vec(),
            passthrough: options.passthrough().to_vec(),
            ..Self::default()
        };
        for tagged in partition_in(registry, version, options) {
            state.map_mut(tagged.owner).insert(tagged.key, tagged.value);
        }
        state
    }

    /// Options destined for the host runtime.
    #[must_use]
    pub const fn runtime(&self) -> &OptionMap {
        &self.runtime
    }

    /// Options destined for the framework.
    #[must_use]
    pub const fn framework(&self) -> &OptionMap {
        &self.framework
    }

    /// The map owned by `owner`.
    #[must_use]
    pub const fn map(&self, owner: Owner) -> &OptionMap {
        match owner {
            Owner::Runtime => &self.runtime,
            Owner::Framework => &self.framework,
        }
    }

    /// Positionals placed before every runtime flag.
    #[must_use]
    pub fn runtime_positional(&self) -> &[String] {
        &self.runtime_positional
    }

    /// Positionals handed to the framework.
    #[must_use]
    pub fn framework_positional(&self) -> &[String] {
        &self.framework_positional
    }

    /// Tokens the framework receives after `--`.
    #[must_use]
    pub fn passthrough(&self) -> &[String] {
        &self.passthrough
    }

    /// Every change made since classification, in order.
    #[must_use]
    pub fn audit(&self) -> &[AuditEntry] {
        &self.audit
    }

    /// Side holding `key`, if any.
    #[must_use]
    pub fn owner_of(&self, key: &str) -> Option<Owner> {
        [Owner::Runtime, Owner::Framework]
            .into_iter()
            .find(|owner| self.map(*owner).contains_key(key))
    }

    fn map_mut(&mut self, owner: Owner) -> &mut OptionMap {
        match owner {
            Owner::Runtime => &mut self.runtime,
            Owner::Framework => &mut self.framework,
        }
    }

    fn record(&mut self, rule: RuleName, transition: Transition) {
        logging::trace_rule!(rule = rule.as_str(), "{transition}");
        self.audit.push(AuditEntry { rule, transition });
    }

    /// Stores `value` under `key`. Writing the value already present is not
    /// recorded.
    pub(crate) fn set(
        &mut self,
        rule: RuleName,
        owner: Owner,
        key: &str,
        value: impl Into<OptionValue>,
    ) {
        let value = value.into();
        let previous = self.map_mut(owner).insert(key, value.clone());
        if previous.as_ref() != Some(&value) {
            self.record(
                rule,
                Transition::Set {
                    owner,
                    key: key.to_owned(),
                    value,
                },
            );
        }
    }

    /// Deletes `key`, returning its value when it was present.
    pub(crate) fn remove(
        &mut self,
        rule: RuleName,
        owner: Owner,
        key: &str,
    ) -> Option<OptionValue> {
        let value = self.map_mut(owner).remove(key)?;
        self.record(
            rule,
            Transition::Removed {
                owner,
                key: key.to_owned(),
                value: value.clone(),
            },
        );
        Some(value)
    }

    /// Moves the value under `from` to `to`. A new `to` key is appended; an
    /// existing one is overwritten in place. Returns `false` when `from` is
    /// missing.
    pub(crate) fn rename(&mut self, rule: RuleName, owner: Owner, from: &str, to: &str) -> bool {
        let map = self.map_mut(owner);
        let Some(value) = map.remove(from) else {
            return false;
        };
        map.insert(to, value);
        self.record(
            rule,
            Transition::Renamed {
                owner,
                from: from.to_owned(),
                to: to.to_owned(),
            },
        );
        true
    }

    /// Removes and returns the first framework positional.
    pub(crate) fn take_first_positional(&mut self, rule: RuleName) -> Option<String> {
        if self.framework_positional.is_empty() {
            return None;
        }
        let token = self.framework_positional.remove(0);
        self.record(
            rule,
            Transition::PositionalTaken {
                token: token.clone(),
            },
        );
        Some(token)
    }

    /// Replaces the runtime positional list.
    pub(crate) fn set_runtime_positional(&mut self, rule: RuleName, tokens: Vec<String>) {
        self.runtime_positional.clone_from(&tokens);
        self.record(
            rule,
            Transition::PositionalSet {
                owner: Owner::Runtime,
                tokens,
            },
        );
    }
}
