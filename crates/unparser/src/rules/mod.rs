//! Compatibility rules applied between classification and serialization.
//!
//! Rules run in the fixed order of [`RULE_ORDER`]. Each one is a strict no-op
//! when its trigger is missing, never fails, and reports unsupported
//! combinations to the [`WarningSink`] instead. Every change goes through the
//! [`ClassifiedState`] mutators and therefore lands in the audit log.

mod debugger_command;
mod historical;
mod legacy_debug;
mod timeout;

use std::fmt;

use logging::WarningSink;

use crate::probe::RuntimeProbe;
use crate::state::ClassifiedState;
use crate::version::RuntimeVersion;

pub use timeout::{DISABLED_TIMEOUT, TIMEOUT_ALIASES, TIMEOUT_KEY, implies_no_timeouts};

/// Name of a compatibility rule, as recorded in the audit log.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RuleName {
    /// A leading `debug`/`inspect` positional launches the runtime debugger.
    DebuggerCommand,
    /// `--debug`/`--debug-brk` become `--inspect`/`--inspect-brk` on runtimes
    /// that dropped the legacy flags.
    LegacyDebugFlag,
    /// `--gc` becomes `--gc-global`.
    HistoricalAlias,
    /// Debugger flags disable the framework timeout.
    TimeoutDisable,
}

impl RuleName {
    /// Kebab-case name used in traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DebuggerCommand => "debugger-command",
            Self::LegacyDebugFlag => "legacy-debug-flag",
            Self::HistoricalAlias => "historical-alias",
            Self::TimeoutDisable => "timeout-disable",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which [`apply_rules`] runs the rules.
pub const RULE_ORDER: [RuleName; 4] = [
    RuleName::DebuggerCommand,
    RuleName::LegacyDebugFlag,
    RuleName::HistoricalAlias,
    RuleName::TimeoutDisable,
];

/// Collaborators available to every rule.
pub struct RuleContext<'a> {
    probe: &'a dyn RuntimeProbe,
    version: RuntimeVersion,
    sink: &'a mut dyn WarningSink,
}

impl<'a> RuleContext<'a> {
    /// Creates a context, querying the probe for the runtime version once.
    pub fn new(probe: &'a dyn RuntimeProbe, sink: &'a mut dyn WarningSink) -> Self {
        let version = probe.version();
        Self {
            probe,
            version,
            sink,
        }
    }

    /// Detected host runtime version.
    #[must_use]
    pub const fn version(&self) -> RuntimeVersion {
        self.version
    }

    fn accepts_flag(&self, name: &str) -> bool {
        self.probe.accepts_flag(name)
    }

    fn warn(&mut self, warning: logging::Warning) {
        self.sink.warn(warning);
    }
}

/// Runs every rule over `state` in [`RULE_ORDER`].
pub fn apply_rules(state: &mut ClassifiedState, context: &mut RuleContext<'_>) {
    for rule in RULE_ORDER {
        match rule {
            RuleName::DebuggerCommand => debugger_command::apply(state, context),
            RuleName::LegacyDebugFlag => legacy_debug::apply(state, context),
            RuleName::HistoricalAlias => historical::apply(state, context),
            RuleName::TimeoutDisable => timeout::sweep(state),
        }
    }
}
