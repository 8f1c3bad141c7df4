//! crates/unparser/src/unparse.rs
//! Entry points tying classification, rules and serialization together.

use logging::{TracingSink, WarningSink};
use serde::Serialize;

use crate::aliases::AliasTable;
use crate::options::LogicalOptions;
use crate::probe::RuntimeProbe;
use crate::rules::{RuleContext, apply_rules};
use crate::serialize::{ValueStyle, framework_args, runtime_args};
use crate::state::ClassifiedState;

/// The two argument vectors produced from one option set.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UnparsedArgs {
    /// Arguments for the host runtime, placed before the framework entry point.
    pub runtime_args: Vec<String>,
    /// Arguments for the framework, placed after its entry point.
    pub framework_args: Vec<String>,
}

impl UnparsedArgs {
    /// Full launch command:
    /// `<runtime_binary> <runtime_args...> <entry> <framework_args...>`.
    #[must_use]
    pub fn command_line(&self, runtime_binary: &str, entry: &str) -> Vec<String> {
        let mut command =
            Vec::with_capacity(self.runtime_args.len() + self.framework_args.len() + 2);
        command.push(runtime_binary.to_owned());
        command.extend_from_slice(&self.runtime_args);
        command.push(entry.to_owned());
        command.extend_from_slice(&self.framework_args);
        command
    }
}

/// Splits option sets into runtime and framework argument vectors.
///
/// The unparser holds the [`RuntimeProbe`] consulted by the version-dependent
/// rules. It never fails: unsupported combinations are reported to the
/// [`WarningSink`] passed to each call and resolved deterministically.
///
/// # Examples
///
/// ```
/// use unparser::{LogicalOptions, RuntimeVersion, StaticProbe, Unparser, Warning};
///
/// let unparser = Unparser::new(StaticProbe::new(RuntimeVersion::new(10, 0, 0)));
/// let options = LogicalOptions::new()
///     .with("_", vec!["debug", "test/unit.spec.js"])
///     .with("timeout", 2000);
///
/// let mut warnings: Vec<Warning> = Vec::new();
/// let args = unparser.unparse(&options, &mut warnings);
///
/// assert_eq!(args.runtime_args, ["inspect"]);
/// assert_eq!(args.framework_args, ["test/unit.spec.js", "--timeout", "0"]);
/// assert!(warnings.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Unparser<P> {
    probe: P,
    runtime_style: ValueStyle,
}

impl<P: RuntimeProbe> Unparser<P> {
    /// Creates an unparser consulting `probe`.
    #[must_use]
    pub const fn new(probe: P) -> Self {
        Self {
            probe,
            runtime_style: ValueStyle::Separate,
        }
    }

    /// Selects how runtime flags carry their values (`--name value` or
    /// `--name=value`). Framework arguments always use separate tokens.
    #[must_use]
    pub const fn runtime_value_style(mut self, style: ValueStyle) -> Self {
        self.runtime_style = style;
        self
    }

    /// The probe consulted by the rules.
    #[must_use]
    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Classifies a copy of `options` for the probed host version and applies
    /// every compatibility rule.
    ///
    /// The returned state carries the audit log of rule transitions.
    pub fn resolve(
        &self,
        options: &LogicalOptions,
        sink: &mut dyn WarningSink,
    ) -> ClassifiedState {
        let mut state = ClassifiedState::classify(options, self.probe.version());
        let mut context = RuleContext::new(&self.probe, sink);
        apply_rules(&mut state, &mut context);
        state
    }

    /// Produces the runtime and framework argument vectors for `options`.
    pub fn unparse(&self, options: &LogicalOptions, sink: &mut dyn WarningSink) -> UnparsedArgs {
        let state = self.resolve(options, sink);
        UnparsedArgs {
            runtime_args: runtime_args(&state, self.runtime_style),
            framework_args: framework_args(&state, AliasTable::builtin(), ValueStyle::Separate),
        }
    }
}

/// Unparses `options` with default settings, forwarding warnings to `tracing`.
#[must_use]
pub fn unparse<P: RuntimeProbe>(options: &LogicalOptions, probe: P) -> UnparsedArgs {
    Unparser::new(probe).unparse(options, &mut TracingSink)
}

#[cfg(test)]
mod tests {
    use logging::{NullSink, Warning};

    use super::*;
    use crate::{RuleName, RuntimeVersion, StaticProbe};

    fn node(major: u32) -> StaticProbe {
        StaticProbe::new(RuntimeVersion::new(major, 0, 0))
    }

    #[test]
    fn command_line_places_entry_between_vectors() {
        let args = UnparsedArgs {
            runtime_args: vec!["--inspect".to_owned()],
            framework_args: vec!["--bail".to_owned()],
        };
        assert_eq!(
            args.command_line("node", "bin/runner.js"),
            ["node", "--inspect", "bin/runner.js", "--bail"]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let options = LogicalOptions::new()
            .with("_", vec!["inspect"])
            .with("debug", true)
            .with("t", 100);
        let snapshot = options.clone();

        let mut warnings: Vec<Warning> = Vec::new();
        let _ = Unparser::new(node(12)).unparse(&options, &mut warnings);

        assert_eq!(options, snapshot);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn runtime_style_applies_only_to_runtime_side() {
        let options = LogicalOptions::new().with("inspect-port", 9230).with("slow", 75);
        let unparser = Unparser::new(node(12)).runtime_value_style(ValueStyle::Joined);
        let args = unparser.unparse(&options, &mut NullSink);

        assert_eq!(args.runtime_args, ["--inspect-port=9230"]);
        assert_eq!(args.framework_args, ["--slow", "75"]);
    }

    #[test]
    fn resolve_exposes_audit_log() {
        let options = LogicalOptions::new().with("gc", true);
        let state = Unparser::new(node(12)).resolve(&options, &mut NullSink);
        assert_eq!(state.audit().len(), 1);
        assert_eq!(state.audit()[0].rule, RuleName::HistoricalAlias);
    }

    #[test]
    fn free_function_uses_defaults() {
        let options = LogicalOptions::new().with("expose-gc", true).with("bail", true);
        let args = unparse(&options, node(10));
        assert_eq!(args.runtime_args, ["--expose-gc"]);
        assert_eq!(args.framework_args, ["--bail"]);
    }

    #[test]
    fn serializes_as_json_object() {
        let args = UnparsedArgs {
            runtime_args: vec!["inspect".to_owned()],
            framework_args: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"runtime_args":["inspect"],"framework_args":[]}"#
        );
    }
}
