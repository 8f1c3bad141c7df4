#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `unparser` rebuilds command lines for a test framework that runs on a
//! host runtime. Its input is the single, flat option set the options loader
//! produced by merging defaults, configuration files and the user's command
//! line. Framework options and runtime flags share that namespace, so the
//! unparser decides which side owns each key, applies the compatibility rules
//! that tie the two sides together, and renders one argument vector for the
//! runtime and one for the framework.
//!
//! # Design
//!
//! - [`LogicalOptions`] is the insertion-ordered input, with the positional
//!   (`_`) and pass-through (`--`) lists held separately. It deserializes from
//!   a JSON object without losing key order.
//! - [`is_runtime_flag_in`] classifies a single name for a host version
//!   against the static [`RuntimeFlagRegistry`], a set of flag families and
//!   the `v8-` escape prefix. [`partition`] tags every key with an [`Owner`].
//! - [`ClassifiedState`] holds both maps. Compatibility rules change it only
//!   through named [`Transition`]s, each recorded in its audit log.
//! - The rules run in [`RULE_ORDER`]: a leading `debug`/`inspect` command
//!   moves to the runtime, legacy debugger flags are renamed on runtimes that
//!   dropped them, `--gc` becomes `--gc-global`, and debugger flags disable the
//!   framework timeout (`--timeout 0`).
//! - [`runtime_args`] and [`framework_args`] render the final state; the
//!   framework side collapses every spelling in the [`AliasTable`] to its
//!   preferred form.
//! - [`Unparser`] runs the pipeline with an injected [`RuntimeProbe`].
//!
//! # Invariants
//!
//! - Unparsing never fails. Deprecated or conflicting input produces a
//!   [`Warning`] on the caller's [`WarningSink`] and a deterministic result.
//! - Every ordinary key lands in exactly one map after classification.
//! - Options no rule touches round-trip unchanged apart from alias spelling.
//! - The caller's options are never modified; each call works on a copy.
//!
//! # Examples
//!
//! ```
//! use unparser::{LogicalOptions, RuntimeVersion, StaticProbe, unparse};
//!
//! let options = LogicalOptions::from_json_str(
//!     r#"{"_": ["test/"], "v8-stack-size": 2048, "R": "dot", "gc-global": true}"#,
//! )
//! .unwrap();
//!
//! let args = unparse(&options, StaticProbe::new(RuntimeVersion::new(12, 4, 0)));
//! assert_eq!(args.runtime_args, ["--stack-size", "2048", "--gc-global"]);
//! assert_eq!(args.framework_args, ["test/", "--reporter", "dot"]);
//! ```

mod aliases;
mod classify;
mod error;
mod options;
mod probe;
mod registry;
mod rules;
mod serialize;
mod state;
mod unparse;
mod value;
mod version;

pub use aliases::{AliasEntry, AliasTable};
pub use classify::{
    DEBUG_FLAGS, Owner, V8_OPTIONS, V8_PREFIX, classify, classify_in, is_runtime_flag,
    is_runtime_flag_in, runtime_flag_name,
};
pub use error::{OptionsError, ParseVersionError};
pub use logging::{NullSink, Warning, WarningKind, WarningSink};
pub use options::{LogicalOptions, OptionMap, PASSTHROUGH_KEY, POSITIONAL_KEY};
pub use probe::{RuntimeProbe, StaticProbe};
pub use registry::{FlagEntry, RuntimeFlagRegistry};
pub use rules::{
    DISABLED_TIMEOUT, RULE_ORDER, RuleContext, RuleName, TIMEOUT_ALIASES, TIMEOUT_KEY,
    apply_rules, implies_no_timeouts,
};
pub use serialize::{PASSTHROUGH_SEPARATOR, ValueStyle, framework_args, runtime_args, serialize};
pub use state::{AuditEntry, ClassifiedState, TaggedOption, Transition, partition, partition_in};
pub use unparse::{UnparsedArgs, Unparser, unparse};
pub use value::OptionValue;
pub use version::{MODERN_DEBUGGER_MAJOR, RuntimeVersion};
