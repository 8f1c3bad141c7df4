//! crates/unparser/src/serialize.rs
//! Turns classified options back into argument vectors.
//!
//! Positionals come first, in their original order and without a prefix.
//! Every option then follows in insertion order:
//!
//! | value            | tokens                                   |
//! |------------------|------------------------------------------|
//! | `true`           | `--name`                                 |
//! | `false`          | `--no-name`                              |
//! | scalar           | `--name value` (or `--name=value`)       |
//! | list             | one `--name value` pair per element      |
//! | object           | `--name.child value` per nested key      |
//! | absent, `NaN`    | nothing                                  |
//!
//! Single-character names take one dash (`-t 0`). Values are written with
//! their closest string form and no shell quoting.

use crate::aliases::AliasTable;
use crate::classify::runtime_flag_name;
use crate::options::OptionMap;
use crate::state::ClassifiedState;
use crate::value::OptionValue;

/// Separator placed before pass-through tokens.
pub const PASSTHROUGH_SEPARATOR: &str = "--";

/// How an option and its value are laid out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ValueStyle {
    /// `--name value`.
    #[default]
    Separate,
    /// `--name=value`. Single-character names stay separate.
    Joined,
}

impl ValueStyle {
    /// Lower-case name of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Separate => "separate",
            Self::Joined => "joined",
        }
    }
}

/// Renders `positional` followed by every option in `options`.
///
/// # Examples
///
/// ```
/// use unparser::{OptionMap, OptionValue, ValueStyle, serialize};
///
/// let options: OptionMap = [
///     ("bail", OptionValue::from(true)),
///     ("color", OptionValue::from(false)),
///     ("spec", OptionValue::from(vec!["a.js", "b.js"])),
///     ("t", OptionValue::from(0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let args = serialize(&["watch".to_owned()], &options, ValueStyle::Separate);
/// assert_eq!(
///     args,
///     ["watch", "--bail", "--no-color", "--spec", "a.js", "--spec", "b.js", "-t", "0"]
/// );
/// ```
#[must_use]
pub fn serialize(positional: &[String], options: &OptionMap, style: ValueStyle) -> Vec<String> {
    let mut args = positional.to_vec();
    for (name, value) in options.iter() {
        push_option(&mut args, name, value, style);
    }
    args
}

/// Runtime argument vector for `state`.
///
/// Keys are written under their canonical runtime spelling, with the `v8-`
/// escape prefix trimmed.
#[must_use]
pub fn runtime_args(state: &ClassifiedState, style: ValueStyle) -> Vec<String> {
    let mut args = state.runtime_positional().to_vec();
    for (key, value) in state.runtime().iter() {
        push_option(&mut args, &runtime_flag_name(key), value, style);
    }
    logging::trace_serialize!(side = "runtime", tokens = args.len(), "rendered arguments");
    args
}

/// Framework argument vector for `state`.
///
/// Every spelling known to `aliases` is written as its preferred spelling, and
/// an option supplied under several spellings is written once: at the first
/// spelling's position, with the canonical key's value when present.
/// Pass-through tokens follow a literal `--`.
#[must_use]
pub fn framework_args(
    state: &ClassifiedState,
    aliases: &AliasTable,
    style: ValueStyle,
) -> Vec<String> {
    let mut args = state.framework_positional().to_vec();
    for (name, value) in preferred_spellings(state.framework(), aliases) {
        push_option(&mut args, name, value, style);
    }
    if !state.passthrough().is_empty() {
        args.push(PASSTHROUGH_SEPARATOR.to_owned());
        args.extend_from_slice(state.passthrough());
    }
    logging::trace_serialize!(side = "framework", tokens = args.len(), "rendered arguments");
    args
}

fn preferred_spellings<'a>(
    options: &'a OptionMap,
    aliases: &AliasTable,
) -> Vec<(&'a str, &'a OptionValue)> {
    let mut resolved: Vec<(&'a str, &'a OptionValue)> = Vec::with_capacity(options.len());
    for (key, value) in options.iter() {
        let Some(entry) = aliases.entry_for(key) else {
            resolved.push((key, value));
            continue;
        };
        let preferred = entry.preferred();
        if resolved.iter().any(|(name, _)| *name == preferred) {
            continue;
        }
        let value = options.get(entry.canonical()).unwrap_or(value);
        resolved.push((preferred, value));
    }
    resolved
}

fn push_option(args: &mut Vec<String>, name: &str, value: &OptionValue, style: ValueStyle) {
    if name.is_empty() {
        logging::trace_serialize!("skipped option with an empty name");
        return;
    }
    match value {
        OptionValue::Bool(true) => args.push(flag(name)),
        OptionValue::Bool(false) => args.push(flag(&format!("no-{name}"))),
        OptionValue::List(items) => {
            for item in items {
                push_list_item(args, name, item, style);
            }
        }
        OptionValue::Map(children) => {
            for (child, nested) in children.iter() {
                push_option(args, &format!("{name}.{child}"), nested, style);
            }
        }
        OptionValue::Absent => {}
        scalar => push_scalar(args, name, scalar, style),
    }
}

fn push_list_item(args: &mut Vec<String>, name: &str, item: &OptionValue, style: ValueStyle) {
    match item {
        OptionValue::List(_) | OptionValue::Map(_) => push_option(args, name, item, style),
        scalar => push_scalar(args, name, scalar, style),
    }
}

fn push_scalar(args: &mut Vec<String>, name: &str, value: &OptionValue, style: ValueStyle) {
    let Some(token) = value.scalar_token() else {
        return;
    };
    let flag = flag(name);
    if style == ValueStyle::Joined && !is_short(name) {
        args.push(format!("{flag}={token}"));
    } else {
        args.push(flag);
        args.push(token);
    }
}

fn flag(name: &str) -> String {
    if is_short(name) {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

fn is_short(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some() && chars.next().is_none()
}
