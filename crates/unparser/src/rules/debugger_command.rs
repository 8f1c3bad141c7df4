//! Leading `debug`/`inspect` positional.
//!
//! Positionals `debug spec.js` ask for the runtime's own debugger. The command
//! moves from the framework positionals to the runtime positionals, spelled
//! for the detected runtime, and any debugger flag supplied alongside it is
//! dropped with a conflict warning.

use logging::Warning;

use crate::classify::Owner;
use crate::state::ClassifiedState;

use super::{RuleContext, RuleName, timeout};

const COMMANDS: [&str; 2] = ["debug", "inspect"];

/// Flags superseded by the command, in the order their conflicts are reported.
const CONFLICTING_FLAGS: [&str; 4] = ["debug", "inspect", "debug-brk", "inspect-brk"];

pub(super) fn apply(state: &mut ClassifiedState, context: &mut RuleContext<'_>) {
    let rule = RuleName::DebuggerCommand;
    let is_command = state
        .framework_positional()
        .first()
        .is_some_and(|token| COMMANDS.contains(&token.as_str()));
    if !is_command {
        return;
    }
    let Some(command) = state.take_first_positional(rule) else {
        return;
    };
    timeout::disable_timeouts(state, &command);

    for flag in CONFLICTING_FLAGS {
        if state.owner_of(flag).is_none() {
            continue;
        }
        context.warn(Warning::conflict(format!(
            "command \"{command}\" provided; --{flag} ignored"
        )));
        state.remove(rule, Owner::Runtime, flag);
        state.remove(rule, Owner::Framework, flag);
    }

    let launcher = if context.version().has_modern_debugger() {
        "inspect"
    } else {
        "debug"
    };
    state.set_runtime_positional(rule, vec![launcher.to_owned()]);
}
