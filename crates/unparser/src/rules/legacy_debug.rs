use logging::Warning;

use crate::classify::Owner;
use crate::state::ClassifiedState;

use super::{RuleContext, RuleName, timeout};

/// Legacy debugger flags and their replacements.
const REPLACEMENTS: [(&str, &str); 2] = [("debug", "inspect"), ("debug-brk", "inspect-brk")];

/// Renames legacy debugger flags the detected runtime no longer accepts.
pub(super) fn apply(state: &mut ClassifiedState, context: &mut RuleContext<'_>) {
    for (legacy, modern) in REPLACEMENTS {
        if !state.runtime().contains_key(legacy) || context.accepts_flag(legacy) {
            continue;
        }
        context.warn(Warning::deprecation(format!(
            "\"--{legacy}\" is not available in Node.js {}; use \"--{modern}\" instead.",
            context.version()
        )));
        state.rename(RuleName::LegacyDebugFlag, Owner::Runtime, legacy, modern);
        timeout::disable_timeouts(state, legacy);
    }
}
