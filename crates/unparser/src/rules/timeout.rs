use crate::classify::{DEBUG_FLAGS, Owner};
use crate::state::ClassifiedState;

use super::RuleName;

/// Framework key holding the per-test timeout.
pub const TIMEOUT_KEY: &str = "timeout";

/// Other spellings of [`TIMEOUT_KEY`], deleted when timeouts are disabled.
pub const TIMEOUT_ALIASES: [&str; 2] = ["t", "timeouts"];

/// Timeout value meaning "no timeout" (`--timeout 0`).
pub const DISABLED_TIMEOUT: i64 = 0;

/// Reports whether `name` is a debugger flag or command, which leaves tests
/// paused indefinitely and therefore needs timeouts turned off.
#[must_use]
pub fn implies_no_timeouts(name: &str) -> bool {
    DEBUG_FLAGS.contains(&name)
}

/// Disables the framework timeout when `cause` implies it. Returns whether it
/// did.
pub(super) fn disable_timeouts(state: &mut ClassifiedState, cause: &str) -> bool {
    if !implies_no_timeouts(cause) {
        return false;
    }
    logging::trace_rule!("option \"{cause}\" disabled timeouts");
    state.set(
        RuleName::TimeoutDisable,
        Owner::Framework,
        TIMEOUT_KEY,
        DISABLED_TIMEOUT,
    );
    for alias in TIMEOUT_ALIASES {
        state.remove(RuleName::TimeoutDisable, Owner::Framework, alias);
    }
    true
}

/// Disables timeouts for every runtime key that implies it.
pub(super) fn sweep(state: &mut ClassifiedState) {
    let causes: Vec<String> = state
        .runtime()
        .keys()
        .filter(|key| implies_no_timeouts(key))
        .map(str::to_owned)
        .collect();
    for cause in causes {
        disable_timeouts(state, &cause);
    }
}
