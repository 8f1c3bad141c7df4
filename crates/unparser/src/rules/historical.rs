use logging::Warning;

use crate::classify::Owner;
use crate::state::ClassifiedState;

use super::{RuleContext, RuleName};

const LEGACY: &str = "gc";
const REPLACEMENT: &str = "gc-global";

pub(super) fn apply(state: &mut ClassifiedState, context: &mut RuleContext<'_>) {
    if !state.runtime().contains_key(LEGACY) {
        return;
    }
    context.warn(Warning::deprecation(format!(
        "\"-{LEGACY}\" is deprecated and will be removed in a future release; \
         use \"--{REPLACEMENT}\" instead."
    )));
    state.rename(RuleName::HistoricalAlias, Owner::Runtime, LEGACY, REPLACEMENT);
}
