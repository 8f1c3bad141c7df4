//! Tracing targets used across the workspace.
//!
//! Filters such as `LAUNCHARGS_LOG=launchargs::rules=debug` select a single
//! subsystem.

/// Option classification into runtime and framework buckets.
pub const CLASSIFY: &str = "launchargs::classify";
/// Compatibility rule decisions and state transitions.
pub const RULES: &str = "launchargs::rules";
/// Argument vector rendering.
pub const SERIALIZE: &str = "launchargs::serialize";
/// Host runtime version detection.
pub const PROBE: &str = "launchargs::probe";
/// Warnings forwarded by `TracingSink`.
pub const WARNINGS: &str = "launchargs::warnings";

/// Every target, in pipeline order.
pub const ALL: [&str; 5] = [PROBE, CLASSIFY, RULES, SERIALIZE, WARNINGS];
