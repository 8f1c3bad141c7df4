//! crates/logging/src/tracing_macros.rs
//! Convenience macros for launchargs-specific tracing.
//!
//! These wrap the standard tracing macros with the targets from
//! [`crate::targets`]. Callers must depend on `tracing` themselves.

/// Emit a classification trace.
///
/// # Example
/// ```ignore
/// trace_classify!(key = %key, owner = ?owner, "classified");
/// ```
#[macro_export]
macro_rules! trace_classify {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::targets::CLASSIFY, $($arg)*);
    };
}

/// Emit a compatibility rule trace.
///
/// # Example
/// ```ignore
/// trace_rule!("option \"{}\" disabled timeouts", cause);
/// ```
#[macro_export]
macro_rules! trace_rule {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::targets::RULES, $($arg)*);
    };
}

/// Emit a serialization trace.
///
/// # Example
/// ```ignore
/// trace_serialize!(tokens = args.len(), "runtime args rendered");
/// ```
#[macro_export]
macro_rules! trace_serialize {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::targets::SERIALIZE, $($arg)*);
    };
}

/// Emit a host runtime probe trace.
///
/// # Example
/// ```ignore
/// trace_probe!("detected {}", version);
/// ```
#[macro_export]
macro_rules! trace_probe {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::targets::PROBE, $($arg)*);
    };
}
