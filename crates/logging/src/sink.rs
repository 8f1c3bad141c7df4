//! crates/logging/src/sink.rs
//! Destinations for warnings emitted by the unparser.

use crate::warning::Warning;

/// Receives warnings as they are produced.
///
/// Implementations must not panic and have no way to report failure; the
/// unparser keeps going regardless of what the sink does with a warning.
pub trait WarningSink {
    /// Records a single warning.
    fn warn(&mut self, warning: Warning);
}

impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Box<S> {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}

/// Sink that drops every warning (`--quiet`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&mut self, _warning: Warning) {}
}

/// Sink that forwards warnings to `tracing::warn!` on [`crate::targets::WARNINGS`].
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl WarningSink for TracingSink {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(
            target: crate::targets::WARNINGS,
            kind = %warning.kind(),
            "{}",
            warning.message()
        );
    }
}
