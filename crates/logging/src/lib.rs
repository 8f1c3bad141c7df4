#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the diagnostics plumbing shared by the `launchargs`
//! workspace. The argument unparser never fails; when it has to translate a
//! deprecated spelling or discard one side of a conflict it reports a
//! [`Warning`] to a [`WarningSink`] and keeps going. This crate defines those
//! warnings, the sinks that receive them, and the tracing targets used for
//! internal debug output.
//!
//! # Design
//!
//! - [`Warning`] pairs a [`WarningKind`] (`Deprecation` or `Conflict`) with the
//!   rendered message.
//! - [`WarningSink`] is the collaborator trait the unparser reports through.
//!   `Vec<Warning>` implements it for tests, [`NullSink`] discards everything,
//!   [`MessageSink`] renders `launchargs: warning: ...` lines into any
//!   [`io::Write`](std::io::Write) target, and `TracingSink` (behind the
//!   `tracing` feature) forwards to `tracing::warn!`.
//! - [`Verbosity`] maps repeated `-v` flags to a tracing filter directive, and
//!   `init_tracing` installs a `tracing-subscriber` formatter honouring it.
//! - [`targets`] lists the tracing targets; the `trace_*!` macros emit on them.
//!
//! # Invariants
//!
//! - Sinks never fail the caller. [`MessageSink`] exposes fallible writes for
//!   callers that care, but its [`WarningSink`] implementation swallows I/O
//!   errors because a diagnostic that cannot be printed must not block a
//!   process launch.
//! - `LineMode::WithNewline` is the default, so each warning occupies one line.
//!
//! # Examples
//!
//! ```
//! use logging::{MessageSink, Warning, WarningSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.warn(Warning::deprecation("\"-gc\" is deprecated; use \"--gc-global\" instead."));
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "launchargs: deprecated: \"-gc\" is deprecated; use \"--gc-global\" instead.\n"
//! );
//! ```

mod line_mode;
mod message_sink;
mod sink;
pub mod targets;
mod tracing_macros;
mod verbosity;
mod warning;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use line_mode::LineMode;
pub use message_sink::{DEFAULT_PROGRAM_NAME, MessageSink};
pub use sink::{NullSink, WarningSink};
pub use verbosity::Verbosity;
pub use warning::{Warning, WarningKind};

#[cfg(feature = "tracing")]
pub use sink::TracingSink;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LOG_ENV, TracingInitError, build_filter, init_tracing};
