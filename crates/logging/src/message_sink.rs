//! crates/logging/src/message_sink.rs
//! Line-oriented rendering of warnings into an [`io::Write`] target.

use std::io::{self, Write};

use crate::line_mode::LineMode;
use crate::sink::WarningSink;
use crate::warning::Warning;

/// Program name used when a sink is created without an explicit one.
pub const DEFAULT_PROGRAM_NAME: &str = "launchargs";

/// Streaming sink that renders [`Warning`] values as
/// `<program>: <label>: <message>` lines.
///
/// # Examples
///
/// ```
/// use logging::{LineMode, MessageSink, Warning};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline)
///     .program_name("runner");
/// sink.write(&Warning::conflict("command \"debug\" provided; --inspect ignored"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "runner: warning: command \"debug\" provided; --inspect ignored");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
    program_name: String,
}

impl<W> MessageSink<W> {
    /// Creates a sink that appends a newline after every warning.
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            line_mode,
            program_name: DEFAULT_PROGRAM_NAME.to_owned(),
        }
    }

    /// Replaces the program name rendered in front of each warning.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Returns the line mode in use.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink<W> {
    /// Renders one warning.
    pub fn write(&mut self, warning: &Warning) -> io::Result<()> {
        write!(
            self.writer,
            "{}: {}: {}",
            self.program_name,
            warning.kind().label(),
            warning.message()
        )?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Renders each warning in order, stopping at the first I/O error.
    pub fn write_all<'a, I>(&mut self, warnings: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Warning>,
    {
        for warning in warnings {
            self.write(warning)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> WarningSink for MessageSink<W> {
    fn warn(&mut self, warning: Warning) {
        // Printing a diagnostic must never abort the launch.
        let _ = self.write(&warning);
    }
}
