use std::io::{self, Write};

use crate::line_writer::LineWriter;

/// One of the two process-wide console streams.
///
/// Writes lock the stream's global handle for the duration of the line, so
/// output from other parts of the process that also lock the handle cannot
/// land in the middle of a log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConsoleStream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl ConsoleStream {
    /// Returns the conventional name of the stream.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl LineWriter for ConsoleStream {
    fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut handle = io::stdout().lock();
                handle.write_all(line.as_bytes())?;
                handle.flush()
            }
            Self::Stderr => {
                let mut handle = io::stderr().lock();
                handle.write_all(line.as_bytes())?;
                handle.flush()
            }
        }
    }
}
