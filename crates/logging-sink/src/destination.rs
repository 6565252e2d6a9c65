use std::fmt;
use std::sync::Arc;

use crate::line_writer::LineWriter;
use crate::sink::ConsoleStream;

/// The two places a log line can be routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Destination {
    /// Regular output; standard output on a console.
    Output,
    /// Diagnostic output; standard error on a console.
    Error,
}

impl Destination {
    /// Selects the destination for a severity ordinal.
    ///
    /// Negative ordinals denote the error-and-worse severities and go to
    /// [`Destination::Error`]; everything else goes to [`Destination::Output`].
    ///
    /// ```
    /// use logging_sink::Destination;
    ///
    /// assert_eq!(Destination::for_ordinal(-1), Destination::Error);
    /// assert_eq!(Destination::for_ordinal(0), Destination::Output);
    /// ```
    #[must_use]
    pub const fn for_ordinal(ordinal: i8) -> Self {
        if ordinal < 0 {
            Self::Error
        } else {
            Self::Output
        }
    }
}

/// Pair of destination handles owned by a logger.
///
/// Both handles are reference counted, so cloning a `Destinations` value is
/// cheap and every clone writes to the same underlying streams.
#[derive(Clone)]
pub struct Destinations {
    output: Arc<dyn LineWriter>,
    error: Arc<dyn LineWriter>,
}

impl Destinations {
    /// Builds a pair from explicit output and error writers.
    pub fn new<O, E>(output: O, error: E) -> Self
    where
        O: LineWriter + 'static,
        E: LineWriter + 'static,
    {
        Self {
            output: Arc::new(output),
            error: Arc::new(error),
        }
    }

    /// Builds a pair from already shared handles.
    #[must_use]
    pub fn from_shared(output: Arc<dyn LineWriter>, error: Arc<dyn LineWriter>) -> Self {
        Self { output, error }
    }

    /// Standard output paired with standard error.
    #[must_use]
    pub fn console() -> Self {
        Self::new(ConsoleStream::Stdout, ConsoleStream::Stderr)
    }

    /// Returns the writer bound to `destination`.
    #[must_use]
    pub fn select(&self, destination: Destination) -> &dyn LineWriter {
        match destination {
            Destination::Output => self.output.as_ref(),
            Destination::Error => self.error.as_ref(),
        }
    }

    /// Returns the writer for a severity ordinal.
    #[must_use]
    pub fn route(&self, ordinal: i8) -> &dyn LineWriter {
        self.select(Destination::for_ordinal(ordinal))
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Destinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destinations").finish_non_exhaustive()
    }
}
