use std::io;
use std::sync::Arc;

/// Capability shared by every logger destination.
///
/// Implementors receive a fully framed line, terminator included, and must
/// hand it to the underlying stream as one operation so that lines produced
/// by concurrent callers are never interleaved.
pub trait LineWriter: Send + Sync {
    /// Writes `line` to the destination in a single operation.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl<T> LineWriter for Arc<T>
where
    T: LineWriter + ?Sized,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<T> LineWriter for Box<T>
where
    T: LineWriter + ?Sized,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}
