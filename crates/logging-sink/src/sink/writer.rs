use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use super::lock_recovering;
use crate::line_writer::LineWriter;

/// Lock-guarded destination wrapping an arbitrary [`Write`] implementor.
///
/// The sink owns the writer behind a [`Mutex`]. Each
/// [`write_line`](LineWriter::write_line) call takes the lock, streams the
/// whole line with one `write_all`, and flushes before releasing it. This is
/// the adapter to reach for when lines should land in a file, a socket, or any
/// other byte stream.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineWriter, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line("first\n")?;
/// sink.write_line("second\n")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W> {
    /// Wraps `writer` in a new sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        self.writer
            .get_mut()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &*lock_recovering(&self.writer))
            .finish()
    }
}

impl<W> LineWriter for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = lock_recovering(&self.writer);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_appends_bytes_verbatim() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("alpha\n").expect("write succeeds");
        sink.write_line("beta").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"alpha\nbeta".to_vec());
    }

    #[test]
    fn write_line_surfaces_writer_errors() {
        let sink = WriterSink::new(FailingWriter);
        let error = sink.write_line("lost\n").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn get_mut_exposes_writer() {
        let mut sink = WriterSink::new(Vec::new());
        sink.get_mut().extend_from_slice(b"seed");
        sink.write_line("!").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"seed!".to_vec());
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        use std::sync::Arc;

        let sink = Arc::new(WriterSink::new(Vec::new()));
        let poisoner = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.writer.lock();
            panic!("poison the sink");
        })
        .join();

        sink.write_line("still here\n").expect("write succeeds");
        let sink = Arc::try_unwrap(sink).expect("sole owner");
        assert_eq!(sink.into_inner(), b"still here\n".to_vec());
    }
}
