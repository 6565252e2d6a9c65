use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::lock_recovering;
use crate::line_writer::LineWriter;

/// Cloneable in-memory destination.
///
/// Every clone shares the same byte buffer, so a test can hand one clone to a
/// logger and keep another to inspect exactly what was written.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineWriter, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let handle = buffer.clone();
/// handle.write_line("one\n")?;
/// handle.write_line("two\n")?;
///
/// assert_eq!(buffer.lines(), vec!["one".to_string(), "two".to_string()]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the raw bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        lock_recovering(&self.bytes).clone()
    }

    /// Returns the buffer decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock_recovering(&self.bytes)).into_owned()
    }

    /// Returns the buffered text split into lines without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock_recovering(&self.bytes).is_empty()
    }

    /// Discards all buffered bytes.
    pub fn clear(&self) {
        lock_recovering(&self.bytes).clear();
    }
}

impl LineWriter for SharedBuffer {
    fn write_line(&self, line: &str) -> io::Result<()> {
        lock_recovering(&self.bytes).extend_from_slice(line.as_bytes());
        Ok(())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock_recovering(&self.bytes).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriterSink;

    #[test]
    fn clones_share_storage() {
        let buffer = SharedBuffer::new();
        let clone = buffer.clone();
        clone.write_line("shared\n").expect("write succeeds");
        assert_eq!(buffer.contents(), "shared\n");
        assert_eq!(buffer.bytes(), b"shared\n".to_vec());
    }

    #[test]
    fn clear_empties_every_clone() {
        let buffer = SharedBuffer::new();
        let clone = buffer.clone();
        buffer.write_line("gone\n").expect("write succeeds");
        clone.clear();
        assert!(buffer.is_empty());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn io_write_feeds_the_same_buffer() {
        let buffer = SharedBuffer::new();
        let sink = WriterSink::new(buffer.clone());
        sink.write_line("via writer sink\n").expect("write succeeds");
        assert_eq!(buffer.lines(), vec!["via writer sink".to_string()]);
    }

    #[test]
    fn concurrent_lines_do_not_interleave() {
        let buffer = SharedBuffer::new();
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let buffer = buffer.clone();
                std::thread::spawn(move || {
                    let line = format!("{}\n", worker.to_string().repeat(64));
                    for _ in 0..50 {
                        buffer.write_line(&line).expect("write succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker finished");
        }

        let lines = buffer.lines();
        assert_eq!(lines.len(), 8 * 50);
        for line in lines {
            let first = line.chars().next().expect("non-empty line");
            assert_eq!(line.len(), 64);
            assert!(line.chars().all(|c| c == first), "interleaved: {line}");
        }
    }
}
