#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destination handles the console logger writes
//! finished lines into. A destination is anything implementing
//! [`LineWriter`]: the process-wide standard streams ([`ConsoleStream`]), an
//! arbitrary [`std::io::Write`] implementor guarded by a lock
//! ([`WriterSink`]), or a cloneable in-memory capture buffer
//! ([`SharedBuffer`]) used by tests to assert exact byte output.
//!
//! # Design
//!
//! The logger routes each line to exactly one of two destinations, selected
//! by [`Destination`]. [`Destinations`] bundles the pair behind shared
//! handles so a single logger can be used from several threads.
//!
//! # Invariants
//!
//! - Every [`LineWriter::write_line`] call performs one `write_all` while the
//!   destination lock is held, so concurrent lines never interleave.
//! - A poisoned lock is recovered; a panic in one writer does not silence the
//!   destination for every other caller.
//!
//! # Errors
//!
//! Writers surface [`std::io::Error`] values from the underlying stream. The
//! logger is the layer that decides to discard them.
//!
//! # Examples
//!
//! Capture lines routed to the error destination:
//!
//! ```
//! use logging_sink::{Destination, Destinations, SharedBuffer};
//!
//! let out = SharedBuffer::new();
//! let err = SharedBuffer::new();
//! let destinations = Destinations::new(out.clone(), err.clone());
//!
//! destinations
//!     .select(Destination::Error)
//!     .write_line("disk almost full\n")
//!     .unwrap();
//!
//! assert!(out.is_empty());
//! assert_eq!(err.contents(), "disk almost full\n");
//! ```

mod destination;
mod line_writer;
mod sink;

pub use destination::{Destination, Destinations};
pub use line_writer::LineWriter;
pub use sink::{ConsoleStream, SharedBuffer, WriterSink};
