#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `console-logger` bundles the workspace crates behind one dependency. The
//! logging engine lives in [`logging`] and the destination handles it writes
//! through live in [`sink`].
//!
//! # Examples
//!
//! ```
//! use console_logger::sink::{Destinations, SharedBuffer};
//! use console_logger::{ConsoleLogger, Logger, context};
//!
//! let out = SharedBuffer::new();
//! let err = SharedBuffer::new();
//! let logger = ConsoleLogger::with_destinations(0, Destinations::new(out.clone(), err.clone()));
//!
//! logger.info("test", &context!());
//! logger.warning("user {name} exceeded quota", &context! { "name" => "ada" });
//!
//! let lines = out.lines();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].ends_with("[ WARNING ] user ada exceeded quota"));
//! assert!(err.is_empty());
//! ```

pub use logging;
pub use logging::*;

/// Destination handles: standard streams, writer sinks, and capture buffers.
pub use logging_sink as sink;
