#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled console logger. Callers submit a severity level, a
//! message template, and a [`Context`] of named values; the logger decides
//! whether the line passes the verbosity threshold, substitutes `{name}`
//! placeholders with stringified context values, and writes one framed line to
//! standard output or standard error.
//!
//! # Design
//!
//! Each log call runs four steps:
//!
//! 1. [`map_level_to_ordinal`] resolves the level name through a fixed table
//!    (`emergency` is `-4`, `debug` is `3`). Names outside the table resolve to
//!    [`UNKNOWN_ORDINAL`] and are dropped before the [`Verbosity`] check.
//! 2. [`format_value`] stringifies each context [`Value`]. Collections render
//!    recursively with tab indentation; structures captured through `serde`
//!    render as `TypeName({json})`.
//! 3. [`render_message`] substitutes all placeholders in one left-to-right
//!    pass. Replacement text is never scanned again.
//! 4. [`LineEmitter`] frames the line as
//!    `YYYY-MM-DD HH:MM:SS [  LEVEL  ] message` and writes it to the error
//!    destination when the ordinal is negative, otherwise to standard output.
//!
//! # Invariants
//!
//! - The threshold is always within `-3..=3`; every setter clamps.
//! - A line with a known level is emitted iff its ordinal is at most the
//!   threshold. Unknown levels are never emitted.
//! - Logging never fails the caller. Destination write errors are discarded.
//!
//! # Examples
//!
//! ```
//! use logging::{ConsoleLogger, FixedClock, Logger, context};
//! use logging_sink::{Destinations, SharedBuffer};
//! use time::macros::datetime;
//!
//! let out = SharedBuffer::new();
//! let err = SharedBuffer::new();
//! let logger = ConsoleLogger::with_destinations(2, Destinations::new(out.clone(), err.clone()))
//!     .with_clock(FixedClock(datetime!(2024-05-06 07:08:09 UTC)));
//!
//! logger.info("copied {count} files", &context! { "count" => 12 });
//! logger.error("lost {host}", &context! { "host" => "db-1" });
//! logger.debug("not shown", &context!());
//!
//! assert_eq!(out.contents(), "2024-05-06 07:08:09 [  INFO   ] copied 12 files\n");
//! assert_eq!(err.contents(), "2024-05-06 07:08:09 [  ERROR  ] lost db-1\n");
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for destination handles and in-memory capture buffers.
//! - [`LoggerConfig`] for building a logger from `-v` counts or the
//!   environment.

mod clock;
mod config;
mod context;
mod emit;
mod level;
mod logger;
mod macros;
mod render;
mod value;
mod verbosity;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LoggerConfig, VERBOSITY_ENV_VAR, parse_verbosity};
pub use context::Context;
pub use emit::{LEVEL_WIDTH, LineEmitter, TIMESTAMP_FORMAT, format_timestamp, frame_line, pad_level};
pub use level::{Level, LevelParseError, UNKNOWN_ORDINAL, map_level_to_ordinal};
pub use logger::{ConsoleLogger, Logger};
pub use render::{placeholder_token, render_message};
pub use value::{
    Collection, Interval, Key, MAX_STRUCTURE_DEPTH, Object, Renderable, Resource, Structured,
    Value, format_value,
};
pub use verbosity::Verbosity;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing, level_name};
