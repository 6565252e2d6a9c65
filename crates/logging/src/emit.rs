//! crates/logging/src/emit.rs
//! Line framing and destination routing.

use std::fmt;
use std::sync::Arc;

use logging_sink::Destinations;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::clock::{Clock, SystemClock};

/// Width the upper-cased level label is centred in.
pub const LEVEL_WIDTH: usize = 9;

/// Timestamp prefix of every emitted line.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00";

/// Formats `at` as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}

/// Upper-cases `level` and centres it in [`LEVEL_WIDTH`] columns.
///
/// When the padding is odd the extra space goes on the right. Labels longer
/// than the width are kept whole.
///
/// ```
/// use logging::pad_level;
///
/// assert_eq!(pad_level("info"), "  INFO   ");
/// assert_eq!(pad_level("warning"), " WARNING ");
/// assert_eq!(pad_level("emergency"), "EMERGENCY");
/// ```
#[must_use]
pub fn pad_level(level: &str) -> String {
    format!("{:^width$}", level.to_uppercase(), width = LEVEL_WIDTH)
}

/// Assembles `"<timestamp> [<LEVEL>] <message>\n"`.
#[must_use]
pub fn frame_line(at: OffsetDateTime, level: &str, message: &str) -> String {
    format!(
        "{} [{}] {}\n",
        format_timestamp(at),
        pad_level(level),
        message
    )
}

/// Writes framed lines to the destination matching their severity.
#[derive(Clone)]
pub struct LineEmitter {
    destinations: Destinations,
    clock: Arc<dyn Clock>,
}

impl LineEmitter {
    /// Creates an emitter over `destinations` using the system clock.
    #[must_use]
    pub fn new(destinations: Destinations) -> Self {
        Self {
            destinations,
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Replaces the clock used for timestamps.
    #[must_use]
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the destination pair.
    #[must_use]
    pub const fn destinations(&self) -> &Destinations {
        &self.destinations
    }

    /// Frames `message` and writes it for a line of severity `ordinal`.
    ///
    /// Negative ordinals go to the error destination. Write failures are
    /// discarded: emitting a log line never fails the caller.
    pub fn emit(&self, ordinal: i8, level: &str, message: &str) {
        let line = frame_line(self.clock.now(), level, message);
        let _ = self.destinations.route(ordinal).write_line(&line);
    }
}

impl Default for LineEmitter {
    fn default() -> Self {
        Self::new(Destinations::console())
    }
}

impl fmt::Debug for LineEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEmitter")
            .field("destinations", &self.destinations)
            .finish_non_exhaustive()
    }
}
