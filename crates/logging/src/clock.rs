//! crates/logging/src/clock.rs
//! Wall-clock source used to timestamp emitted lines.

use time::{OffsetDateTime, UtcOffset};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock in a UTC offset fixed at construction.
///
/// On Unix the local offset can only be read soundly while the process has a
/// single thread, so [`SystemClock::new`] looks it up once and every later
/// reading reuses it. Build the clock (or the logger owning it) before
/// spawning threads; if the lookup fails the clock stays on UTC.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Creates a clock in the current local offset, or UTC when it is unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::with_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    /// Creates a clock reporting times in `offset`.
    #[must_use]
    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Returns the offset applied to every reading.
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Clock frozen at a single instant, for reproducible output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock(datetime!(2020-02-29 12:00 UTC));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().year(), 2020);
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock::new().now();
        assert!(now.year() >= 2024);
    }

    #[test]
    fn system_clock_keeps_its_offset() {
        let clock = SystemClock::with_offset(offset!(+05:30));
        assert_eq!(clock.now().offset(), offset!(+05:30));
        assert_eq!(clock.now().offset(), clock.offset());
    }

    #[test]
    fn system_clock_reads_offset_once_on_worker_threads() {
        let clock = SystemClock::with_offset(offset!(-03:00));
        // Readings taken while other threads run keep the captured offset.
        let offsets: Vec<_> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| clock.now().offset()))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().expect("worker finishes"))
                .collect()
        });
        assert!(offsets.iter().all(|offset| *offset == offset!(-03:00)));
    }

    #[test]
    fn system_clock_falls_back_to_utc_when_offset_is_unknown() {
        let clock = SystemClock::new();
        let expected = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        // The test harness is multi-threaded, so both lookups normally fail
        // and agree on UTC; where they succeed they agree on the local offset.
        assert_eq!(clock.offset(), expected);
        assert_eq!(clock.now().offset(), expected);
    }
}
