//! crates/logging/src/logger.rs
//! The leveled logging contract and its console implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicI8, Ordering};

use logging_sink::Destinations;

use crate::clock::Clock;
use crate::context::Context;
use crate::emit::LineEmitter;
use crate::level::{Level, map_level_to_ordinal};
use crate::render::render_message;
use crate::verbosity::Verbosity;

/// Leveled logging interface.
///
/// Implementors provide [`log`](Self::log); the per-level methods are
/// shorthands that pass the fixed level name. Logging is fire-and-forget:
/// none of these methods report failure.
pub trait Logger {
    /// Logs `message` at `level`, substituting `context` into placeholders.
    fn log(&self, level: &str, message: &str, context: &Context);

    /// System is unusable.
    fn emergency(&self, message: &str, context: &Context) {
        self.log(Level::Emergency.name(), message, context);
    }

    /// Action must be taken immediately.
    fn alert(&self, message: &str, context: &Context) {
        self.log(Level::Alert.name(), message, context);
    }

    /// Critical conditions.
    fn critical(&self, message: &str, context: &Context) {
        self.log(Level::Critical.name(), message, context);
    }

    /// Runtime errors that do not require immediate action.
    fn error(&self, message: &str, context: &Context) {
        self.log(Level::Error.name(), message, context);
    }

    /// Exceptional occurrences that are not errors.
    fn warning(&self, message: &str, context: &Context) {
        self.log(Level::Warning.name(), message, context);
    }

    /// Normal but significant events.
    fn notice(&self, message: &str, context: &Context) {
        self.log(Level::Notice.name(), message, context);
    }

    /// Interesting events.
    fn info(&self, message: &str, context: &Context) {
        self.log(Level::Info.name(), message, context);
    }

    /// Detailed debug information.
    fn debug(&self, message: &str, context: &Context) {
        self.log(Level::Debug.name(), message, context);
    }
}

impl<L> Logger for &L
where
    L: Logger + ?Sized,
{
    fn log(&self, level: &str, message: &str, context: &Context) {
        (**self).log(level, message, context);
    }
}

impl<L> Logger for Arc<L>
where
    L: Logger + ?Sized,
{
    fn log(&self, level: &str, message: &str, context: &Context) {
        (**self).log(level, message, context);
    }
}

/// Logger writing framed lines to standard output and standard error.
///
/// A line is emitted when its level's ordinal is at most the verbosity
/// threshold. Negative ordinals (error and worse) go to standard error,
/// the rest to standard output. Level names outside the fixed table are never
/// emitted, while `emergency` passes every threshold.
///
/// The threshold is stored atomically, so a logger shared between threads can
/// be reconfigured through a shared reference.
///
/// # Examples
///
/// ```
/// use logging::{ConsoleLogger, Context, FixedClock, Logger};
/// use logging_sink::{Destinations, SharedBuffer};
/// use time::macros::datetime;
///
/// let out = SharedBuffer::new();
/// let err = SharedBuffer::new();
/// let logger = ConsoleLogger::with_destinations(0, Destinations::new(out.clone(), err.clone()))
///     .with_clock(FixedClock(datetime!(2024-01-02 03:04:05 UTC)));
///
/// logger.info("hidden", &Context::new());
/// logger.warning("Hello {name}", &Context::new().with("name", "World"));
///
/// assert_eq!(out.contents(), "2024-01-02 03:04:05 [ WARNING ] Hello World\n");
/// assert!(err.is_empty());
/// ```
#[derive(Debug)]
pub struct ConsoleLogger {
    verbosity: AtomicI8,
    emitter: LineEmitter,
}

impl ConsoleLogger {
    /// Creates a console logger with the given threshold, clamped to `-3..=3`.
    ///
    /// The local UTC offset for timestamps is read here, once. Create the
    /// logger before spawning threads; otherwise lines are stamped in UTC.
    #[must_use]
    pub fn new(verbosity: i32) -> Self {
        Self::with_destinations(verbosity, Destinations::console())
    }

    /// Creates a logger writing to explicit destinations.
    #[must_use]
    pub fn with_destinations(verbosity: i32, destinations: Destinations) -> Self {
        Self::with_emitter(Verbosity::clamped(verbosity), LineEmitter::new(destinations))
    }

    /// Creates a logger from a prepared emitter.
    #[must_use]
    pub fn with_emitter(verbosity: Verbosity, emitter: LineEmitter) -> Self {
        Self {
            verbosity: AtomicI8::new(verbosity.get()),
            emitter,
        }
    }

    /// Replaces the clock used for timestamps.
    #[must_use]
    pub fn with_clock<C>(self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        let Self { verbosity, emitter } = self;
        Self {
            verbosity,
            emitter: emitter.with_clock(clock),
        }
    }

    /// Sets the threshold, clamping it to `-3..=3`, and returns the logger.
    pub fn set_verbosity_level(&self, verbosity: i32) -> &Self {
        self.verbosity
            .store(Verbosity::clamped(verbosity).get(), Ordering::Relaxed);
        self
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn verbosity_level(&self) -> i8 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Returns the current threshold as a [`Verbosity`].
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::clamped(i32::from(self.verbosity_level()))
    }

    /// Returns the ordinal `level` resolves to; `-4` for unknown names.
    #[must_use]
    pub fn get_verbosity_level(&self, level: &str) -> i8 {
        map_level_to_ordinal(level)
    }

    /// Reports whether a line at `level` would currently be emitted.
    #[must_use]
    pub fn enabled(&self, level: &str) -> bool {
        Level::lookup(level).is_some_and(|known| self.verbosity().permits(known.ordinal()))
    }

    /// Logs at a typed [`Level`].
    pub fn log_level(&self, level: Level, message: &str, context: &Context) {
        self.log(level.name(), message, context);
    }

    /// Returns the emitter that frames and routes lines.
    #[must_use]
    pub const fn emitter(&self) -> &LineEmitter {
        &self.emitter
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(i32::from(Verbosity::DEFAULT.get()))
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: &str, message: &str, context: &Context) {
        // The unknown sentinel shares emergency's ordinal, so unknown names are
        // rejected before the threshold check.
        let Some(known) = Level::lookup(level) else {
            return;
        };
        let ordinal = known.ordinal();
        if !self.verbosity().permits(ordinal) {
            return;
        }
        let rendered = render_message(message, context);
        self.emitter.emit(ordinal, level, &rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use logging_sink::SharedBuffer;
    use time::macros::datetime;

    struct Harness {
        logger: ConsoleLogger,
        out: SharedBuffer,
        err: SharedBuffer,
    }

    fn harness(verbosity: i32) -> Harness {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let logger =
            ConsoleLogger::with_destinations(verbosity, Destinations::new(out.clone(), err.clone()))
                .with_clock(FixedClock(datetime!(2023-11-14 22:13:20 UTC)));
        Harness { logger, out, err }
    }

    #[test]
    fn default_threshold_is_warning() {
        assert_eq!(ConsoleLogger::default().verbosity_level(), 0);
    }

    #[test]
    fn set_verbosity_clamps_and_chains() {
        let Harness { logger, .. } = harness(0);
        assert_eq!(logger.set_verbosity_level(-100).verbosity_level(), -3);
        assert_eq!(logger.set_verbosity_level(100).verbosity_level(), 3);
        assert_eq!(logger.set_verbosity_level(2).verbosity_level(), 2);
    }

    #[test]
    fn constructor_clamps_threshold() {
        assert_eq!(harness(-9).logger.verbosity_level(), -3);
        assert_eq!(harness(9).logger.verbosity_level(), 3);
    }

    #[test]
    fn get_verbosity_level_uses_table() {
        let Harness { logger, .. } = harness(0);
        assert_eq!(logger.get_verbosity_level("warning"), 0);
        assert_eq!(logger.get_verbosity_level("debug"), 3);
        assert_eq!(logger.get_verbosity_level("-3"), -3);
        assert_eq!(logger.get_verbosity_level("bogus"), -4);
    }

    #[test]
    fn suppressed_levels_write_nothing() {
        let Harness { logger, out, err } = harness(0);
        logger.info("test", &Context::new());
        logger.debug("test", &Context::new());
        logger.notice("test", &Context::new());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn warning_goes_to_output() {
        let Harness { logger, out, err } = harness(0);
        logger.warning("test", &Context::new());
        assert_eq!(out.lines(), ["2023-11-14 22:13:20 [ WARNING ] test"]);
        assert!(err.is_empty());
    }

    #[test]
    fn error_goes_to_error_stream() {
        let Harness { logger, out, err } = harness(3);
        logger.error("failed {op}", &Context::new().with("op", "sync"));
        logger.info("fine", &Context::new());
        assert_eq!(err.contents(), "2023-11-14 22:13:20 [  ERROR  ] failed sync\n");
        assert_eq!(out.contents(), "2023-11-14 22:13:20 [  INFO   ] fine\n");
    }

    #[test]
    fn unknown_levels_are_never_emitted() {
        let Harness { logger, out, err } = harness(3);
        for level in ["bogus", "WARNING", "", "trace"] {
            logger.log(level, "dropped", &Context::new());
        }
        logger.set_verbosity_level(-3);
        logger.log("bogus", "dropped", &Context::new());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn numeric_aliases_print_alias_label() {
        let Harness { logger, out, err } = harness(3);
        logger.log("2", "via alias", &Context::new());
        logger.log("-2", "via alias", &Context::new());
        assert_eq!(out.contents(), "2023-11-14 22:13:20 [    2    ] via alias\n");
        assert_eq!(err.contents(), "2023-11-14 22:13:20 [   -2    ] via alias\n");
    }

    #[test]
    fn log_level_matches_named_call() {
        let Harness { logger, out, .. } = harness(1);
        logger.log_level(Level::Notice, "typed", &Context::new());
        logger.notice("typed", &Context::new());
        let lines = out.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn enabled_reflects_threshold() {
        let Harness { logger, .. } = harness(-1);
        assert!(logger.enabled("error"));
        assert!(!logger.enabled("warning"));
        assert!(!logger.enabled("bogus"));
    }

    #[test]
    fn emergency_passes_the_lowest_threshold() {
        let Harness { logger, out, err } = harness(-3);
        logger.emergency("down", &Context::new());
        logger.log("-4", "down", &Context::new());
        logger.critical("hidden", &Context::new());
        assert!(out.is_empty());
        assert_eq!(
            err.lines(),
            [
                "2023-11-14 22:13:20 [EMERGENCY] down",
                "2023-11-14 22:13:20 [   -4    ] down",
            ]
        );
    }

    #[test]
    fn shared_logger_implements_trait() {
        let Harness { logger, out, .. } = harness(0);
        let shared = Arc::new(logger);
        let by_ref: &dyn Logger = &shared;
        by_ref.warning("through arc", &Context::new());
        assert_eq!(out.lines().len(), 1);
    }
}
