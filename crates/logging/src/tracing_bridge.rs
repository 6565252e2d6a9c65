//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into a [`Logger`].
//!
//! [`ConsoleLayer`] is a `tracing-subscriber` layer that turns each event into
//! one [`Logger::log`] call. The event's `message` field becomes the template
//! and every other field becomes a context entry, so placeholders written as
//! `{{name}}` in the format string pick up the field called `name`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use logging::{ConsoleLayer, ConsoleLogger, FixedClock};
//! use logging_sink::{Destinations, SharedBuffer};
//! use time::macros::datetime;
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let out = SharedBuffer::new();
//! let logger = ConsoleLogger::with_destinations(2, Destinations::new(out.clone(), SharedBuffer::new()))
//!     .with_clock(FixedClock(datetime!(2024-01-02 03:04:05 UTC)));
//! let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(Arc::new(logger)));
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(user = "ada", "signed in as {{user}}");
//! });
//!
//! assert_eq!(out.contents(), "2024-01-02 03:04:05 [  INFO   ] signed in as ada\n");
//! ```

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::context::Context;
use crate::level::Level;
use crate::logger::Logger;

/// Maps a `tracing` level onto the name of the matching [`Level`].
///
/// `tracing` has no level below DEBUG in this table, so TRACE folds into it.
#[must_use]
pub const fn level_name(level: &tracing::Level) -> &'static str {
    let level = match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
    };
    level.name()
}

/// A tracing layer forwarding events into a [`Logger`].
#[derive(Clone, Debug)]
pub struct ConsoleLayer<L> {
    logger: L,
}

impl<L> ConsoleLayer<L>
where
    L: Logger,
{
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Returns the wrapped logger.
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}

impl<S, L> Layer<S> for ConsoleLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Logger + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let level = level_name(event.metadata().level());
        let message = visitor.message.unwrap_or_default();
        self.logger.log(level, &message, &visitor.context);
    }
}

/// Splits event fields into the message template and context entries.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    context: Context,
}

impl FieldVisitor {
    fn is_message(field: &Field) -> bool {
        field.name() == "message"
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if Self::is_message(field) {
            self.message = Some(text);
        } else {
            self.context.insert(field.name(), text);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if Self::is_message(field) {
            self.message = Some(value.to_owned());
        } else {
            self.context.insert(field.name(), value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.context.insert(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.context.insert(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.context.insert(field.name(), value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.context.insert(field.name(), value);
    }
}

/// Installs a global subscriber that forwards every event into `logger`.
///
/// Fails when a global default subscriber is already set.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use logging::{ConsoleLogger, init_tracing};
///
/// init_tracing(Arc::new(ConsoleLogger::new(2))).expect("no subscriber installed yet");
/// tracing::warn!("disk almost full");
/// ```
pub fn init_tracing<L>(logger: L) -> Result<(), TryInitError>
where
    L: Logger + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConsoleLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_follow_severity() {
        assert_eq!(level_name(&tracing::Level::ERROR), "error");
        assert_eq!(level_name(&tracing::Level::WARN), "warning");
        assert_eq!(level_name(&tracing::Level::INFO), "info");
        assert_eq!(level_name(&tracing::Level::DEBUG), "debug");
        assert_eq!(level_name(&tracing::Level::TRACE), "debug");
    }

    #[test]
    fn every_mapped_name_is_a_known_level() {
        for level in [
            tracing::Level::ERROR,
            tracing::Level::WARN,
            tracing::Level::INFO,
            tracing::Level::DEBUG,
            tracing::Level::TRACE,
        ] {
            assert!(Level::lookup(level_name(&level)).is_some());
        }
    }
}
