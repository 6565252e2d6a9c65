//! Integration tests for threshold filtering and stream selection.
//!
//! Every known level is emitted exactly when its ordinal is at most the
//! threshold, and emitted lines land on standard error iff the ordinal is
//! negative.

use logging::{ConsoleLogger, Context, FixedClock, Level, Logger, UNKNOWN_ORDINAL, map_level_to_ordinal};
use logging_sink::{Destinations, SharedBuffer};
use proptest::prelude::*;
use time::macros::datetime;

fn capture(verbosity: i32) -> (ConsoleLogger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let logger = ConsoleLogger::with_destinations(verbosity, Destinations::new(out.clone(), err.clone()))
        .with_clock(FixedClock(datetime!(2023-11-14 22:13:20 UTC)));
    (logger, out, err)
}

fn level_strategy() -> impl Strategy<Value = Level> {
    proptest::sample::select(Level::ALL.to_vec())
}

proptest! {
    #[test]
    fn emitted_iff_ordinal_within_threshold(threshold in -3i32..=3, level in level_strategy()) {
        let (logger, out, err) = capture(threshold);
        logger.log(level.name(), "probe", &Context::new());

        let written = out.lines().len() + err.lines().len();
        let expected = usize::from(i32::from(level.ordinal()) <= threshold);
        prop_assert_eq!(written, expected);
    }

    #[test]
    fn negative_ordinals_use_error_stream(level in level_strategy()) {
        let (logger, out, err) = capture(3);
        logger.log(level.name(), "probe", &Context::new());

        if level.ordinal() < 0 {
            prop_assert_eq!(err.lines().len(), 1);
            prop_assert!(out.is_empty());
        } else {
            prop_assert_eq!(out.lines().len(), 1);
            prop_assert!(err.is_empty());
        }
    }

    #[test]
    fn thresholds_clamp_into_range(requested in any::<i32>()) {
        let (logger, _, _) = capture(0);
        let applied = logger.set_verbosity_level(requested).verbosity_level();
        prop_assert_eq!(i32::from(applied), requested.clamp(-3, 3));
    }

    #[test]
    fn unknown_levels_never_emit(threshold in -3i32..=3, level in "[a-z]{1,12}") {
        prop_assume!(Level::lookup(&level).is_none());
        let (logger, out, err) = capture(threshold);
        logger.log(&level, "probe", &Context::new());
        prop_assert!(out.is_empty());
        prop_assert!(err.is_empty());
    }
}

#[test]
fn quietest_threshold_keeps_emergency_and_alert() {
    let (logger, out, err) = capture(-3);
    logger.emergency("first", &Context::new());
    logger.alert("second", &Context::new());
    logger.critical("dropped", &Context::new());
    logger.log("bogus", "dropped", &Context::new());
    assert!(out.is_empty());
    assert_eq!(
        err.lines(),
        [
            "2023-11-14 22:13:20 [EMERGENCY] first",
            "2023-11-14 22:13:20 [  ALERT  ] second",
        ]
    );
}

#[test]
fn unknown_levels_share_the_emergency_ordinal_but_stay_silent() {
    assert_eq!(map_level_to_ordinal("bogus"), UNKNOWN_ORDINAL);
    assert_eq!(map_level_to_ordinal("emergency"), UNKNOWN_ORDINAL);

    let (logger, out, err) = capture(3);
    logger.log("bogus", "dropped", &Context::new());
    logger.log("emergency", "kept", &Context::new());
    assert!(out.is_empty());
    assert_eq!(err.lines().len(), 1);
}

#[test]
fn raising_the_threshold_admits_more_levels() {
    let (logger, out, err) = capture(-3);
    let mut counts = Vec::new();
    for threshold in -3..=3 {
        out.clear();
        err.clear();
        logger.set_verbosity_level(threshold);
        for level in Level::ALL {
            logger.log_level(level, "probe", &Context::new());
        }
        counts.push(out.lines().len() + err.lines().len());
    }
    assert_eq!(counts, [2, 3, 4, 5, 6, 7, 8]);
}
