use std::fmt;

/// Calendar-aware span of time.
///
/// Unlike [`time::Duration`], an interval keeps years and months separate from
/// days, because their length depends on the date they are applied to. The
/// fields are never normalised against each other; `hours: 30` stays thirty
/// hours.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Interval {
    /// `true` when the interval points backwards in time.
    pub negative: bool,
    /// Whole years.
    pub years: u32,
    /// Whole months.
    pub months: u32,
    /// Whole days; wide enough for any `Duration`.
    pub days: u64,
    /// Whole hours.
    pub hours: u32,
    /// Whole minutes.
    pub minutes: u32,
    /// Whole seconds.
    pub seconds: u32,
    /// Sub-second part in microseconds.
    pub microseconds: u32,
}

impl Interval {
    /// Creates a forward interval from calendar components.
    #[must_use]
    pub const fn new(years: u32, months: u32, days: u64) -> Self {
        Self {
            negative: false,
            years,
            months,
            days,
            hours: 0,
            minutes: 0,
            seconds: 0,
            microseconds: 0,
        }
    }

    /// Sets the time-of-day components.
    #[must_use]
    pub const fn with_time(mut self, hours: u32, minutes: u32, seconds: u32) -> Self {
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
        self
    }

    /// Sets the sub-second component.
    #[must_use]
    pub const fn with_microseconds(mut self, microseconds: u32) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Flips the interval backwards in time.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    const fn sign(&self) -> char {
        if self.negative { '-' } else { '+' }
    }

    /// Splits a non-negative second count into days and a time of day.
    const fn from_seconds(negative: bool, total_seconds: u64, microseconds: u32) -> Self {
        Self {
            negative,
            years: 0,
            months: 0,
            days: total_seconds / 86_400,
            // Each remainder is below 24, 60 and 60 respectively.
            hours: (total_seconds % 86_400 / 3_600) as u32,
            minutes: (total_seconds % 3_600 / 60) as u32,
            seconds: (total_seconds % 60) as u32,
            microseconds,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interval: {} {} years, {} months, {} days, {}:{}:{}.{:06}",
            self.sign(),
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.microseconds,
        )
    }
}

impl From<time::Duration> for Interval {
    fn from(duration: time::Duration) -> Self {
        // `abs` saturates, so `Duration::MIN` maps onto the magnitude of `MAX`.
        let magnitude = duration.abs();
        Self::from_seconds(
            duration.is_negative(),
            magnitude.whole_seconds().unsigned_abs(),
            magnitude.subsec_microseconds().unsigned_abs(),
        )
    }
}

impl From<std::time::Duration> for Interval {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_seconds(false, duration.as_secs(), duration.subsec_micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_fraction() {
        let interval = Interval::new(1, 2, 3)
            .with_time(4, 5, 6)
            .with_microseconds(789);
        assert_eq!(
            interval.to_string(),
            "Interval: + 1 years, 2 months, 3 days, 4:5:6.000789"
        );
    }

    #[test]
    fn negative_interval_uses_minus_sign() {
        let interval = Interval::new(0, 0, 1).negated();
        assert_eq!(
            interval.to_string(),
            "Interval: - 0 years, 0 months, 1 days, 0:0:0.000000"
        );
    }

    #[test]
    fn converts_time_duration() {
        let duration = time::Duration::seconds(-(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5))
            - time::Duration::microseconds(250_000);
        let interval = Interval::from(duration);
        assert!(interval.negative);
        assert_eq!(
            (interval.days, interval.hours, interval.minutes, interval.seconds),
            (2, 3, 4, 5)
        );
        assert_eq!(interval.microseconds, 250_000);
    }

    #[test]
    fn day_counts_beyond_u32_are_kept() {
        let days = (1_u64 << 32) + 4;
        let interval = Interval::from(std::time::Duration::from_secs(86_400 * days));
        assert_eq!(interval.days, 4_294_967_300);
        assert_eq!(
            interval.to_string(),
            "Interval: + 0 years, 0 months, 4294967300 days, 0:0:0.000000"
        );
    }

    #[test]
    fn largest_std_duration_converts_exactly() {
        let interval = Interval::from(std::time::Duration::from_secs(u64::MAX));
        assert_eq!(
            interval.to_string(),
            "Interval: + 0 years, 0 months, 213503982334601 days, 7:0:15.000000"
        );
    }

    #[test]
    fn extreme_time_durations_convert_exactly() {
        assert_eq!(
            Interval::from(time::Duration::MAX).to_string(),
            "Interval: + 0 years, 0 months, 106751991167300 days, 15:30:7.999999"
        );
        let minimum = Interval::from(time::Duration::MIN);
        assert!(minimum.negative);
        assert_eq!(minimum.days, 106_751_991_167_300);
        assert_eq!(minimum.microseconds, 999_999);
    }

    #[test]
    fn converts_std_duration() {
        let interval = Interval::from(std::time::Duration::from_millis(90_061_500));
        assert_eq!(
            interval.to_string(),
            "Interval: + 0 years, 0 months, 1 days, 1:1:1.500000"
        );
    }
}
