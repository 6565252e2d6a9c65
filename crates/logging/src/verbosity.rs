//! crates/logging/src/verbosity.rs
//! Verbosity threshold bounded to the settable range.

use std::fmt;

/// Inclusive upper bound on the severity ordinals a logger emits.
///
/// The value is clamped into [`MIN`](Self::MIN)`..=`[`MAX`](Self::MAX) on
/// construction. Every threshold admits emergency lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Verbosity(i8);

impl Verbosity {
    /// Quietest setting: only emergency and alert lines.
    pub const MIN: Self = Self(-3);
    /// Loudest setting: every known level, debug included.
    pub const MAX: Self = Self(3);
    /// Warning and more severe.
    pub const DEFAULT: Self = Self(0);

    /// Creates a threshold, clamping `value` into the settable range.
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// assert_eq!(Verbosity::clamped(-100), Verbosity::MIN);
    /// assert_eq!(Verbosity::clamped(2).get(), 2);
    /// ```
    #[must_use]
    pub const fn clamped(value: i32) -> Self {
        let bounded = if value < Self::MIN.0 as i32 {
            Self::MIN.0
        } else if value > Self::MAX.0 as i32 {
            Self::MAX.0
        } else {
            value as i8
        };
        Self(bounded)
    }

    /// Returns the raw threshold.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Reports whether a line with `ordinal` passes this threshold.
    #[must_use]
    pub const fn permits(self, ordinal: i8) -> bool {
        ordinal <= self.0
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for Verbosity {
    fn from(value: i32) -> Self {
        Self::clamped(value)
    }
}

impl From<Verbosity> for i8 {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.get()
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
