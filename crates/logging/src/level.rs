//! crates/logging/src/level.rs
//! Severity levels and their fixed ordinal table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordinal assigned to every level name missing from the table.
///
/// It equals the emergency ordinal and sits below
/// [`Verbosity::MIN`](crate::Verbosity::MIN). Loggers reject unknown names
/// before comparing ordinals, so lines tagged with them are never emitted.
pub const UNKNOWN_ORDINAL: i8 = -4;

/// The eight severity levels, most severe first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately.
    Alert,
    /// Critical conditions.
    Critical,
    /// Runtime errors.
    Error,
    /// Exceptional occurrences that are not errors.
    Warning,
    /// Normal but significant events.
    Notice,
    /// Interesting events.
    Info,
    /// Detailed debug information.
    Debug,
}

/// Error returned when a string names no known [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level `{0}`; expected a level name or an ordinal between -4 and 3")]
pub struct LevelParseError(pub String);

impl Level {
    /// Every level ordered from most to least severe.
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the severity ordinal; lower is more severe.
    #[must_use]
    pub const fn ordinal(self) -> i8 {
        match self {
            Self::Emergency => -4,
            Self::Alert => -3,
            Self::Critical => -2,
            Self::Error => -1,
            Self::Warning => 0,
            Self::Notice => 1,
            Self::Info => 2,
            Self::Debug => 3,
        }
    }

    /// Returns the lower-case level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the level bound to `ordinal`, if any.
    #[must_use]
    pub const fn from_ordinal(ordinal: i8) -> Option<Self> {
        match ordinal {
            -4 => Some(Self::Emergency),
            -3 => Some(Self::Alert),
            -2 => Some(Self::Critical),
            -1 => Some(Self::Error),
            0 => Some(Self::Warning),
            1 => Some(Self::Notice),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Looks up a level by exact name or numeric alias (`"-4"` through `"3"`).
    #[must_use]
    pub fn lookup(text: &str) -> Option<Self> {
        match text {
            "emergency" | "-4" => Some(Self::Emergency),
            "alert" | "-3" => Some(Self::Alert),
            "critical" | "-2" => Some(Self::Critical),
            "error" | "-1" => Some(Self::Error),
            "warning" | "0" => Some(Self::Warning),
            "notice" | "1" => Some(Self::Notice),
            "info" | "2" => Some(Self::Info),
            "debug" | "3" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// Maps a level name or alias to its ordinal.
///
/// Anything outside the table resolves to [`UNKNOWN_ORDINAL`].
///
/// ```
/// use logging::{map_level_to_ordinal, UNKNOWN_ORDINAL};
///
/// assert_eq!(map_level_to_ordinal("warning"), 0);
/// assert_eq!(map_level_to_ordinal("-2"), -2);
/// assert_eq!(map_level_to_ordinal("WARNING"), UNKNOWN_ORDINAL);
/// ```
#[must_use]
pub fn map_level_to_ordinal(level: &str) -> i8 {
    Level::lookup(level).map_or(UNKNOWN_ORDINAL, Level::ordinal)
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| LevelParseError(s.to_owned()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_table() {
        let expected = [-4, -3, -2, -1, 0, 1, 2, 3];
        for (level, ordinal) in Level::ALL.iter().zip(expected) {
            assert_eq!(level.ordinal(), ordinal, "{level}");
        }
    }

    #[test]
    fn numeric_aliases_match_names() {
        for level in Level::ALL {
            let alias = level.ordinal().to_string();
            assert_eq!(Level::lookup(&alias), Some(level));
            assert_eq!(map_level_to_ordinal(&alias), level.ordinal());
        }
    }

    #[test]
    fn from_ordinal_inverts_ordinal() {
        for level in Level::ALL {
            assert_eq!(Level::from_ordinal(level.ordinal()), Some(level));
        }
        assert_eq!(Level::from_ordinal(4), None);
        assert_eq!(Level::from_ordinal(-5), None);
    }

    #[test]
    fn unknown_names_map_to_sentinel() {
        for text in ["bogus", "", "Warning", "INFO", " info", "4", "-5", "+1"] {
            assert_eq!(map_level_to_ordinal(text), UNKNOWN_ORDINAL, "input: {text:?}");
        }
    }

    #[test]
    fn parse_reports_unknown_text() {
        assert_eq!("notice".parse::<Level>(), Ok(Level::Notice));
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(LevelParseError("verbose".to_string()))
        );
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Level::Critical.to_string(), "critical");
        assert_eq!(Level::Debug.as_ref(), "debug");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Level::Notice).expect("serialize");
        assert_eq!(json, "\"notice\"");
        let level: Level = serde_json::from_str("\"alert\"").expect("deserialize");
        assert_eq!(level, Level::Alert);
    }
}
