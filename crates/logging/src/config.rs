//! crates/logging/src/config.rs
//! Logger configuration: a single verbosity threshold.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::level::Level;
use crate::logger::ConsoleLogger;
use crate::verbosity::Verbosity;

/// Environment variable read by [`LoggerConfig::from_env`].
pub const VERBOSITY_ENV_VAR: &str = "CONSOLE_LOGGER_VERBOSITY";

/// Errors raised while reading logger configuration.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The verbosity text is neither an integer nor a level name.
    #[error("invalid verbosity `{0}`; expected an integer or a level name")]
    InvalidVerbosity(String),
    /// The environment variable holds bytes that are not valid Unicode.
    #[error("CONSOLE_LOGGER_VERBOSITY is not valid unicode")]
    NotUnicode,
}

/// Settings for building a [`ConsoleLogger`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Verbosity threshold; clamped to `-3..=3` when applied.
    pub verbosity: i8,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::DEFAULT.get(),
        }
    }
}

impl LoggerConfig {
    /// Maps a count of `-v` flags onto the threshold.
    ///
    /// No flags keeps the warning default; each flag admits the next level
    /// down, saturating at debug.
    ///
    /// ```
    /// use logging::{Level, LoggerConfig};
    ///
    /// assert_eq!(LoggerConfig::from_verbose_count(0).verbosity, Level::Warning.ordinal());
    /// assert_eq!(LoggerConfig::from_verbose_count(2).verbosity, Level::Info.ordinal());
    /// assert_eq!(LoggerConfig::from_verbose_count(9).verbosity, Level::Debug.ordinal());
    /// ```
    #[must_use]
    pub fn from_verbose_count(count: u8) -> Self {
        let level = match count {
            0 => Level::Warning,
            1 => Level::Notice,
            2 => Level::Info,
            _ => Level::Debug,
        };
        Self {
            verbosity: level.ordinal(),
        }
    }

    /// Only emergency and alert lines.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            verbosity: Verbosity::MIN.get(),
        }
    }

    /// Reads [`VERBOSITY_ENV_VAR`], falling back to the default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(VERBOSITY_ENV_VAR) {
            Ok(text) => Self::from_env_value(Some(&text)),
            Err(env::VarError::NotPresent) => Self::from_env_value(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    /// Interprets an environment value; `None` and blank text mean the default.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => text.parse(),
        }
    }

    /// Returns the clamped threshold.
    #[must_use]
    pub const fn threshold(&self) -> Verbosity {
        Verbosity::clamped(self.verbosity as i32)
    }

    /// Builds a console logger writing to the standard streams.
    #[must_use]
    pub fn build(&self) -> ConsoleLogger {
        ConsoleLogger::new(i32::from(self.threshold().get()))
    }
}

/// Parses a verbosity given as an integer or as a level name or alias.
///
/// Integers are clamped to the settable range; level names resolve to their
/// ordinal, so `emergency` clamps to `-3` like any other out-of-range value.
///
/// ```
/// use logging::{ConfigError, parse_verbosity};
///
/// assert_eq!(parse_verbosity("info").unwrap().get(), 2);
/// assert_eq!(parse_verbosity("-10").unwrap().get(), -3);
/// assert!(matches!(parse_verbosity("loud"), Err(ConfigError::InvalidVerbosity(_))));
/// ```
pub fn parse_verbosity(text: &str) -> Result<Verbosity, ConfigError> {
    let trimmed = text.trim();
    if let Ok(number) = trimmed.parse::<i64>() {
        let bounded = number.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        return Ok(Verbosity::clamped(bounded));
    }
    Level::lookup(trimmed)
        .map(|level| Verbosity::clamped(i32::from(level.ordinal())))
        .ok_or_else(|| ConfigError::InvalidVerbosity(text.to_owned()))
}

impl FromStr for LoggerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_verbosity(s).map(|verbosity| Self {
            verbosity: verbosity.get(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warning() {
        assert_eq!(LoggerConfig::default().verbosity, 0);
        assert_eq!(LoggerConfig::default().build().verbosity_level(), 0);
    }

    #[test]
    fn quiet_is_minimum() {
        assert_eq!(LoggerConfig::quiet().threshold(), Verbosity::MIN);
    }

    #[test]
    fn verbose_counts_step_through_levels() {
        let thresholds: Vec<i8> = (0..=4)
            .map(|count| LoggerConfig::from_verbose_count(count).verbosity)
            .collect();
        assert_eq!(thresholds, [0, 1, 2, 3, 3]);
    }

    #[test]
    fn parses_integers_and_names() {
        assert_eq!("2".parse::<LoggerConfig>(), Ok(LoggerConfig { verbosity: 2 }));
        assert_eq!(" debug ".parse::<LoggerConfig>(), Ok(LoggerConfig { verbosity: 3 }));
        assert_eq!("emergency".parse::<LoggerConfig>(), Ok(LoggerConfig { verbosity: -3 }));
    }

    #[test]
    fn huge_integers_clamp() {
        assert_eq!(parse_verbosity("9000000000"), Ok(Verbosity::MAX));
        assert_eq!(parse_verbosity("-9000000000"), Ok(Verbosity::MIN));
    }

    #[test]
    fn rejects_unknown_text() {
        assert_eq!(
            "chatty".parse::<LoggerConfig>(),
            Err(ConfigError::InvalidVerbosity("chatty".to_string()))
        );
    }

    #[test]
    fn env_value_defaults_when_missing_or_blank() {
        assert_eq!(LoggerConfig::from_env_value(None), Ok(LoggerConfig::default()));
        assert_eq!(LoggerConfig::from_env_value(Some("  ")), Ok(LoggerConfig::default()));
        assert_eq!(
            LoggerConfig::from_env_value(Some("notice")),
            Ok(LoggerConfig { verbosity: 1 })
        );
    }

    #[test]
    fn out_of_range_config_clamps_on_build() {
        let config = LoggerConfig { verbosity: 42 };
        assert_eq!(config.threshold(), Verbosity::MAX);
        assert_eq!(config.build().verbosity_level(), 3);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: LoggerConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, LoggerConfig::default());
        let config: LoggerConfig = serde_json::from_str(r#"{"verbosity": -2}"#).expect("deserialize");
        assert_eq!(config.verbosity, -2);
    }

    #[test]
    fn error_messages_name_the_input() {
        let error = parse_verbosity("loud").unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid verbosity `loud`; expected an integer or a level name"
        );
    }
}
