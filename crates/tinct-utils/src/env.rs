//! # Environment Configuration
//!
//! Builds a [`Config`] from `LOG_*` environment variables.
//!
//! ## Environment Variables
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `LOG_LEVEL` | threshold, as a level name (`info`, `DEBUG`, ...) or an integer rank | `info` |
//! | `LOG_DATE` | include the date in timestamps | on |
//! | `LOG_COLOR` | colorize level labels | on |
//! | `LOG_FUNC` | include `[file:line]` of the caller | on |
//! | `LOG_UTC` | UTC timestamps instead of local time | on |
//! | `LOG_PANIC` | `unwind` or `exit` after a PANIC line | `unwind` |
//!
//! The boolean switches are turned off only by `false` or `0` (any case).
//! Any other value, including an empty one, leaves them on.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tinct_utils::logger_from_env;
//!
//! let logger = logger_from_env().expect("invalid LOG_* configuration");
//! logger.info("configured from the environment")?;
//! # Ok::<(), tinct_core::LogError>(())
//! ```

use std::env;

use thiserror::Error;
use tinct_core::{Config, Level, Logger, PanicMode, ParseError};
use tracing::debug;

/// Threshold variable
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Date toggle variable
pub const LOG_DATE: &str = "LOG_DATE";
/// Color toggle variable
pub const LOG_COLOR: &str = "LOG_COLOR";
/// Caller location toggle variable
pub const LOG_FUNC: &str = "LOG_FUNC";
/// UTC toggle variable
pub const LOG_UTC: &str = "LOG_UTC";
/// Panic mode variable
pub const LOG_PANIC: &str = "LOG_PANIC";

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError
{
    /// A variable held a value that could not be parsed
    #[error("Invalid value for {key}: {source}")]
    InvalidValue
    {
        /// Name of the offending variable
        key: &'static str,
        /// Why it was rejected
        #[source]
        source: ParseError,
    },
}

/// Read the configuration from the process environment
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidValue`] if `LOG_LEVEL` or `LOG_PANIC` is set
/// to something unrecognised.
pub fn config_from_env() -> Result<Config, ConfigError>
{
    config_from_lookup(|key| env::var(key).ok())
}

/// Read the configuration through an arbitrary lookup function
///
/// `lookup` receives a variable name and returns its value, if set. This is
/// how tests (and hosts with their own settings store) feed values in.
///
/// ```rust
/// use tinct_utils::config_from_lookup;
///
/// let config = config_from_lookup(|key| match key {
///     "LOG_LEVEL" => Some("debug".to_string()),
///     "LOG_COLOR" => Some("false".to_string()),
///     _ => None,
/// })?;
/// assert_eq!(config.threshold, 6);
/// assert!(!config.use_color);
/// assert!(config.use_date);
/// # Ok::<(), tinct_utils::ConfigError>(())
/// ```
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidValue`] if `LOG_LEVEL` or `LOG_PANIC` is set
/// to something unrecognised.
pub fn config_from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();

    let threshold = match non_empty(&lookup, LOG_LEVEL) {
        Some(value) => parse_threshold(&value).map_err(|source| ConfigError::InvalidValue { key: LOG_LEVEL, source })?,
        None => defaults.threshold,
    };

    let panic_mode = match non_empty(&lookup, LOG_PANIC) {
        Some(value) => value
            .parse::<PanicMode>()
            .map_err(|source| ConfigError::InvalidValue { key: LOG_PANIC, source })?,
        None => defaults.panic_mode,
    };

    let config = Config {
        threshold,
        use_date: switch(&lookup, LOG_DATE, defaults.use_date),
        use_caller_location: switch(&lookup, LOG_FUNC, defaults.use_caller_location),
        use_utc: switch(&lookup, LOG_UTC, defaults.use_utc),
        use_color: switch(&lookup, LOG_COLOR, defaults.use_color),
        panic_mode,
    };
    debug!(?config, "resolved logger configuration");
    Ok(config)
}

/// Build a stdout [`Logger`] from the process environment
///
/// ## Errors
///
/// See [`config_from_env`].
pub fn logger_from_env() -> Result<Logger, ConfigError>
{
    config_from_env().map(Logger::from_config)
}

/// Parse a threshold given as a level name (any case) or a bare integer rank
///
/// ```rust
/// use tinct_utils::parse_threshold;
///
/// assert_eq!(parse_threshold("warn").unwrap(), 3);
/// assert_eq!(parse_threshold("-1").unwrap(), -1);
/// ```
///
/// ## Errors
///
/// Returns [`ParseError::UnknownLevel`] if `value` is neither.
pub fn parse_threshold(value: &str) -> Result<i32, ParseError>
{
    match value.trim().parse::<i32>() {
        Ok(rank) => Ok(rank),
        Err(_) => value.parse::<Level>().map(Level::rank),
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn switch<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "false" | "0" => false,
            "true" | "1" | "" => true,
            other => {
                debug!(key, value = other, "unrecognised switch value, treating as on");
                true
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError>
    {
        let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        config_from_lookup(move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
    }

    #[test]
    fn test_parse_threshold()
    {
        assert_eq!(parse_threshold("warn").unwrap(), 3);
        assert_eq!(parse_threshold("DEBUG").unwrap(), 6);
        assert_eq!(parse_threshold("-1").unwrap(), -1);
        assert_eq!(parse_threshold(" 10 ").unwrap(), 10);
        assert!(parse_threshold("loud").is_err());
    }

    #[test]
    fn test_switch_values()
    {
        for (value, expected) in [("false", false), ("FALSE", false), ("0", false), ("true", true), ("1", true), ("yes", true), ("", true)] {
            let config = from_pairs(&[(LOG_DATE, value)]).unwrap();
            assert_eq!(config.use_date, expected, "LOG_DATE={value:?}");
        }
    }
}
