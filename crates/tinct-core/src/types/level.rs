//! Severity levels and their fixed rank/color table.

use std::fmt;
use std::str::FromStr;

use super::Color;
use crate::error::ParseError;

/// Severity of a log line
///
/// Variants are declared in rank order, so the derived `Ord` agrees with
/// [`Level::rank`]: `Level::Panic < Level::Fatal < ... < Level::Debug`.
/// A higher rank means a more verbose level.
///
/// | Level | Rank | Color |
/// |---|---|---|
/// | PANIC | 0 | dark magenta |
/// | FATAL | 1 | magenta |
/// | ERROR | 2 | red |
/// | WARN  | 3 | yellow |
/// | INFO  | 4 | blue |
/// | TRACE | 5 | cyan |
/// | DEBUG | 6 | gray |
///
/// Note that TRACE ranks *below* DEBUG here, the reverse of the `log` and
/// `tracing` crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level
{
    /// Unrecoverable error; the line is followed by an unwind or exit
    Panic,
    /// Fatal error; the line is followed by process exit with status 1
    Fatal,
    /// Error
    Error,
    /// Warning
    Warn,
    /// Info (default threshold)
    Info,
    /// Trace
    Trace,
    /// Debug (most verbose)
    Debug,
}

impl Level
{
    /// Every level, ordered by rank
    pub const ALL: [Level; 7] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Trace,
        Level::Debug,
    ];

    /// Numeric rank compared against a logger's threshold
    #[must_use]
    pub const fn rank(self) -> i32
    {
        match self {
            Level::Panic => 0,
            Level::Fatal => 1,
            Level::Error => 2,
            Level::Warn => 3,
            Level::Info => 4,
            Level::Trace => 5,
            Level::Debug => 6,
        }
    }

    /// Level with the given rank, if any
    #[must_use]
    pub fn from_rank(rank: i32) -> Option<Level>
    {
        Level::ALL.into_iter().find(|level| level.rank() == rank)
    }

    /// Upper-case label printed in the line
    #[must_use]
    pub const fn label(self) -> &'static str
    {
        match self {
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
        }
    }

    /// Label color used when color output is enabled
    #[must_use]
    pub const fn color(self) -> Color
    {
        match self {
            Level::Panic => Color::DarkMagenta,
            Level::Fatal => Color::Magenta,
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Blue,
            Level::Trace => Color::Cyan,
            Level::Debug => Color::Gray,
        }
    }

    /// Whether logging at this level ends the program
    #[must_use]
    pub const fn is_terminal(self) -> bool
    {
        matches!(self, Level::Panic | Level::Fatal)
    }
}

impl fmt::Display for Level
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.label())
    }
}

impl FromStr for Level
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" | "err" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "trace" => Ok(Level::Trace),
            "debug" | "dbg" => Ok(Level::Debug),
            _ => Err(ParseError::UnknownLevel(s.to_string())),
        }
    }
}
