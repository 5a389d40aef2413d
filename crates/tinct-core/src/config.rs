//! # Logger Configuration
//!
//! Plain data describing how a [`Logger`](crate::Logger) gates and decorates
//! lines. Nothing here reads the environment; deriving a [`Config`] from
//! `LOG_*` variables, files or flags is the embedding application's job
//! (see `tinct-utils`).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::Level;

/// What happens after a PANIC line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanicMode
{
    /// Unwind the calling thread with the rendered line as the panic payload
    ///
    /// The host may catch it with `std::panic::catch_unwind` or a thread
    /// join handle; uncaught, it terminates the thread (and the process if
    /// it is the main thread).
    #[default]
    Unwind,
    /// Exit the whole process with status 2
    Exit,
}

impl fmt::Display for PanicMode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            PanicMode::Unwind => f.write_str("unwind"),
            PanicMode::Exit => f.write_str("exit"),
        }
    }
}

impl FromStr for PanicMode
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str() {
            "unwind" | "panic" => Ok(PanicMode::Unwind),
            "exit" => Ok(PanicMode::Exit),
            _ => Err(ParseError::UnknownPanicMode(s.to_string())),
        }
    }
}

/// Threshold and formatting toggles for a logger
///
/// `threshold` is not range-checked. Values below 0 still emit FATAL and
/// PANIC; values of 6 or more emit everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config
{
    /// Highest rank that is emitted (see [`Level::rank`])
    pub threshold: i32,
    /// Include the calendar date in the timestamp
    pub use_date: bool,
    /// Include `[file:line]` of the call site
    pub use_caller_location: bool,
    /// Render timestamps in UTC instead of local time
    pub use_utc: bool,
    /// Wrap level labels in ANSI color codes
    pub use_color: bool,
    /// Behaviour of the PANIC level after its line is written
    pub panic_mode: PanicMode,
}

impl Config
{
    /// Config with the given threshold and every toggle on
    #[must_use]
    pub const fn with_threshold(threshold: i32) -> Self
    {
        Self {
            threshold,
            use_date: true,
            use_caller_location: true,
            use_utc: true,
            use_color: true,
            panic_mode: PanicMode::Unwind,
        }
    }

    /// Config whose threshold is the rank of `level`
    #[must_use]
    pub const fn with_level(level: Level) -> Self
    {
        Self::with_threshold(level.rank())
    }
}

/// INFO threshold, every decoration on, PANIC unwinds.
impl Default for Config
{
    fn default() -> Self
    {
        Self::with_level(Level::Info)
    }
}
