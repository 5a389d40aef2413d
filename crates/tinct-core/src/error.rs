//! # Error Types
//!
//! Gating and formatting a line cannot fail. The only runtime failure a
//! logger reports is its sink refusing a write, which is passed back to the
//! caller unchanged rather than retried or dropped.
//!
//! Parsing level and panic-mode names from text has its own small error type.

use std::io;

use thiserror::Error;

/// Error returned by the non-terminal logging entry points
#[derive(Error, Debug)]
pub enum LogError
{
    /// The sink failed to write the rendered line
    ///
    /// The line was formatted but may be partially written or missing from
    /// the output. The logger does not retry.
    #[error("Failed to write log line")]
    Write(#[source] io::Error),

    /// The sink failed to flush buffered output
    #[error("Failed to flush log sink")]
    Flush(#[source] io::Error),
}

/// Error parsing a configuration value from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError
{
    /// Not one of the seven level names (or a known alias)
    #[error("Unknown log level: {0}. Use 'panic', 'fatal', 'error', 'warn', 'info', 'trace', or 'debug'")]
    UnknownLevel(String),

    /// Not a recognised panic mode
    #[error("Unknown panic mode: {0}. Use 'unwind' or 'exit'")]
    UnknownPanicMode(String),
}

/// Convenience type alias for `Result<T, LogError>`
///
/// ```rust
/// use tinct_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LogError>;
