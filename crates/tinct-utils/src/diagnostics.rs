//! # Diagnostics
//!
//! Subscriber setup for the library's own `tracing` events.
//!
//! `tinct-core` reports a few things about itself through `tracing`: a sink
//! that failed while writing a FATAL/PANIC line, the termination that
//! followed, and (from this crate) how the configuration was resolved. These
//! are separate from the log lines a [`Logger`](tinct_core::Logger) writes,
//! and go to stderr so they never interleave with stdout output.
//!
//! Without a subscriber the events are simply discarded.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: filter directives (e.g. `RUST_LOG=tinct_core=debug`); wins when set
//! - `TINCT_DIAGNOSTICS`: plain level used when `RUST_LOG` is unset (default `warn`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use tinct_utils::init_diagnostics;
//!
//! init_diagnostics(tracing::Level::DEBUG).expect("Failed to initialize diagnostics");
//! ```

use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Variable holding the fallback diagnostics level
pub const TINCT_DIAGNOSTICS: &str = "TINCT_DIAGNOSTICS";

/// Level used when neither `RUST_LOG` nor `TINCT_DIAGNOSTICS` is set
pub const DEFAULT_DIAGNOSTICS_LEVEL: Level = Level::WARN;

/// Parse a diagnostics level name (`error` through `trace`, any case)
///
/// ## Errors
///
/// Returns [`DiagnosticsError::InvalidLevel`] if `tracing` does not recognise
/// the name.
pub fn parse_diagnostic_level(value: &str) -> Result<Level, DiagnosticsError>
{
    Level::from_str(value.trim()).map_err(|_| DiagnosticsError::InvalidLevel(value.to_string()))
}

/// Install a stderr subscriber at `level`
///
/// `RUST_LOG`, when set and valid, overrides `level`.
///
/// ## Errors
///
/// Returns [`DiagnosticsError::InitializationFailed`] if a global subscriber
/// is already installed.
pub fn init_diagnostics(level: Level) -> Result<(), DiagnosticsError>
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(env_filter);

    Registry::default()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| DiagnosticsError::InitializationFailed(e.to_string()))
}

/// Install a stderr subscriber configured from the environment
///
/// Reads `TINCT_DIAGNOSTICS` for the level (default `warn`); `RUST_LOG`
/// still overrides it.
///
/// ## Errors
///
/// Returns [`DiagnosticsError::InvalidLevel`] for an unrecognised
/// `TINCT_DIAGNOSTICS`, or [`DiagnosticsError::InitializationFailed`] if a
/// global subscriber is already installed.
pub fn init_diagnostics_from_env() -> Result<(), DiagnosticsError>
{
    let level = match env::var(TINCT_DIAGNOSTICS) {
        Ok(value) if !value.trim().is_empty() => parse_diagnostic_level(&value)?,
        _ => DEFAULT_DIAGNOSTICS_LEVEL,
    };
    init_diagnostics(level)
}

/// Diagnostics initialization error
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError
{
    /// Invalid diagnostics level
    #[error("Invalid diagnostics level: {0}. Use 'error', 'warn', 'info', 'debug', or 'trace'")]
    InvalidLevel(String),

    /// Failed to install the subscriber
    #[error("Failed to initialize diagnostics: {0}")]
    InitializationFailed(String),
}
