//! # Logger
//!
//! The gate-and-format core and its level entry points.
//!
//! ## Line layout
//!
//! ```text
//! <timestamp> <label> [<file>:<line>] <message>
//! ```
//!
//! - `timestamp`: `YYYY-MM-DD HH:MM:SS.mmm`, or `HH:MM:SS.mmm` without the date
//! - `label`: `INFO`, `WARN`, ..., optionally wrapped in its ANSI color
//! - `[file:line]`: only with caller location on; otherwise the field and its
//!   separating space are both absent
//! - `message`: verbatim
//!
//! ## Gating
//!
//! DEBUG, TRACE, INFO, WARN and ERROR are emitted iff
//! `threshold >= level.rank()`. A suppressed call writes nothing and returns
//! an empty string.
//!
//! FATAL and PANIC are never suppressed. Their line is written and flushed,
//! then the [`Terminator`] ends the program.
//!
//! ## Thread Safety
//!
//! A `Logger` is immutable after construction and is `Send + Sync`. Cloning
//! is cheap and clones share the same sink, clock and terminator.

use std::fmt;
use std::sync::Arc;

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::config::{Config, PanicMode};
use crate::error::{LogError, Result};
use crate::sink::{Sink, StdoutSink};
use crate::terminate::{ProcessTerminator, Terminator, FATAL_EXIT_CODE, PANIC_EXIT_CODE};
use crate::types::{CallSite, Level};

/// Leveled, colorized line logger
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use tinct_core::{FixedClock, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(4, false, false, true, false)
///     .with_clock(FixedClock::from_millis(45_296_789).unwrap())
///     .with_sink(Arc::clone(&sink));
///
/// assert_eq!(logger.info("hello")?, "12:34:56.789 INFO hello");
/// assert_eq!(logger.debug("hidden")?, "");
/// assert_eq!(sink.lines(), vec!["12:34:56.789 INFO hello"]);
/// # Ok::<(), tinct_core::LogError>(())
/// ```
#[derive(Clone)]
pub struct Logger
{
    config: Config,
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    terminator: Arc<dyn Terminator>,
}

impl fmt::Debug for Logger
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Logger").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for Logger
{
    fn default() -> Self
    {
        Self::from_config(Config::default())
    }
}

impl Logger
{
    /// Create a logger writing to stdout
    ///
    /// `threshold` is compared against [`Level::rank`] and is not
    /// range-checked. PANIC unwinds (see [`PanicMode`]).
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn new(threshold: i32, use_date: bool, use_caller_location: bool, use_utc: bool, use_color: bool) -> Self
    {
        Self::from_config(Config {
            threshold,
            use_date,
            use_caller_location,
            use_utc,
            use_color,
            panic_mode: PanicMode::default(),
        })
    }

    /// Create a logger from a full [`Config`], writing to stdout
    #[must_use]
    pub fn from_config(config: Config) -> Self
    {
        Self {
            config,
            sink: Arc::new(StdoutSink),
            clock: Arc::new(SystemClock),
            terminator: Arc::new(ProcessTerminator),
        }
    }

    /// Replace the output sink
    ///
    /// Pass an `Arc` to keep a handle on the sink (e.g. a [`MemorySink`](crate::MemorySink)).
    #[must_use]
    pub fn with_sink<S: Sink + 'static>(mut self, sink: S) -> Self
    {
        self.sink = Arc::new(sink);
        self
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace how FATAL and PANIC terminate the program
    #[must_use]
    pub fn with_terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self
    {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Configuration this logger was built with
    #[must_use]
    pub const fn config(&self) -> &Config
    {
        &self.config
    }

    /// Whether a call at `level` would produce a line
    ///
    /// Always `true` for FATAL and PANIC.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool
    {
        level.is_terminal() || self.config.threshold >= level.rank()
    }

    /// Render the line for `message` at `level` without writing it
    ///
    /// Returns an empty string when `level` is suppressed. `caller` is only
    /// used when caller location is enabled.
    #[must_use]
    pub fn format(&self, level: Level, message: &str, caller: Option<CallSite>) -> String
    {
        self.render(level, message, caller).unwrap_or_default()
    }

    /// Gate, format and write a line attributed to `caller`
    ///
    /// This is what every entry point delegates to. Call it directly from
    /// wrappers that capture their own call site.
    ///
    /// FATAL and PANIC do not return: after the line is written the
    /// configured terminator runs.
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    pub fn log_at(&self, level: Level, message: &str, caller: CallSite) -> Result<String>
    {
        if level.is_terminal() {
            self.terminate(level, message, caller);
        }
        let Some(line) = self.render(level, message, Some(caller)) else {
            return Ok(String::new());
        };
        self.sink.write_line(&line).map_err(LogError::Write)?;
        Ok(line)
    }

    /// Like [`Logger::log_at`], rendering `args` only if the level is enabled
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    pub fn log_args_at(&self, level: Level, args: fmt::Arguments<'_>, caller: CallSite) -> Result<String>
    {
        if !self.enabled(level) {
            return Ok(String::new());
        }
        match args.as_str() {
            Some(message) => self.log_at(level, message, caller),
            None => self.log_at(level, &args.to_string(), caller),
        }
    }

    /// Flush the sink
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Flush`] if the sink fails to flush.
    pub fn flush(&self) -> Result<()>
    {
        self.sink.flush().map_err(LogError::Flush)
    }

    /// Log at DEBUG (rank 6)
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn debug(&self, message: &str) -> Result<String>
    {
        self.log_at(Level::Debug, message, CallSite::caller())
    }

    /// Log pre-built format arguments at DEBUG (see [`debugf!`](crate::debugf))
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<String>
    {
        self.log_args_at(Level::Debug, args, CallSite::caller())
    }

    /// Log at TRACE (rank 5)
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn trace(&self, message: &str) -> Result<String>
    {
        self.log_at(Level::Trace, message, CallSite::caller())
    }

    /// Log pre-built format arguments at TRACE (see [`tracef!`](crate::tracef))
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) -> Result<String>
    {
        self.log_args_at(Level::Trace, args, CallSite::caller())
    }

    /// Log at INFO (rank 4)
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn info(&self, message: &str) -> Result<String>
    {
        self.log_at(Level::Info, message, CallSite::caller())
    }

    /// Log pre-built format arguments at INFO (see [`infof!`](crate::infof))
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<String>
    {
        self.log_args_at(Level::Info, args, CallSite::caller())
    }

    /// Log at WARN (rank 3)
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn warn(&self, message: &str) -> Result<String>
    {
        self.log_at(Level::Warn, message, CallSite::caller())
    }

    /// Log pre-built format arguments at WARN (see [`warnf!`](crate::warnf))
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<String>
    {
        self.log_args_at(Level::Warn, args, CallSite::caller())
    }

    /// Log at ERROR (rank 2)
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn error(&self, message: &str) -> Result<String>
    {
        self.log_at(Level::Error, message, CallSite::caller())
    }

    /// Log pre-built format arguments at ERROR (see [`errorf!`](crate::errorf))
    ///
    /// ## Errors
    ///
    /// Returns [`LogError::Write`] if the sink fails to write the line.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<String>
    {
        self.log_args_at(Level::Error, args, CallSite::caller())
    }

    /// Log at FATAL, then exit the process with status 1
    ///
    /// The line is emitted regardless of the threshold, written and flushed
    /// before the exit. Exiting affects every thread in the process.
    #[track_caller]
    pub fn fatal(&self, message: &str) -> !
    {
        self.terminate(Level::Fatal, message, CallSite::caller())
    }

    /// Formatted variant of [`Logger::fatal`] (see [`fatalf!`](crate::fatalf))
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> !
    {
        self.terminate(Level::Fatal, &args.to_string(), CallSite::caller())
    }

    /// Log at PANIC, then unwind or exit according to [`Config::panic_mode`]
    ///
    /// The line is emitted regardless of the threshold, written and flushed
    /// first. In [`PanicMode::Unwind`] the panic payload is the rendered line
    /// as a `String`; in [`PanicMode::Exit`] the process exits with status 2.
    #[track_caller]
    pub fn panic(&self, message: &str) -> !
    {
        self.terminate(Level::Panic, message, CallSite::caller())
    }

    /// Formatted variant of [`Logger::panic`] (see [`panicf!`](crate::panicf))
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> !
    {
        self.terminate(Level::Panic, &args.to_string(), CallSite::caller())
    }

    fn render(&self, level: Level, message: &str, caller: Option<CallSite>) -> Option<String>
    {
        self.enabled(level).then(|| self.compose(level, message, caller))
    }

    fn compose(&self, level: Level, message: &str, caller: Option<CallSite>) -> String
    {
        let timestamp = format_timestamp(self.clock.now(), self.config.use_date, self.config.use_utc);
        let tag = caller
            .filter(|_| self.config.use_caller_location)
            .and_then(|site| site.tag());

        let mut line = String::with_capacity(timestamp.len() + 24 + message.len());
        line.push_str(&timestamp);
        line.push(' ');
        if self.config.use_color {
            line.push_str(&level.color().paint(level.label()));
        } else {
            line.push_str(level.label());
        }
        if let Some(tag) = tag {
            line.push(' ');
            line.push_str(&tag);
        }
        line.push(' ');
        line.push_str(message);
        line
    }

    fn terminate(&self, level: Level, message: &str, caller: CallSite) -> !
    {
        let line = self.compose(level, message, Some(caller));
        if let Err(error) = self.sink.write_line(&line).and_then(|()| self.sink.flush()) {
            tracing::error!(%error, %level, "failed to write terminal log line");
        }

        match (level, self.config.panic_mode) {
            (Level::Panic, PanicMode::Unwind) => {
                tracing::debug!(%caller, "unwinding after PANIC");
                self.terminator.unwind(line)
            }
            (Level::Panic, PanicMode::Exit) => {
                tracing::debug!(%caller, code = PANIC_EXIT_CODE, "exiting after PANIC");
                self.terminator.exit(PANIC_EXIT_CODE)
            }
            _ => {
                tracing::debug!(%caller, code = FATAL_EXIT_CODE, "exiting after {level}");
                self.terminator.exit(FATAL_EXIT_CODE)
            }
        }
    }
}
