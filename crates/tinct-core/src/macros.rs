//! Formatting macros for the `*f` entry points.
//!
//! Each macro builds `format_args!` from its template and arguments and
//! passes them to the matching [`Logger`](crate::Logger) method. The template
//! is checked at compile time, so a missing argument is a build error rather
//! than a garbled line. Arguments render with their `Display` implementation
//! (`{}`), or `Debug` with `{:?}`.
//!
//! The call site reported in `[file:line]` is the macro invocation.
//!
//! ```rust
//! use tinct_core::{infof, Logger};
//!
//! let logger = Logger::new(4, false, false, true, false);
//! let line = infof!(logger, "count={}", 3)?;
//! assert!(line.ends_with("INFO count=3"));
//! # Ok::<(), tinct_core::LogError>(())
//! ```

/// Log a formatted message at DEBUG
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at TRACE
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at INFO
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at WARN
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at ERROR
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at FATAL and exit
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at PANIC and unwind or exit
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(::core::format_args!($($arg)+))
    };
}
