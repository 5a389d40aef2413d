//! # Termination
//!
//! How FATAL and PANIC end the program once their line has been written.
//!
//! These effects are process-wide. A FATAL call on any thread exits the whole
//! process, and other threads get no chance to finish their own logging.
//! A PANIC in [`PanicMode::Unwind`](crate::PanicMode::Unwind) unwinds only the
//! calling thread, unless the host builds with `panic = "abort"`.

use std::{panic, process};

/// Exit status used after a FATAL line
pub const FATAL_EXIT_CODE: i32 = 1;

/// Exit status used after a PANIC line in [`PanicMode::Exit`](crate::PanicMode::Exit)
///
/// Matches the status of an uncaught panic in many runtimes.
pub const PANIC_EXIT_CODE: i32 = 2;

/// Ends the program after a terminal log line
///
/// Both methods must diverge. Test doubles usually unwind with a marker
/// payload so the test can catch it.
pub trait Terminator: Send + Sync
{
    /// Terminate the process with `code`
    fn exit(&self, code: i32) -> !;

    /// Raise an unrecoverable error carrying `payload`
    fn unwind(&self, payload: String) -> !;
}

/// Uses `std::process::exit` and `std::panic::panic_any`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator
{
    fn exit(&self, code: i32) -> !
    {
        process::exit(code)
    }

    fn unwind(&self, payload: String) -> !
    {
        panic::panic_any(payload)
    }
}
