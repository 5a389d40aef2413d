//! # Call Sites
//!
//! Source location a log line is attributed to.
//!
//! Every public entry point on [`Logger`](crate::Logger) is `#[track_caller]`
//! and captures a [`CallSite`] immediately, then passes it down explicitly.
//! Internal helpers never look at the stack themselves, so adding or removing
//! a layer between the entry point and the formatter cannot shift the
//! reported location.
//!
//! Wrappers that want to attribute lines to *their* caller can either be
//! `#[track_caller]` themselves or pass their own [`CallSite`] to
//! [`Logger::log_at`](crate::Logger::log_at).

use std::ffi::OsStr;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// File and line of the code that issued a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite
{
    file: &'static str,
    line: u32,
}

impl CallSite
{
    /// Build a call site from a file path and line number
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self
    {
        Self { file, line }
    }

    /// Capture the location of the caller of the current `#[track_caller]` function
    ///
    /// Called from a function without `#[track_caller]`, this is simply the
    /// location of the `CallSite::caller()` expression itself.
    ///
    /// ```rust
    /// use tinct_core::CallSite;
    ///
    /// let site = CallSite::caller();
    /// assert_eq!(site.line(), line!() - 1);
    /// ```
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self
    {
        Self::from(Location::caller())
    }

    /// Full source path as recorded by the compiler
    #[must_use]
    pub const fn file(&self) -> &'static str
    {
        self.file
    }

    /// Line number
    #[must_use]
    pub const fn line(&self) -> u32
    {
        self.line
    }

    /// Final path component of [`CallSite::file`]
    ///
    /// Returns `None` when the path has no usable file name, in which case
    /// the caller tag is left out of the line.
    #[must_use]
    pub fn basename(&self) -> Option<&'static str>
    {
        Path::new(self.file)
            .file_name()
            .and_then(OsStr::to_str)
            .filter(|name| !name.is_empty())
    }

    /// `[<basename>:<line>]`, or `None` if the file name is unavailable
    #[must_use]
    pub fn tag(&self) -> Option<String>
    {
        self.basename().map(|name| format!("[{name}:{}]", self.line))
    }
}

impl From<&'static Location<'static>> for CallSite
{
    fn from(location: &'static Location<'static>) -> Self
    {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_tag_uses_basename()
    {
        let site = CallSite::new("crates/app/src/server/listener.rs", 42);
        assert_eq!(site.basename(), Some("listener.rs"));
        assert_eq!(site.tag().as_deref(), Some("[listener.rs:42]"));
    }

    #[test]
    fn test_bare_file_name()
    {
        let site = CallSite::new("main.rs", 7);
        assert_eq!(site.tag().as_deref(), Some("[main.rs:7]"));
    }

    #[test]
    fn test_missing_file_degrades_to_none()
    {
        assert_eq!(CallSite::new("", 1).tag(), None);
        assert_eq!(CallSite::new("src/..", 1).tag(), None);
    }

    #[track_caller]
    fn tracked() -> CallSite
    {
        CallSite::caller()
    }

    #[test]
    fn test_caller_skips_tracked_frames()
    {
        let expected = line!() + 1;
        let site = tracked();
        assert_eq!(site.line(), expected);
        assert_eq!(site.basename(), Some("call_site.rs"));
    }
}
