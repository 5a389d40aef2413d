//! ANSI foreground colors used for level labels.

use std::fmt;

/// Escape sequence that resets all SGR attributes
pub const RESET: &str = "\x1b[0m";

/// Foreground color of a level label
///
/// Each variant maps to one SGR code. Only the seven colors used by the
/// level table exist; this is not a general-purpose terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color
{
    /// `35`, used for PANIC
    DarkMagenta,
    /// `95`, used for FATAL
    Magenta,
    /// `91`, used for ERROR
    Red,
    /// `93`, used for WARN
    Yellow,
    /// `94`, used for INFO
    Blue,
    /// `96`, used for TRACE
    Cyan,
    /// `90`, used for DEBUG
    Gray,
}

impl Color
{
    /// SGR parameter for this color
    #[must_use]
    pub const fn code(self) -> u8
    {
        match self {
            Color::DarkMagenta => 35,
            Color::Magenta => 95,
            Color::Red => 91,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::Cyan => 96,
            Color::Gray => 90,
        }
    }

    /// Wrap `text` as `ESC[<code>m<text>ESC[0m`
    ///
    /// ```rust
    /// use tinct_core::Color;
    ///
    /// assert_eq!(Color::Red.paint("ERROR"), "\x1b[91mERROR\x1b[0m");
    /// ```
    #[must_use]
    pub fn paint(self, text: &str) -> String
    {
        format!("{self}{text}{RESET}")
    }
}

/// Renders the opening escape sequence only.
impl fmt::Display for Color
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "\x1b[{}m", self.code())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_paint_wraps_with_reset()
    {
        assert_eq!(Color::Blue.paint("INFO"), "\x1b[94mINFO\x1b[0m");
        assert_eq!(Color::DarkMagenta.paint("PANIC"), "\x1b[35mPANIC\x1b[0m");
    }

    #[test]
    fn test_paint_empty_text()
    {
        assert_eq!(Color::Gray.paint(""), "\x1b[90m\x1b[0m");
    }

    #[test]
    fn test_display_is_opening_sequence()
    {
        assert_eq!(Color::Yellow.to_string(), "\x1b[93m");
    }
}
