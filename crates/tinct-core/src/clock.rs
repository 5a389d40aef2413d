//! # Clock
//!
//! Time source and timestamp rendering.
//!
//! The logger asks its [`Clock`] for the current instant once per emitted
//! line and renders it with [`format_timestamp`]. Swapping in a
//! [`FixedClock`] makes output fully reproducible in tests.

use chrono::{DateTime, Local, Utc};

/// `YYYY-MM-DD HH:MM:SS.mmm`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `HH:MM:SS.mmm`
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Source of the current time
pub trait Clock: Send + Sync
{
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock
{
    fn now(&self) -> DateTime<Utc>
    {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock
{
    /// Freeze at `instant`
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self
    {
        Self(instant)
    }

    /// Freeze at `millis` milliseconds after the Unix epoch
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self>
    {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// The frozen instant
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc>
    {
        self.0
    }
}

impl Clock for FixedClock
{
    fn now(&self) -> DateTime<Utc>
    {
        self.0
    }
}

/// Render `instant` with millisecond precision
///
/// `use_date` selects [`DATE_TIME_FORMAT`] over [`TIME_FORMAT`]; `use_utc`
/// selects UTC over the host's local offset. Sub-millisecond digits are
/// truncated, never rounded.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>, use_date: bool, use_utc: bool) -> String
{
    let pattern = if use_date { DATE_TIME_FORMAT } else { TIME_FORMAT };
    if use_utc {
        instant.format(pattern).to_string()
    } else {
        instant.with_timezone(&Local).format(pattern).to_string()
    }
}
