//! # tinct-core
//!
//! Leveled, colorized console logging for embedding in other programs.
//!
//! A [`Logger`] holds a severity threshold and four formatting toggles
//! (date, color, caller location, UTC). Each call gates on the threshold,
//! renders one line and writes it to a [`Sink`]:
//!
//! ```text
//! 2024-03-05 07:08:09.123 INFO [main.rs:12] listening on :8080
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct_core::{infof, Logger};
//!
//! // threshold, date, caller location, UTC, color
//! let logger = Logger::new(4, true, true, true, false);
//!
//! logger.info("service started")?;
//! infof!(logger, "listening on port {}", 8080)?;
//!
//! // TRACE (rank 5) is above the INFO threshold and is dropped
//! assert_eq!(logger.trace("noisy")?, "");
//! # Ok::<(), tinct_core::LogError>(())
//! ```
//!
//! ## Collaborators
//!
//! The logger never reads the process environment. Everything it touches
//! outside its own configuration goes through a trait object:
//! - [`Sink`]: where lines are written (stdout by default)
//! - [`Clock`]: where "now" comes from (the system clock by default)
//! - [`Terminator`]: how FATAL and PANIC end the program
//!
//! Reading `LOG_LEVEL` and friends lives in `tinct-utils`.

pub mod clock;
pub mod config;
pub mod error;
pub mod logger;
pub mod sink;
pub mod terminate;
pub mod types;

mod macros;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, PanicMode};
pub use error::{LogError, ParseError, Result};
pub use logger::Logger;
pub use sink::{MemorySink, Sink, StderrSink, StdoutSink, WriterSink};
pub use terminate::{ProcessTerminator, Terminator};
pub use types::{CallSite, Color, Level};
