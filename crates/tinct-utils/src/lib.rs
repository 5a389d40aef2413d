//! # Tinct Utilities
//!
//! The application-side glue around `tinct-core`.
//!
//! `tinct-core` deliberately never reads process-wide state. This crate is
//! where an embedding application turns its environment into a
//! [`Config`](tinct_core::Config), and where the library's own diagnostics
//! (sink failures, termination) get routed through `tracing`.

pub mod diagnostics;
pub mod env;

// Re-export commonly used functions for convenience
pub use diagnostics::{init_diagnostics, init_diagnostics_from_env, parse_diagnostic_level, DiagnosticsError};
pub use env::{config_from_env, config_from_lookup, logger_from_env, parse_threshold, ConfigError};
