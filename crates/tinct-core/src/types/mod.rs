//! # Types
//!
//! Value types shared by the logger: severity levels, their label colors,
//! and the call site a line is attributed to.

pub mod call_site;
pub mod color;
pub mod level;

// Re-export all public types
pub use call_site::CallSite;
pub use color::Color;
pub use level::Level;
