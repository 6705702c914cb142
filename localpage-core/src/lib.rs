//! localpage Core Library
//!
//! Shared types for the localpage launcher: the serving configuration, the
//! error type, and the startup file presence guard. Used by the `localpaged`
//! binary.

pub mod config;
pub mod error;
pub mod guard;

// Re-export commonly used types
pub use config::Config;
pub use error::{LocalPageError, Result};
pub use guard::ensure_target_exists;
