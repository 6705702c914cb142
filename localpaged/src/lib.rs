//! localpage daemon library
//!
//! The moving parts of the launcher: the static file service, the browser
//! launcher, and the shutdown signal future. `main` wires them together.

pub mod browser;
pub mod server;
pub mod shutdown;
