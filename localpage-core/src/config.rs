//! Serving configuration, fixed at process start
//!
//! There is no config file and no CLI surface: the defaults below are the
//! whole configuration. Components receive a `Config` by value or reference
//! rather than reading ambient globals.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the HTTP listener binds on
pub const DEFAULT_PORT: u16 = 8000;

/// Directory whose contents are exposed over HTTP
pub const DEFAULT_SERVE_DIR: &str = ".";

/// Page opened in the browser once the server is up
pub const DEFAULT_TARGET_FILE: &str = "Me.html";

/// Serving configuration for the localpage launcher.
///
/// Constructed once in `main` and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listener port
    pub port: u16,
    /// Serving root
    pub serve_dir: PathBuf,
    /// Target file name, relative to the serving root
    pub target_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            serve_dir: PathBuf::from(DEFAULT_SERVE_DIR),
            target_file: DEFAULT_TARGET_FILE.to_string(),
        }
    }
}

impl Config {
    /// Address the listener binds on, all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Path of the target file under the serving root.
    pub fn target_path(&self) -> PathBuf {
        self.serve_dir.join(&self.target_file)
    }

    /// URL the browser is pointed at.
    pub fn target_url(&self) -> String {
        format!("http://localhost:{}/{}", self.port, self.target_file)
    }
}
