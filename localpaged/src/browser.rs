//! Browser launching
//!
//! Fire-and-forget: opening the page is best effort, and the server keeps
//! running even when no browser is available.

use tracing::warn;

/// Ask the OS to open `url` in the default browser.
pub fn launch(url: &str) {
    if let Err(e) = open::that(url) {
        warn!("Failed to open browser: {}. Open {} manually.", e, url);
    }
}
