//! Startup file presence guard
//!
//! Runs before any network resource is opened: if the target page is not in
//! the serving root, the launcher aborts instead of starting a server and a
//! browser pointed at a 404.

use crate::config::Config;
use crate::error::{LocalPageError, Result};
use std::fs;
use std::io::ErrorKind;

/// Verify the target page exists directly under the serving root.
///
/// No side effects on success. A directory with the target's name does not
/// count as the target page. I/O failures other than absence (permission
/// denied, a file where a directory was expected) are reported as such
/// rather than as a missing target.
pub fn ensure_target_exists(config: &Config) -> Result<()> {
    let path = config.target_path();
    let missing = || LocalPageError::TargetMissing {
        file: config.target_file.clone(),
        dir: config.serve_dir.clone(),
    };

    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(missing()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(missing()),
        Err(e) => Err(LocalPageError::Io(e)),
    }
}
