//! Output directory management

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Create `path` and any missing parent directories.
///
/// Succeeds as a no-op when the directory already exists. Failure is returned
/// to the caller instead of terminating here; the entry point owns the
/// decision to exit the process.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::Directory(format!("{}: {e}", path.display())))?;
    debug!("Output directory ready at {}", path.display());
    Ok(())
}
