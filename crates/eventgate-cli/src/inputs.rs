//! Event file discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors locating event files.
#[derive(Error, Debug)]
pub enum InputError {
    /// The events directory does not exist.
    #[error("{}/ folder not found.", .0.display())]
    MissingDir(PathBuf),
    /// The events directory could not be listed.
    #[error("failed to list {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}

/// Lists the `*.json` files directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingDir(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| InputError::Io(dir.to_path_buf(), e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| InputError::Io(dir.to_path_buf(), e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(dir = %dir.display(), count = paths.len(), "discovered event files");
    Ok(paths)
}
