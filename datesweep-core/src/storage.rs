use crate::error::CleanError;
use std::fs;
use std::path::Path;

/// Read the target document fully into memory. A missing file is its own
/// failure kind so callers can report it gently.
pub fn read_markdown(path: &Path) -> Result<String, CleanError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CleanError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CleanError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Persist the transformed document. Callers only reach this after the
/// whole in-memory pass succeeded, so a failed run never half-writes.
pub fn write_markdown(path: &Path, content: &str) -> Result<(), CleanError> {
    fs::write(path, content).map_err(|source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    })
}
