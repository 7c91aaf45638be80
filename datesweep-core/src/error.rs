use std::path::PathBuf;
use thiserror::Error;

/// File-level failure kinds. Date tokens that fail to parse are not errors
/// anywhere in the pipeline; the rule that matched them does not fire.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = CleanError::FileNotFound {
            path: PathBuf::from("Dev/tasks/completed.md"),
        };
        assert_eq!(e.to_string(), "file not found: Dev/tasks/completed.md");
    }

    #[test]
    fn read_error_display() {
        let e = CleanError::Read {
            path: PathBuf::from("notes.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().starts_with("failed to read notes.md"));
    }

    #[test]
    fn write_error_display() {
        let e = CleanError::Write {
            path: PathBuf::from("notes.md"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(e.to_string().starts_with("failed to write notes.md"));
    }
}
