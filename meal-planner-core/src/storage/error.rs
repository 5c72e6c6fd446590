use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing stored records.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
    /// A record could not be encoded or decoded.
    Json(String, serde_json::Error),
    /// The backend refused the operation.
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StorageError::Json(key, e) => {
                write!(f, "Invalid JSON record '{}': {}", key, e)
            }
            StorageError::Unavailable(reason) => write!(f, "Storage unavailable: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(_, e) => Some(e),
            StorageError::Json(_, e) => Some(e),
            StorageError::Unavailable(_) => None,
        }
    }
}
