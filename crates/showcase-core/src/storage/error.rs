//! Key-value substrate errors
//!
//! Every failure names the key file (or the data directory) it happened on.
//! The document store wraps these with `anyhow` context; the CLI downcasts
//! back to [`StorageError`] to print a hint.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Whether a failed filesystem call was reading or writing a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be created
    #[error("Cannot create gallery data directory '{path}': {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No permission to use '{path}'")]
    Denied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Out of space while saving a key file
    #[error("No space left to save '{path}'")]
    NoSpace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read key file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot save key file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The staged temp file could not replace the key file
    #[error("Cannot replace '{to}' with staged '{from}': {source}")]
    Replace {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A collection or the session slot holds something that is not valid JSON
    /// for its record type
    #[error("Stored data under '{key}' is corrupted: {details}")]
    Corrupt { key: String, details: String },

    #[error("Cannot encode records for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Classify a filesystem failure on a key file
    pub fn io(access: Access, path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            return StorageError::Denied { path, source };
        }
        if access == Access::Write && out_of_space(&source) {
            return StorageError::NoSpace { path, source };
        }
        match access {
            Access::Read => StorageError::Read { path, source },
            Access::Write => StorageError::Write { path, source },
        }
    }

    pub fn corrupt(key: &str, error: &serde_json::Error) -> Self {
        StorageError::Corrupt {
            key: key.to_string(),
            details: error.to_string(),
        }
    }

    /// Whether the user can fix this without touching the code
    pub fn is_recoverable(&self) -> bool {
        self.recovery_suggestion().is_some()
    }

    /// One-line hint the CLI prints before the error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::Corrupt { .. } => Some(
                "Run `showcase reset` to restore the demo data. The previous content is kept in a `.bak` backup.",
            ),
            StorageError::NoSpace { .. } => Some("Free some disk space, then retry."),
            StorageError::Denied { .. } | StorageError::DataDir { .. } => {
                Some("Point `data_dir` at a writable directory (`showcase config set data_dir <path>`).")
            }
            _ => None,
        }
    }
}

fn out_of_space(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    ["no space left", "disk full", "quota exceeded", "not enough space"]
        .iter()
        .any(|needle| msg.contains(needle))
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn key_file() -> PathBuf {
        PathBuf::from("/gallery/db_users.json")
    }

    #[test]
    fn test_denied_key_file_suggests_data_dir() {
        let err = StorageError::io(
            Access::Write,
            key_file(),
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );

        assert!(matches!(err, StorageError::Denied { .. }));
        assert!(err.recovery_suggestion().unwrap().contains("data_dir"));
    }

    #[test]
    fn test_access_picks_read_or_write() {
        let read = StorageError::io(Access::Read, key_file(), io::Error::other("boom"));
        assert!(matches!(read, StorageError::Read { .. }));

        let write = StorageError::io(Access::Write, key_file(), io::Error::other("boom"));
        assert!(matches!(write, StorageError::Write { .. }));
        assert!(!write.is_recoverable());
    }

    #[test]
    fn test_full_disk_only_on_write() {
        let full = || io::Error::other("No space left on device");

        let err = StorageError::io(Access::Write, key_file(), full());
        assert!(matches!(err, StorageError::NoSpace { .. }));
        assert!(err.is_recoverable());

        let err = StorageError::io(Access::Read, key_file(), full());
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_corrupt_collection_points_at_reset() {
        let parse_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err = StorageError::corrupt("db_artworks", &parse_err);

        assert!(err.to_string().contains("'db_artworks' is corrupted"));
        assert!(err.recovery_suggestion().unwrap().contains("showcase reset"));
    }
}
