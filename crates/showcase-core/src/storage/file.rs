//! Filesystem-backed key-value store
//!
//! Each key is persisted as its own file under the data directory:
//!
//! ```text
//! <data_dir>/
//! ├── db_users.json
//! ├── db_artworks.json
//! └── active_session.json
//! ```
//!
//! Writes are atomic (write to temp file, fsync, then rename) so a crash
//! never leaves a collection half-written.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::error::{Access, StorageError, StorageResult};
use super::kv::KeyValue;

/// Durable key-value store rooted at a directory
#[derive(Clone, Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store in `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Total size in bytes of the given keys that exist on disk
    pub fn size_of(&self, keys: &[&str]) -> u64 {
        keys.iter()
            .filter_map(|key| fs::metadata(self.path_for(key)).ok())
            .map(|meta| meta.len())
            .sum()
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(Access::Read, path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        atomic_write(&self.path_for(key), value.as_bytes())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(Access::Write, path, e)),
        }
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::DataDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let staging_failed = |e: io::Error| StorageError::io(Access::Write, temp_path.clone(), e);
    let mut file = File::create(&temp_path).map_err(staging_failed)?;
    file.write_all(data).map_err(staging_failed)?;
    file.sync_all().map_err(staging_failed)?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::Replace {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
