#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::{KeyValueStore, StoreError};

/// File-backed store: one file per key inside a private directory.
///
/// Values are small (a token and one JSON record), so plain
/// write-whole-file semantics are enough. Credential files are created
/// with owner-only permissions on unix.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store rooted at `dir`.
    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir).map_err(|source| StoreError::Directory {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Default location: `<user config dir>/cctodo`, falling back to a
    /// dotdir next to the binary when no home directory is resolvable.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("cctodo"))
            .unwrap_or_else(|| PathBuf::from(".cctodo"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    #[cfg(unix)]
    fn restrict_permissions(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_path: &Path) {}
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StoreError::Write {
            key: key.to_owned(),
            source,
        })?;
        Self::restrict_permissions(&path);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }

    fn clear(&mut self) {
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                if entry.file_type().is_ok_and(|ft| ft.is_file()) {
                    let _ = fs::remove_file(entry.path());
                }
            }
        }
    }
}
