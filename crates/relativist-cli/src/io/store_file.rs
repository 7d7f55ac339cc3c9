// crates/relativist-cli/src/io/store_file.rs

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fs2::FileExt;
use relativist_core::store::KvStore;
use relativist_core::RelativistError;
use tempfile::NamedTempFile;

/// Key-value store persisted as one JSON object `{ "key": "value", ... }`.
///
/// `open` takes an exclusive lock on `<store>.lock` before reading and the
/// lock is held until the store is dropped, so a whole load/draw/save runs
/// without another process touching the file. Every `set` rewrites the file
/// through a fresh temp file in the same directory and an atomic rename.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    _lock: File,
}

impl FileStore {
    /// Opens `path`, blocking until no other `FileStore` holds it.
    /// A missing or blank file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let lock_path = lock_path(&path);
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("open lock {}", lock_path.display()))?;
        lock.lock_exclusive()
            .with_context(|| format!("lock {}", lock_path.display()))?;

        let entries = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read store {}", path.display()))?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)
                    .with_context(|| format!("parse store {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> relativist_core::Result<()> {
        let text = serde_json::to_string_pretty(&self.entries)?;

        let dir = match self.path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| RelativistError::Store(format!("temp file in {}: {e}", dir.display())))?;
        tmp.write_all(text.as_bytes())
            .map_err(|e| RelativistError::Store(format!("write {}: {e}", tmp.path().display())))?;
        tmp.persist(&self.path)
            .map_err(|e| RelativistError::Store(format!("replace {}: {e}", self.path.display())))?;
        Ok(())
    }
}

/// `<store>.lock` beside the store file; the store itself is replaced on
/// every write so it cannot carry the lock.
fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// On a failed write the in-memory entry is rolled back.
    fn set(&mut self, key: &str, value: String) -> relativist_core::Result<()> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
