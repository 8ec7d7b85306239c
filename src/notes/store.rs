//! Key-value storage backends for saved notes.

use fxhash::FxHashMap;

use crate::utils::error::DictationResult;

/// Text storage addressed by key. Values are whole documents; callers
/// read-modify-write them wholesale.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DictationResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DictationResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DictationResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DictationResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::{ErrorKind, Write};
    use std::path::{Path, PathBuf};

    use tempfile::NamedTempFile;

    use super::KeyValueStore;
    use crate::utils::error::DictationResult;

    /// One `<key>.json` file per key inside `directory`. Writes go through a
    /// temporary file that is renamed into place.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        directory: PathBuf,
    }

    impl FileStore {
        pub fn new(directory: impl Into<PathBuf>) -> Self {
            Self {
                directory: directory.into(),
            }
        }

        pub fn directory(&self) -> &Path {
            &self.directory
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            self.directory.join(format!("{}.json", key))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> DictationResult<Option<String>> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(text) => Ok(Some(text)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> DictationResult<()> {
            fs::create_dir_all(&self.directory)?;
            let mut temp_file = NamedTempFile::new_in(&self.directory)?;
            temp_file.write_all(value.as_bytes())?;
            temp_file.persist(self.path_for(key)).map_err(|e| e.error)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("mathNotes").unwrap(), None);
        store.set("mathNotes", "[]").unwrap();
        assert_eq!(store.get("mathNotes").unwrap().as_deref(), Some("[]"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("mathNotes").unwrap(), None);

        store.set("mathNotes", "[1]").unwrap();
        store.set("mathNotes", "[1,2]").unwrap();
        assert_eq!(store.get("mathNotes").unwrap().as_deref(), Some("[1,2]"));
        assert!(store.path_for("mathNotes").ends_with("nested/mathNotes.json"));
    }
}
