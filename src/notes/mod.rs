//! Saved notes
//!
//! Notes are kept as one JSON array under a namespace key in a
//! [`KeyValueStore`]. The file-backed store is available on native targets.

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod notebook;
pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub use config::NotesConfig;
pub use notebook::{NoteBook, SavedNote, DEFAULT_NAMESPACE};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
impl NoteBook<FileStore> {
    /// Open the file-backed notebook described by `config`.
    pub fn open_configured(config: &NotesConfig) -> crate::utils::error::DictationResult<Self> {
        NoteBook::open(FileStore::new(&config.directory), &config.namespace)
    }
}
