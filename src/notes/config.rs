//! Where notes are stored.

use std::env;
use std::path::PathBuf;

use super::notebook::DEFAULT_NAMESPACE;

pub const NOTES_DIR_ENV: &str = "VOXTEX_NOTES_DIR";
pub const NOTES_NAMESPACE_ENV: &str = "VOXTEX_NOTES_NAMESPACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    pub directory: PathBuf,
    pub namespace: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl NotesConfig {
    /// Read `VOXTEX_NOTES_DIR` and `VOXTEX_NOTES_NAMESPACE`, falling back to
    /// the platform data directory and `mathNotes`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            directory: non_blank(NOTES_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_directory),
            namespace: non_blank(NOTES_NAMESPACE_ENV)
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        }
    }
}

fn default_directory() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxtex")
}
