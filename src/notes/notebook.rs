//! Saved notes: an ordered collection persisted as one JSON array.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::utils::error::{DictationError, DictationResult};

/// Store key the notes live under unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "mathNotes";

const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNote {
    /// Creation time in milliseconds since the epoch; unique per notebook
    pub id: u64,
    pub title: String,
    pub content: String,
    /// ISO-8601 creation time
    pub timestamp: String,
}

impl SavedNote {
    /// First 100 characters of the content followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Notes kept in the order they were saved.
///
/// Records are held as stored, so two records sharing an id both survive a
/// round trip. Every mutation re-reads the store, applies the change and writes the
/// whole collection back. Stored text that does not decode is reported as
/// [`DictationError::CorruptStore`] and is never overwritten.
#[derive(Debug)]
pub struct NoteBook<S: KeyValueStore> {
    store: S,
    namespace: String,
    notes: Vec<SavedNote>,
}

impl<S: KeyValueStore> NoteBook<S> {
    /// Open the notebook stored under `namespace`.
    pub fn open(store: S, namespace: impl Into<String>) -> DictationResult<Self> {
        let mut book = Self {
            store,
            namespace: namespace.into(),
            notes: Vec::new(),
        };
        book.load()?;
        Ok(book)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the collection from the store.
    pub fn load(&mut self) -> DictationResult<&[SavedNote]> {
        let Some(text) = self.store.get(&self.namespace)? else {
            self.notes.clear();
            return Ok(&self.notes);
        };

        self.notes = serde_json::from_str(&text).map_err(|err| {
            tracing::warn!(namespace = %self.namespace, %err, "saved notes are corrupt");
            DictationError::corrupt(&self.namespace, err.to_string())
        })?;
        Ok(&self.notes)
    }

    /// Save a note stamped with the current time.
    pub fn save(&mut self, title: &str, content: &str) -> DictationResult<SavedNote> {
        self.save_at(title, content, Utc::now())
    }

    /// Save a note stamped with `now`. Ids stay strictly increasing even when
    /// two saves land in the same millisecond. Surrounding whitespace of the
    /// content is not kept.
    pub fn save_at(
        &mut self,
        title: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> DictationResult<SavedNote> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DictationError::invalid("Nothing to save!"));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(DictationError::invalid("A note needs a title"));
        }

        self.load()?;

        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = match self.notes.iter().map(|note| note.id).max() {
            Some(last) if last >= millis => last + 1,
            _ => millis,
        };
        let note = SavedNote {
            id,
            title: title.to_string(),
            content: content.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.notes.push(note.clone());
        self.write()?;
        tracing::debug!(id, title, "note saved");
        Ok(note)
    }

    /// Remove the notes with `id`. Returns whether anything was removed; every
    /// other record is written back in its original order.
    pub fn delete(&mut self, id: u64) -> DictationResult<bool> {
        self.load()?;
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.write()?;
        tracing::debug!(id, "note deleted");
        Ok(true)
    }

    pub fn get(&self, id: u64) -> Option<&SavedNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Notes in the order they were saved.
    pub fn notes(&self) -> impl Iterator<Item = &SavedNote> {
        self.notes.iter()
    }

    /// Notes newest first, the order a notes list shows them in.
    pub fn recent_first(&self) -> Vec<&SavedNote> {
        self.notes.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn write(&mut self) -> DictationResult<()> {
        let text = serde_json::to_string(&self.notes)?;
        self.store.set(&self.namespace, &text)
    }
}
