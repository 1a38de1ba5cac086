//! Entry store: durable entry collection plus the single draft slot.
//!
//! The store is the only writer of journal state. Every mutation is applied
//! in memory and then persisted synchronously. A failed write leaves the
//! store dirty so `flush()` (called from lifecycle hooks) can retry; the
//! in-memory collection stays authoritative for the session either way.
//!
//! An unreadable collection file never stops the app: a malformed file is
//! copied to the backup path and the store starts empty. When the file could
//! not be read at all, or the backup copy failed, the store still starts
//! empty but refuses to write the collection until a later `load()` succeeds,
//! so the original file is never replaced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorePaths;
use crate::models::SymptomEntry;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot write {0}: no parent directory")]
    NoParent(PathBuf),

    #[error("Refusing to overwrite {0}: it was never loaded or backed up")]
    WriteBlocked(PathBuf),
}

/// What `load()` found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No collection file yet.
    Missing,
    /// Collection read successfully.
    Loaded(usize),
    /// File was malformed; the store was reset to empty. `backup` is the
    /// quarantine copy, `None` when the copy itself failed (writes are then
    /// blocked).
    Recovered { backup: Option<PathBuf> },
    /// File exists but could not be read. The store is empty and writes are
    /// blocked until a later `load()` succeeds.
    Unavailable { error: String },
}

pub struct EntryStore {
    paths: StorePaths,
    entries: Vec<SymptomEntry>,
    draft: Option<SymptomEntry>,
    dirty: bool,
    draft_dirty: bool,
    write_blocked: bool,
}

impl EntryStore {
    /// Empty store bound to `paths`. Nothing is read until `load()`.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            paths,
            entries: Vec::new(),
            draft: None,
            dirty: false,
            draft_dirty: false,
            write_blocked: false,
        }
    }

    /// Construct and load both the collection and the draft slot.
    pub fn open(paths: StorePaths) -> (Self, LoadOutcome) {
        let mut store = Self::new(paths);
        let outcome = store.load();
        store.load_draft();
        (store, outcome)
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Entries in store order (insertion order, updates in place).
    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&SymptomEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unsaved changes exist (a previous write failed).
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.draft_dirty
    }

    /// The collection file on disk must not be replaced (see `LoadOutcome`).
    pub fn is_write_blocked(&self) -> bool {
        self.write_blocked
    }

    // ── Collection ──────────────────────────────────────────

    /// Append an entry and persist. Content is never validated.
    pub fn add(&mut self, entry: SymptomEntry) -> Result<(), StoreError> {
        self.entries.push(entry);
        self.dirty = true;
        self.persist()
    }

    /// Replace the entry with the same id in place and persist.
    /// An unknown id is a silent no-op.
    pub fn update(&mut self, entry: SymptomEntry) -> Result<(), StoreError> {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == entry.id) else {
            tracing::debug!(id = %entry.id, "Update for unknown entry ignored");
            return Ok(());
        };
        *slot = entry;
        self.dirty = true;
        self.persist()
    }

    /// Remove every entry with `id` and persist. An unknown id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = before - self.entries.len();
        if removed == 0 {
            tracing::debug!(id = %id, "Delete for unknown entry ignored");
            return Ok(());
        }
        tracing::debug!(id = %id, removed, "Deleted entry");
        self.dirty = true;
        self.persist()
    }

    /// Write the full collection, replacing any previous file.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        if self.write_blocked {
            self.dirty = true;
            tracing::warn!(
                path = %self.paths.entries.display(),
                "Journal file was not loaded, keeping changes in memory only"
            );
            return Err(StoreError::WriteBlocked(self.paths.entries.clone()));
        }
        match write_json_atomic(&self.paths.entries, &self.entries) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                tracing::warn!(
                    path = %self.paths.entries.display(),
                    error = %e,
                    "Failed to persist journal entries"
                );
                Err(e)
            }
        }
    }

    /// Lifecycle hook entry point: writes whatever is dirty, otherwise does nothing.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if self.dirty {
            self.persist()?;
        }
        if self.draft_dirty {
            self.write_draft()?;
        }
        Ok(())
    }

    /// Read the collection from disk, replacing what is in memory.
    pub fn load(&mut self) -> LoadOutcome {
        self.dirty = false;
        self.write_blocked = false;
        let path = self.paths.entries.clone();

        match read_json::<Vec<SymptomEntry>>(&path) {
            Ok(Some(entries)) => {
                tracing::info!(count = entries.len(), "Loaded journal entries");
                self.entries = entries;
                LoadOutcome::Loaded(self.entries.len())
            }
            Ok(None) => {
                self.entries.clear();
                LoadOutcome::Missing
            }
            Err(StoreError::Json(e)) => {
                self.entries.clear();
                let backup = self.quarantine();
                self.write_blocked = backup.is_none();
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    backup = ?backup,
                    "Journal file malformed, starting empty"
                );
                LoadOutcome::Recovered { backup }
            }
            Err(e) => {
                self.entries.clear();
                self.write_blocked = true;
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Journal file could not be read, starting empty without writing"
                );
                LoadOutcome::Unavailable { error: e.to_string() }
            }
        }
    }

    fn quarantine(&self) -> Option<PathBuf> {
        match std::fs::copy(&self.paths.entries, &self.paths.backup) {
            Ok(_) => Some(self.paths.backup.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to back up unreadable journal file");
                None
            }
        }
    }

    // ── Draft slot ──────────────────────────────────────────

    /// The draft currently held in memory.
    pub fn draft(&self) -> Option<&SymptomEntry> {
        self.draft.as_ref()
    }

    /// Overwrite the draft slot and persist it.
    pub fn save_draft(&mut self, entry: SymptomEntry) -> Result<(), StoreError> {
        self.draft = Some(entry);
        self.draft_dirty = true;
        self.write_draft()
    }

    /// Read the draft from disk into the slot. A malformed draft reads as none.
    pub fn load_draft(&mut self) -> Option<SymptomEntry> {
        self.draft_dirty = false;
        self.draft = match read_json::<SymptomEntry>(&self.paths.draft) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "Draft unreadable, discarding");
                None
            }
        };
        self.draft.clone()
    }

    /// Empty the slot and remove the draft file.
    pub fn clear_draft(&mut self) -> Result<(), StoreError> {
        self.draft = None;
        self.draft_dirty = false;
        match std::fs::remove_file(&self.paths.draft) {
            Ok(()) => {
                tracing::debug!("Draft cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Move the draft into the collection (update when its id already
    /// exists, add otherwise) and clear the slot. Returns the committed id.
    pub fn commit_draft(&mut self) -> Result<Option<Uuid>, StoreError> {
        let Some(draft) = self.draft.take() else {
            return Ok(None);
        };
        let id = draft.id;
        if self.get(id).is_some() {
            self.update(draft)?;
        } else {
            self.add(draft)?;
        }
        self.clear_draft()?;
        Ok(Some(id))
    }

    fn write_draft(&mut self) -> Result<(), StoreError> {
        let result = match &self.draft {
            Some(draft) => write_json_atomic(&self.paths.draft, draft),
            None => Ok(()),
        };
        match result {
            Ok(()) => {
                self.draft_dirty = false;
                tracing::debug!("Draft saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist draft");
                Err(e)
            }
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Serialize to a sibling temp file, then rename over `path`.
fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .ok_or_else(|| StoreError::NoParent(path.to_path_buf()))?;
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
