//! The persisted, append-only move log shared by both clients.
//!
//! A store is keyed by `GameId` and holds one document per game. An absent
//! document reads as an empty log; only `append_entry` distinguishes the two,
//! by refusing to append to a document that was never created.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chess_errors::StoreError;
use crate::notation::log_entry::LogEntry;
use crate::session::game_id::GameId;

pub type StoreResult<T> = Result<T, StoreError>;

pub trait GameStore {
    fn exists(&self, id: &GameId) -> StoreResult<bool>;

    /// Creates an empty document. Returns `false` when one already existed.
    fn create_if_absent(&self, id: &GameId) -> StoreResult<bool>;

    /// Appends one entry. Returns `false` when the document does not exist.
    fn append_entry(&self, id: &GameId, entry: &LogEntry) -> StoreResult<bool>;

    fn all_entries(&self, id: &GameId) -> StoreResult<Vec<LogEntry>>;

    fn last_entry(&self, id: &GameId) -> StoreResult<Option<LogEntry>>;

    fn entry_count(&self, id: &GameId) -> StoreResult<usize>;
}

/// One game's persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDocument {
    pub entries: Vec<LogEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GameDocument {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push(&mut self, entry: LogEntry, now: DateTime<Utc>) {
        self.entries.push(entry);
        self.updated_at = now;
    }
}

/// Process-local store. Clones share the same documents, so two sessions
/// built from clones of one store see each other's appends.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStore {
    documents: Arc<Mutex<HashMap<GameId, GameDocument>>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<GameId, GameDocument>>> {
        self.documents.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl GameStore for InMemoryGameStore {
    fn exists(&self, id: &GameId) -> StoreResult<bool> {
        Ok(self.lock()?.contains_key(id))
    }

    fn create_if_absent(&self, id: &GameId) -> StoreResult<bool> {
        let mut documents = self.lock()?;
        if documents.contains_key(id) {
            return Ok(false);
        }
        documents.insert(id.clone(), GameDocument::new(Utc::now()));
        Ok(true)
    }

    fn append_entry(&self, id: &GameId, entry: &LogEntry) -> StoreResult<bool> {
        let mut documents = self.lock()?;
        match documents.get_mut(id) {
            Some(document) => {
                document.push(entry.clone(), Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn all_entries(&self, id: &GameId) -> StoreResult<Vec<LogEntry>> {
        Ok(self
            .lock()?
            .get(id)
            .map(|document| document.entries.clone())
            .unwrap_or_default())
    }

    fn last_entry(&self, id: &GameId) -> StoreResult<Option<LogEntry>> {
        Ok(self
            .lock()?
            .get(id)
            .and_then(|document| document.entries.last().cloned()))
    }

    fn entry_count(&self, id: &GameId) -> StoreResult<usize> {
        Ok(self
            .lock()?
            .get(id)
            .map_or(0, |document| document.entries.len()))
    }
}
