//! Directory-backed store: one `<id>.json` document per game.
//!
//! Two console processes pointed at the same directory share a game. Appends
//! rewrite the whole document through a temporary file and a rename, and
//! creation links a finished temporary file into place, so a reader never
//! observes a half-written or empty document.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::chess_errors::StoreError;
use crate::notation::log_entry::LogEntry;
use crate::session::game_id::GameId;
use crate::session::game_store::{GameDocument, GameStore, StoreResult};

const DOCUMENT_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct JsonFileGameStore {
    root: PathBuf,
}

impl JsonFileGameStore {
    /// Opens (creating if needed) the document directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: &GameId, extension: &str) -> StoreResult<PathBuf> {
        let key = id.as_str();
        let usable = !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.');
        if !usable {
            return Err(StoreError::UnsupportedKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.{extension}")))
    }

    /// Per-process scratch path, so two processes never write the same one.
    fn temp_path(&self, id: &GameId) -> StoreResult<PathBuf> {
        self.document_path(id, &format!("{}.{TEMP_SUFFIX}", std::process::id()))
    }

    fn read_document(&self, id: &GameId) -> StoreResult<Option<GameDocument>> {
        let path = self.document_path(id, DOCUMENT_EXTENSION)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_document(&self, id: &GameId, document: &GameDocument) -> StoreResult<()> {
        let path = self.document_path(id, DOCUMENT_EXTENSION)?;
        let temp = self.temp_path(id)?;
        let text = serde_json::to_string_pretty(document)?;
        write_synced(&temp, text.as_bytes())?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl GameStore for JsonFileGameStore {
    fn exists(&self, id: &GameId) -> StoreResult<bool> {
        Ok(self.document_path(id, DOCUMENT_EXTENSION)?.is_file())
    }

    fn create_if_absent(&self, id: &GameId) -> StoreResult<bool> {
        let path = self.document_path(id, DOCUMENT_EXTENSION)?;
        if path.is_file() {
            return Ok(false);
        }
        let temp = self.temp_path(id)?;
        let text = serde_json::to_string_pretty(&GameDocument::new(Utc::now()))?;
        write_synced(&temp, text.as_bytes())?;
        // Linking fails instead of replacing when another writer got there first.
        let linked = fs::hard_link(&temp, &path);
        fs::remove_file(&temp)?;
        match linked {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn append_entry(&self, id: &GameId, entry: &LogEntry) -> StoreResult<bool> {
        let Some(mut document) = self.read_document(id)? else {
            return Ok(false);
        };
        document.push(entry.clone(), Utc::now());
        self.write_document(id, &document)?;
        Ok(true)
    }

    fn all_entries(&self, id: &GameId) -> StoreResult<Vec<LogEntry>> {
        Ok(self
            .read_document(id)?
            .map(|document| document.entries)
            .unwrap_or_default())
    }

    fn last_entry(&self, id: &GameId) -> StoreResult<Option<LogEntry>> {
        Ok(self
            .read_document(id)?
            .and_then(|mut document| document.entries.pop()))
    }

    fn entry_count(&self, id: &GameId) -> StoreResult<usize> {
        Ok(self
            .read_document(id)?
            .map_or(0, |document| document.entries.len()))
    }
}
