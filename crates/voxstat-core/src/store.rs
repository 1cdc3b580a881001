//! Transcript persistence.
//!
//! [`TranscriptStore`] keeps records in an append-only JSON Lines file, one
//! [`TextRecord`] per line. [`MemoryStore`] holds them in memory. Both
//! implement [`RecordSink`] for ingestion and [`CorpusProvider`] for analysis.
//!
//! Appends are serialized by an in-process lock; every read returns a snapshot
//! of the records present at the time of the call.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::RwLock;

use camino::{Utf8Path, Utf8PathBuf};

use crate::corpus::CorpusProvider;
use crate::error::{StoreError, StoreResult};
use crate::record::TextRecord;

/// Destination for newly ingested records.
pub trait RecordSink {
    /// Persist one record.
    fn append(&self, record: &TextRecord) -> StoreResult<()>;
}

/// File-backed store using JSON Lines.
#[derive(Debug)]
pub struct TranscriptStore {
    path: Utf8PathBuf,
    lock: RwLock<()>,
}

impl TranscriptStore {
    /// Open a store at `path`. The file is created on first append.
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_all(&self) -> StoreResult<Vec<TextRecord>> {
        let _guard = self.lock.read().map_err(|_| StoreError::Poisoned)?;

        let file = match File::open(self.path.as_std_path()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path, "store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                line: idx + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl RecordSink for TranscriptStore {
    #[tracing::instrument(skip(self, record), fields(path = %self.path, owner = %record.owner))]
    fn append(&self, record: &TextRecord) -> StoreResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.lock.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent.as_std_path()).map_err(|e| self.io_error(e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path.as_std_path())
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tracing::debug!("record appended");
        Ok(())
    }
}

impl CorpusProvider for TranscriptStore {
    fn records_for(&self, user: &str) -> StoreResult<Vec<TextRecord>> {
        let mut records = self.read_all()?;
        records.retain(|r| r.owner == user);
        Ok(records)
    }

    fn all_records(&self) -> StoreResult<Vec<TextRecord>> {
        self.read_all()
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<TextRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<TextRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map_or(0, |r| r.len())
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemoryStore {
    fn append(&self, record: &TextRecord) -> StoreResult<()> {
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .push(record.clone());
        Ok(())
    }
}

impl CorpusProvider for MemoryStore {
    fn records_for(&self, user: &str) -> StoreResult<Vec<TextRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.iter().filter(|r| r.owner == user).cloned().collect())
    }

    fn all_records(&self) -> StoreResult<Vec<TextRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }
}
