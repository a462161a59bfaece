//! JSON-backed attempt storage.
//!
//! One logical key: the whole history lives in a single JSON document named
//! after [`STORAGE_KEY`], rewritten in full on every append.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use speakcoach_core::model::Attempt;

/// Namespaced identifier for the progress history store.
pub const STORAGE_KEY: &str = "tutor_progress_v1";

/// Errors from ledger persistence.
///
/// Read-side corruption is deliberately absent: unreadable history loads as
/// empty rather than surfacing an error, so only writes can fail.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing storage could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// The attempt history could not be encoded for persistence.
    #[error("failed to encode attempt history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Append-only ledger of scored attempts.
///
/// `append` and `clear` hold an internal lock across the whole
/// read-modify-write-persist sequence, so concurrent callers cannot
/// interleave and drop each other's attempts.
pub struct ProgressLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProgressLedger {
    /// Open the ledger stored under `data_dir`.
    ///
    /// The directory and file are created lazily on first append; a missing
    /// file reads as empty history.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(format!("{STORAGE_KEY}.json"));
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one attempt and persist the full updated sequence.
    pub fn append(&self, attempt: Attempt) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().expect("ledger lock poisoned");
        let mut attempts = self.load_all();
        attempts.push(attempt);
        self.persist(&attempts)
    }

    /// Full history in insertion (chronological) order.
    ///
    /// Missing or unreadable data loads as empty history; corruption is
    /// logged and swallowed rather than surfaced.
    pub fn load_all(&self) -> Vec<Attempt> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(attempts) => attempts,
            Err(e) => {
                tracing::warn!(
                    "corrupt history in {}, treating as empty: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Destructively remove all persisted attempts. Irreversible.
    pub fn clear(&self) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().expect("ledger lock poisoned");
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, attempts: &[Attempt]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(attempts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use speakcoach_core::model::{CefrLevel, PracticeTab};
    use speakcoach_core::scoring::AttemptScores;

    fn attempt(timestamp: i64, target: &str) -> Attempt {
        Attempt::with_timestamp(
            timestamp,
            PracticeTab::Cefr,
            Some(CefrLevel::A1),
            target,
            AttemptScores {
                pronunciation: 80,
                grammar: 70,
                fluency: 60,
                overall: 73,
                wpm: 110,
            },
        )
    }

    #[test]
    fn append_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());

        ledger.append(attempt(1, "first")).unwrap();
        ledger.append(attempt(2, "second")).unwrap();

        let all = ledger.load_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].target, "first");
        assert_eq!(all[1].target, "second");
    }

    #[test]
    fn history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let ledger = ProgressLedger::open(dir.path());
        ledger.append(attempt(1, "kept across restarts")).unwrap();
        drop(ledger);

        let reopened = ProgressLedger::open(dir.path());
        let all = reopened.load_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].target, "kept across restarts");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());
        assert!(ledger.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());
        std::fs::write(ledger.path(), "{not valid json]").unwrap();
        assert!(ledger.load_all().is_empty());
    }

    #[test]
    fn appending_after_corruption_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());
        std::fs::write(ledger.path(), "garbage").unwrap();

        ledger.append(attempt(1, "fresh start")).unwrap();
        let all = ledger.load_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].target, "fresh start");
    }

    #[test]
    fn clear_then_load_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());

        ledger.append(attempt(1, "gone soon")).unwrap();
        ledger.clear().unwrap();
        assert!(ledger.load_all().is_empty());
    }

    #[test]
    fn clear_on_empty_store_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());
        ledger.clear().unwrap();
    }

    #[test]
    fn store_file_is_named_after_the_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::open(dir.path());
        assert!(ledger
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .starts_with(STORAGE_KEY));
    }
}
