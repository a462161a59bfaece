//! speakcoach-ledger — the progress ledger.
//!
//! Persists an ordered sequence of scored attempts, supports filtered
//! aggregation, and serializes history to a flat CSV export.

pub mod export;
pub mod stats;
pub mod store;

pub use export::{export_csv, write_csv, CSV_HEADER, EXPORT_FILE_NAME};
pub use stats::{average, AttemptFilter, ScoreField};
pub use store::{LedgerError, ProgressLedger, STORAGE_KEY};
