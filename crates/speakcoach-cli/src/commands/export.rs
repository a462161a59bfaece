//! The `speakcoach export` command.

use std::path::PathBuf;

use anyhow::Result;

use speakcoach_core::model::{CefrLevel, PracticeTab};
use speakcoach_ledger::{write_csv, AttemptFilter, ProgressLedger, EXPORT_FILE_NAME};

pub fn execute(
    tab: Option<PracticeTab>,
    level: Option<CefrLevel>,
    output: Option<PathBuf>,
    data_dir: PathBuf,
) -> Result<()> {
    let ledger = ProgressLedger::open(&data_dir);
    let filter = AttemptFilter { tab, level };
    let attempts = filter.apply(&ledger.load_all());

    let path = output.unwrap_or_else(|| data_dir.join(EXPORT_FILE_NAME));
    write_csv(&attempts, &path)?;

    println!("Exported {} attempts to {}", attempts.len(), path.display());
    Ok(())
}
