//! The `speakcoach clear` command.

use std::path::PathBuf;

use anyhow::Result;

use speakcoach_ledger::ProgressLedger;

pub fn execute(yes: bool, data_dir: PathBuf) -> Result<()> {
    anyhow::ensure!(yes, "refusing to delete saved progress without --yes");

    let ledger = ProgressLedger::open(&data_dir);
    let count = ledger.load_all().len();
    ledger.clear()?;

    println!("Cleared {count} saved attempts");
    Ok(())
}
