//! The `speakcoach history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use speakcoach_core::model::{CefrLevel, PracticeTab};
use speakcoach_ledger::{average, AttemptFilter, ProgressLedger, ScoreField};

pub fn execute(
    tab: Option<PracticeTab>,
    level: Option<CefrLevel>,
    data_dir: PathBuf,
) -> Result<()> {
    let ledger = ProgressLedger::open(&data_dir);
    let filter = AttemptFilter { tab, level };
    let attempts = filter.apply(&ledger.load_all());

    let mut table = Table::new();
    table.set_header(vec![
        "Time", "Tab", "Level", "Target", "Pron", "Gram", "Flu", "Overall", "WPM",
    ]);

    for a in &attempts {
        let time = chrono::DateTime::from_timestamp_millis(a.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| a.timestamp.to_string());
        let level = a.level.map(|l| l.to_string()).unwrap_or_default();
        table.add_row(vec![
            Cell::new(time),
            Cell::new(a.tab.to_string()),
            Cell::new(level),
            Cell::new(&a.target),
            Cell::new(a.pronunciation),
            Cell::new(a.grammar),
            Cell::new(a.fluency),
            Cell::new(a.overall),
            Cell::new(a.wpm),
        ]);
    }

    println!("{table}");
    println!("Attempts: {}", attempts.len());

    let averages: Vec<String> = ScoreField::ALL
        .iter()
        .map(|&field| format!("{field} {}", average(&attempts, field)))
        .collect();
    println!("Averages: {}", averages.join(", "));

    Ok(())
}
