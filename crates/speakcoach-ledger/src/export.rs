//! CSV export of attempt history.

use std::fs;
use std::path::Path;

use speakcoach_core::model::Attempt;

use crate::store::LedgerError;

/// Fixed filename for downloadable progress exports (MIME type text/csv).
pub const EXPORT_FILE_NAME: &str = "spoken_english_progress.csv";

/// Column order of the export, matching the attempt field order.
pub const CSV_HEADER: [&str; 9] = [
    "timestamp",
    "tab",
    "level",
    "target",
    "pronunciation",
    "grammar",
    "fluency",
    "overall",
    "wpm",
];

/// Serialize attempts to CSV text.
///
/// The target sentence is always double-quoted with embedded quotes
/// doubled; every other field serializes bare. Comma delimiter, newline
/// rows, header first.
pub fn export_csv(attempts: &[Attempt]) -> String {
    let mut lines = Vec::with_capacity(attempts.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for a in attempts {
        let target = a.target.replace('"', "\"\"");
        let level = a.level.map(|l| l.to_string()).unwrap_or_default();
        lines.push(format!(
            "{},{},{},\"{}\",{},{},{},{},{}",
            a.timestamp,
            a.tab,
            level,
            target,
            a.pronunciation,
            a.grammar,
            a.fluency,
            a.overall,
            a.wpm,
        ));
    }

    lines.join("\n")
}

/// Write the CSV export to `path`.
pub fn write_csv(attempts: &[Attempt], path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_csv(attempts))?;
    Ok(())
}
