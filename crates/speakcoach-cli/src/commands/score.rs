//! The `speakcoach score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use speakcoach_core::model::{Attempt, CefrLevel, PracticeTab};
use speakcoach_core::scoring::{score_attempt, AttemptScores};
use speakcoach_core::traits::SpeechSource;
use speakcoach_ledger::ProgressLedger;

use crate::speech::StdinSpeechSource;

pub async fn execute(
    target: String,
    transcript: Option<String>,
    elapsed_ms: Option<u64>,
    tab: PracticeTab,
    level: Option<CefrLevel>,
    data_dir: PathBuf,
) -> Result<()> {
    anyhow::ensure!(
        level.is_none() || tab == PracticeTab::Cefr,
        "--level only applies to --tab cefr"
    );

    let (transcript, elapsed_ms) = match transcript {
        Some(text) => {
            let elapsed = elapsed_ms
                .ok_or_else(|| anyhow::anyhow!("--elapsed-ms is required with --transcript"))?;
            (text, elapsed)
        }
        None => {
            let mut source = StdinSpeechSource::new(&target);
            let utterance = source.capture().await?;
            (utterance.transcript, utterance.elapsed_ms)
        }
    };

    let scores = score_attempt(&target, &transcript, elapsed_ms);
    let attempt = Attempt::new(tab, level, target, scores);

    let ledger = ProgressLedger::open(&data_dir);
    ledger.append(attempt)?;

    print_scores(&scores);
    Ok(())
}

fn print_scores(scores: &AttemptScores) {
    let mut table = Table::new();
    table.set_header(vec!["Pronunciation", "Grammar", "Fluency", "Overall", "Speed"]);
    table.add_row(vec![
        Cell::new(format!("{}/100", scores.pronunciation)),
        Cell::new(format!("{}/100", scores.grammar)),
        Cell::new(format!("{}/100", scores.fluency)),
        Cell::new(format!("{}/100", scores.overall)),
        Cell::new(format!("{} wpm", scores.wpm)),
    ]);

    println!("{table}");
}
