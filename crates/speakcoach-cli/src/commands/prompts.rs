//! The `speakcoach prompts` command.

use anyhow::Result;

use speakcoach_core::model::{CefrLevel, PracticeTab};

use crate::lessons;

pub fn execute(tab: PracticeTab, level: Option<CefrLevel>) -> Result<()> {
    anyhow::ensure!(
        level.is_none() || tab == PracticeTab::Cefr,
        "--level only applies to --tab cefr"
    );

    let level = level.unwrap_or(CefrLevel::A1);
    match tab {
        PracticeTab::Cefr => println!("{tab} {level}:"),
        _ => println!("{tab}:"),
    }

    for (i, sentence) in lessons::prompts_for(tab, level).iter().enumerate() {
        println!("{}. {sentence}", i + 1);
    }

    Ok(())
}
