//! Console adapters for the speech capability traits.
//!
//! Real speech recognition and synthesis live in the host platform; the CLI
//! stands in with a typed transcript (timed from prompt to submission) and
//! a printed utterance.

use std::io::{self, Write};
use std::time::Instant;

use async_trait::async_trait;

use speakcoach_core::traits::{SpeechSink, SpeechSource, SpokenUtterance};

/// Speech source that reads a typed transcript from stdin, with the
/// wall-clock time from prompt to submission as the recording duration.
pub struct StdinSpeechSource {
    prompt: String,
}

impl StdinSpeechSource {
    pub fn new(target: &str) -> Self {
        Self {
            prompt: format!("Say the sentence, then press Enter:\n  \"{target}\"\n> "),
        }
    }
}

#[async_trait]
impl SpeechSource for StdinSpeechSource {
    async fn capture(&mut self) -> anyhow::Result<SpokenUtterance> {
        print!("{}", self.prompt);
        io::stdout().flush()?;

        let start = Instant::now();
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        Ok(SpokenUtterance {
            transcript: line.trim().to_string(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Fire-and-forget speech sink that prints instead of synthesizing.
pub struct ConsoleSpeechSink;

#[async_trait]
impl SpeechSink for ConsoleSpeechSink {
    async fn speak(&self, text: &str, voice: Option<&str>) -> anyhow::Result<()> {
        match voice {
            Some(v) => println!("[{v}] {text}"),
            None => println!("[voice] {text}"),
        }
        Ok(())
    }
}
