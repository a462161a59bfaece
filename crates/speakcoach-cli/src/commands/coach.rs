//! The `speakcoach coach` command.

use std::path::PathBuf;

use anyhow::Result;

use speakcoach_core::coach::local_feedback;
use speakcoach_core::traits::{ChatMessage, ChatRequest, SpeechSink, COACH_SYSTEM_PROMPT};
use speakcoach_providers::{create_provider, load_config_from, CHAT_TEMPERATURE};

use crate::speech::ConsoleSpeechSink;

pub async fn execute(
    target: String,
    transcript: Option<String>,
    speak: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let utterance = transcript.unwrap_or_else(|| "(no speech captured)".to_string());

    let feedback = match create_provider(&config) {
        Some(provider) => {
            let request = ChatRequest {
                model: config.model.clone(),
                temperature: CHAT_TEMPERATURE,
                messages: vec![
                    ChatMessage::system(COACH_SYSTEM_PROMPT),
                    ChatMessage::user(format!("Target: {target}\nLearner: {utterance}")),
                ],
            };
            match provider.complete(&request).await {
                Ok(reply) => reply.content,
                Err(e) => {
                    tracing::warn!("chat provider failed, using local coach: {e:#}");
                    local_feedback(&target, &utterance)
                }
            }
        }
        None => local_feedback(&target, &utterance),
    };

    println!("{feedback}");

    if speak {
        let sink = ConsoleSpeechSink;
        sink.speak(&feedback, config.voice.as_deref()).await?;
    }

    Ok(())
}
