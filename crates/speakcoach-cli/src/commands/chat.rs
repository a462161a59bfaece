//! The `speakcoach chat` command.

use std::path::PathBuf;

use anyhow::Result;

use speakcoach_core::coach::small_talk;
use speakcoach_core::traits::{ChatMessage, ChatRequest, COACH_SYSTEM_PROMPT};
use speakcoach_providers::{create_provider, load_config_from, CHAT_TEMPERATURE};

pub async fn execute(message: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let reply = match create_provider(&config) {
        Some(provider) => {
            let request = ChatRequest {
                model: config.model.clone(),
                temperature: CHAT_TEMPERATURE,
                messages: vec![
                    ChatMessage::system(COACH_SYSTEM_PROMPT),
                    ChatMessage::user(&message),
                ],
            };
            match provider.complete(&request).await {
                Ok(reply) => reply.content,
                Err(e) => {
                    tracing::warn!("chat provider failed, using canned replies: {e:#}");
                    small_talk(&message).to_string()
                }
            }
        }
        None => small_talk(&message).to_string(),
    };

    println!("{reply}");
    Ok(())
}
