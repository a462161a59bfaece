//! Collaborator traits for the host environment.
//!
//! The scoring core never touches chat or speech backends directly; hosts
//! inject concrete adapters through these narrow interfaces. Chat backends
//! live in the `speakcoach-providers` crate.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// System prompt sent ahead of every coaching conversation.
pub const COACH_SYSTEM_PROMPT: &str = "You are a friendly Spoken English coach. Keep replies under 80 words.\n\
Assess the learner's last utterance for pronunciation (approx from text), grammar, vocabulary, and fluency.\n\
Give 1-2 corrections, 1 sentence of praise, and a short rewrite in natural English. End with a follow-up question.";

// ---------------------------------------------------------------------------
// Chat-completion collaborator
// ---------------------------------------------------------------------------

/// Role of one turn in a chat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One role-tagged turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request for one chat completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
    /// Ordered conversation history, oldest turn first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Reply from a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text, trimmed.
    pub content: String,
    /// Model that actually produced the reply.
    pub model: String,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

/// Trait for chat-completion backends that produce coaching replies.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Human-readable provider name (e.g. "openai").
    fn name(&self) -> &str;

    /// Send a conversation and return the assistant's reply.
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<ChatReply>;
}

// ---------------------------------------------------------------------------
// Speech collaborators
// ---------------------------------------------------------------------------

/// A captured utterance: the final transcript plus elapsed recording time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenUtterance {
    pub transcript: String,
    pub elapsed_ms: u64,
}

/// Speech input: emits one final transcript per capture session.
#[async_trait]
pub trait SpeechSource: Send {
    async fn capture(&mut self) -> anyhow::Result<SpokenUtterance>;
}

/// Speech output: fire-and-forget text-to-speech.
#[async_trait]
pub trait SpeechSink: Send + Sync {
    async fn speak(&self, text: &str, voice: Option<&str>) -> anyhow::Result<()>;
}
