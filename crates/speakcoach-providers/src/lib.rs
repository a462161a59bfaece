//! speakcoach-providers — chat-completion collaborators.
//!
//! Implements the `ChatProvider` trait for OpenAI-compatible backends,
//! plus a mock provider for tests and the explicit coach configuration
//! object that replaces ambient per-process settings.

pub mod config;
pub mod error;
pub mod mock;
pub mod openai;

pub use config::{
    create_provider, load_config, load_config_from, save_config, CoachConfig, CHAT_TEMPERATURE,
};
pub use error::ChatError;
