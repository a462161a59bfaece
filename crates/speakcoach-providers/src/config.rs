//! Coach configuration.
//!
//! API key, model, voice, and UI language travel in an explicit
//! [`CoachConfig`] value handed to the components that need it, with
//! load/save as explicit boundary calls rather than ambient process-wide
//! settings.
//!
//! Note: Custom Debug impl masks the API key to prevent accidental exposure
//! in logs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use speakcoach_core::traits::ChatProvider;

use crate::openai::OpenAiProvider;

/// Sampling temperature used for coaching replies.
pub const CHAT_TEMPERATURE: f64 = 0.4;

/// Settings for the chat and speech collaborators.
#[derive(Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// API key for the chat-completion backend. Empty means no backend is
    /// configured and callers fall back to the local coach.
    #[serde(default)]
    pub api_key: String,
    /// Chat model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the chat API base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Preferred text-to-speech voice, if any.
    #[serde(default)]
    pub voice: Option<String>,
    /// UI language code.
    #[serde(default = "default_ui_language")]
    pub ui_language: String,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_ui_language() -> String {
    "en".to_string()
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: None,
            voice: None,
            ui_language: default_ui_language(),
        }
    }
}

impl std::fmt::Debug for CoachConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("voice", &self.voice)
            .field("ui_language", &self.ui_language)
            .finish()
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `speakcoach.toml` in the current directory
/// 2. `~/.config/speakcoach/config.toml`
///
/// Environment variable override: `SPEAKCOACH_API_KEY`.
pub fn load_config() -> Result<CoachConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CoachConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("speakcoach.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<CoachConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CoachConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("SPEAKCOACH_API_KEY") {
        config.api_key = key;
    }

    // Resolve env var references inside values
    config.api_key = resolve_env_vars(&config.api_key);
    let resolved_base = config.base_url.as_deref().map(resolve_env_vars);
    config.base_url = resolved_base;

    Ok(config)
}

/// Persist configuration to `path` as TOML.
pub fn save_config(config: &CoachConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config).context("failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("speakcoach"))
}

/// Create a chat provider from the configuration, or `None` when no API key
/// is set (callers fall back to the local coach).
pub fn create_provider(config: &CoachConfig) -> Option<Box<dyn ChatProvider>> {
    if config.api_key.is_empty() {
        return None;
    }
    Some(Box::new(OpenAiProvider::new(
        &config.api_key,
        config.base_url.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SPEAKCOACH_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_SPEAKCOACH_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_SPEAKCOACH_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_SPEAKCOACH_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = CoachConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.ui_language, "en");
        assert!(config.voice.is_none());
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
api_key = "sk-test"
model = "gpt-4o"
voice = "Samantha"
ui_language = "bn"
"#;
        let config: CoachConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.voice.as_deref(), Some("Samantha"));
        assert_eq!(config.ui_language, "bn");
    }

    #[test]
    fn debug_masks_the_api_key() {
        let config = CoachConfig {
            api_key: "sk-secret".into(),
            ..CoachConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = CoachConfig {
            api_key: "sk-roundtrip".into(),
            voice: Some("Daniel".into()),
            ..CoachConfig::default()
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.api_key, "sk-roundtrip");
        assert_eq!(loaded.voice.as_deref(), Some("Daniel"));
    }

    #[test]
    fn missing_explicit_config_path_is_an_error() {
        assert!(load_config_from(Some(Path::new("no_such_config.toml"))).is_err());
    }

    #[test]
    fn no_api_key_means_no_provider() {
        assert!(create_provider(&CoachConfig::default()).is_none());
        let with_key = CoachConfig {
            api_key: "sk-test".into(),
            ..CoachConfig::default()
        };
        assert!(create_provider(&with_key).is_some());
    }
}
