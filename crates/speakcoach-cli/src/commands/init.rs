//! The `speakcoach init` command.

use std::path::Path;

use anyhow::Result;

use speakcoach_providers::{save_config, CoachConfig};

pub fn execute() -> Result<()> {
    let config_path = Path::new("speakcoach.toml");

    if config_path.exists() {
        println!("speakcoach.toml already exists, skipping");
        return Ok(());
    }

    save_config(&CoachConfig::default(), config_path)?;
    println!("Created speakcoach.toml");
    println!("Add an api_key (or set SPEAKCOACH_API_KEY) to enable AI coaching;");
    println!("the local coach works without one.");

    Ok(())
}
