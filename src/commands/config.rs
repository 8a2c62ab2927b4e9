//! Configuration commands for managing slate settings.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print one value

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{Result, SlateError};

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}\n", "Configuration:".cyan().bold());

    println!("{}:", "backend".cyan());
    match config.backend_url() {
        Some(url) => println!("  url: {url}"),
        None => println!("  url: {}", "not configured".dimmed()),
    }
    match config.api_key() {
        Some(key) => println!("  api_key: {}", mask_sensitive_value(&key)),
        None => println!("  api_key: {}", "not configured".dimmed()),
    }

    match &config.default_category {
        Some(cat) => println!("\ndefault_category: {cat}"),
        None => println!("\ndefault_category: {}", "not set".dimmed()),
    }

    println!("\nconfig file: {}", Config::config_path().display());
    Ok(())
}

/// Get a single config value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(SlateError::Config(format!("'{key}' is not set"))),
    }
}

/// Set a config value and save
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {key} updated", "✓".green());
    Ok(())
}
