//! Site settings commands: list, get, set.

use owo_colors::OwoColorize;

use crate::backend::Backend;
use crate::display::format_setting_line;
use crate::error::{Result, SlateError};
use crate::query::filter_settings;

use super::{backend_from_config, collapse, print_json};

/// List all settings
pub async fn cmd_settings_ls(search: Option<&str>, json: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let settings = collapse(backend.fetch_settings().await, "load settings")?;
    let visible = filter_settings(&settings, search.unwrap_or(""));

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No settings found.");
        return Ok(());
    }
    for setting in &visible {
        println!("{}", format_setting_line(setting));
    }
    Ok(())
}

/// Print one setting's value as pretty JSON
pub async fn cmd_settings_get(key: &str) -> Result<()> {
    let backend = backend_from_config()?;
    let settings = collapse(backend.fetch_settings().await, "load settings")?;
    let setting = settings
        .iter()
        .find(|s| s.key == key)
        .ok_or_else(|| SlateError::NotFound("setting", key.to_string()))?;

    println!("{}", serde_json::to_string_pretty(&setting.value)?);
    Ok(())
}

/// Set a setting's value from a JSON argument.
///
/// A bare string that isn't valid JSON is treated as a JSON string, so
/// `slate settings set tagline "Films from Dubai"` does the expected thing.
pub async fn cmd_settings_set(key: &str, value: &str) -> Result<()> {
    let parsed: serde_json::Value = match serde_json::from_str(value) {
        Ok(v) => v,
        Err(_) => serde_json::Value::String(value.to_string()),
    };

    let backend = backend_from_config()?;
    let settings = collapse(backend.fetch_settings().await, "load settings")?;
    let setting = settings
        .iter()
        .find(|s| s.key == key)
        .ok_or_else(|| SlateError::NotFound("setting", key.to_string()))?;

    collapse(
        backend.update_setting(&setting.id, &parsed).await,
        "update setting",
    )?;
    collapse(backend.fetch_settings().await, "load settings")?;

    println!("{} Setting '{key}' updated", "✓".green());
    Ok(())
}
