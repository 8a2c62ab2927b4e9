use owo_colors::OwoColorize;

pub mod cli_formatting;
pub mod data_formatting;

pub use cli_formatting::*;
pub use data_formatting::*;

/// Render the publish state as the colored badge used across list output.
pub fn format_publish_badge(is_published: bool) -> String {
    if is_published {
        "[published]".green().to_string()
    } else {
        "[draft]".dimmed().to_string()
    }
}
