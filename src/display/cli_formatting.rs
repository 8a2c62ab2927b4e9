use owo_colors::OwoColorize;

use crate::types::{ContentPage, MediaFile, Project, SiteSetting};

use super::data_formatting::truncate_middle;
use super::format_publish_badge;

/// Format a project for single-line display with colors
pub fn format_project_line(project: &Project) -> String {
    // Pad before coloring so ANSI escapes don't count toward the width
    let id_padded = format!("{:>10}", truncate_middle(&project.id, 10));
    let badge = format_publish_badge(project.is_published);
    let category = if project.data_cat.is_empty() {
        String::new()
    } else {
        format!(" ({})", project.data_cat.cyan())
    };
    let featured = if project.featured { " ★" } else { "" };

    format!(
        "{} {} {}{}{} — {}",
        id_padded.cyan(),
        badge,
        project.title,
        featured,
        category,
        project.client.dimmed(),
    )
}

/// Format a media file for single-line display with colors
pub fn format_media_line(media: &MediaFile) -> String {
    let id_padded = format!("{:>10}", truncate_middle(&media.id, 10));
    let kind = format!("[{}]", media.file_type);
    format!(
        "{} {} {} {}",
        id_padded.cyan(),
        kind.magenta(),
        media.file_name,
        media.file_url.dimmed(),
    )
}

/// Format a content page for single-line display
pub fn format_page_line(page: &ContentPage) -> String {
    let page_type_padded = format!("{:>12}", page.page_type);
    format!(
        "{} {} ({})",
        page_type_padded.cyan(),
        page.title,
        crate::types::format_date(&page.updated_at).dimmed(),
    )
}

/// Format a site setting for single-line display
pub fn format_setting_line(setting: &SiteSetting) -> String {
    let value = serde_json::to_string(&setting.value).unwrap_or_default();
    format!(
        "{} = {}",
        setting.key.cyan(),
        truncate_middle(&value, 60),
    )
}
