//! Content page commands: list, show, edit.
//!
//! Page payloads are opaque JSON owned by the public site's renderer; the
//! admin displays them verbatim and edits them as whole documents.

use owo_colors::OwoColorize;

use crate::backend::Backend;
use crate::display::format_page_line;
use crate::error::{Result, SlateError};
use crate::query::filter_pages;
use crate::types::ContentPagePatch;
use crate::utils::open_in_editor;

use super::{backend_from_config, collapse, print_json};

/// List content pages
pub async fn cmd_content_ls(search: Option<&str>, json: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let pages = collapse(backend.fetch_pages().await, "load content pages")?;
    let visible = filter_pages(&pages, search.unwrap_or(""));

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No content pages found.");
        return Ok(());
    }
    for page in &visible {
        println!("{}", format_page_line(page));
    }
    Ok(())
}

/// Show one page's payload as pretty JSON
pub async fn cmd_content_show(page_type: &str) -> Result<()> {
    let backend = backend_from_config()?;
    let pages = collapse(backend.fetch_pages().await, "load content pages")?;
    let page = pages
        .iter()
        .find(|p| p.page_type == page_type)
        .ok_or_else(|| SlateError::NotFound("content page", page_type.to_string()))?;

    println!("{}", format_page_line(page));
    println!("{}", serde_json::to_string_pretty(&page.content)?);
    Ok(())
}

/// Edit a page's payload in $EDITOR, then write it back as one update
pub async fn cmd_content_edit(page_type: &str) -> Result<()> {
    let backend = backend_from_config()?;
    let pages = collapse(backend.fetch_pages().await, "load content pages")?;
    let page = pages
        .iter()
        .find(|p| p.page_type == page_type)
        .ok_or_else(|| SlateError::NotFound("content page", page_type.to_string()))?;

    let file = tempfile::Builder::new()
        .prefix("slate-content-")
        .suffix(".json")
        .tempfile()?;
    std::fs::write(file.path(), serde_json::to_string_pretty(&page.content)?)?;

    open_in_editor(file.path())?;

    let edited = std::fs::read_to_string(file.path())?;
    let content: serde_json::Value = serde_json::from_str(&edited)
        .map_err(|e| SlateError::Validation(format!("edited content is not valid JSON: {e}")))?;

    if content == page.content {
        println!("No changes.");
        return Ok(());
    }

    let patch = ContentPagePatch {
        content: Some(content),
        ..Default::default()
    };
    collapse(backend.update_page(&page.id, &patch).await, "update content page")?;
    collapse(backend.fetch_pages().await, "load content pages")?;

    println!("{} Page '{}' updated", "✓".green(), page.page_type);
    Ok(())
}
