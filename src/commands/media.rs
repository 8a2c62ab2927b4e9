//! Media library commands: list, add, delete.
//!
//! There is no upload pipeline; `media add` records a URL that already lives
//! on the CDN.

use owo_colors::OwoColorize;
use tracing::warn;

use crate::backend::Backend;
use crate::display::media_table;
use crate::error::Result;
use crate::query::filter_media;
use crate::types::{MediaKind, NewMediaFile};

use super::interactive::confirm;
use super::{backend_from_config, collapse, print_json, resolve_id};

/// List media files, with local kind/search filtering
pub async fn cmd_media_ls(kind: Option<&MediaKind>, search: Option<&str>, json: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let files = collapse(backend.fetch_media().await, "load media")?;

    let visible = filter_media(&files, kind, search.unwrap_or(""));

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No media files found.");
        return Ok(());
    }
    println!("{}", media_table(&visible));
    Ok(())
}

/// Add a media file by URL
pub async fn cmd_media_add(
    file_name: &str,
    file_url: &str,
    kind: MediaKind,
    size: Option<u64>,
) -> Result<()> {
    let row = NewMediaFile {
        file_name: file_name.trim().to_string(),
        file_url: file_url.trim().to_string(),
        file_type: kind,
        file_size: size,
    };
    row.validate()?;

    if url::Url::parse(&row.file_url).is_err() {
        // Not rejected: the backend column is free text, but a bad URL is
        // almost always a paste mistake worth flagging.
        warn!(url = %row.file_url, "file_url does not parse as a URL");
        eprintln!("{} '{}' does not look like a URL", "warning:".yellow(), row.file_url);
    }

    let backend = backend_from_config()?;
    collapse(backend.insert_media(&row).await, "add media")?;
    let files = collapse(backend.fetch_media().await, "load media")?;

    println!(
        "{} Media '{}' added ({} total)",
        "✓".green(),
        row.file_name,
        files.len()
    );
    Ok(())
}

/// Delete a media file after confirmation
pub async fn cmd_media_rm(id: &str, force: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let files = collapse(backend.fetch_media().await, "load media")?;
    let media = resolve_id(&files, |m| m.id.as_str(), id, "media file")?;

    if !force
        && !confirm(&format!(
            "Are you sure you want to delete media file '{}'",
            media.file_name
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    collapse(backend.delete_media(&media.id).await, "delete media")?;
    let remaining = collapse(backend.fetch_media().await, "load media")?;

    println!(
        "{} Media '{}' deleted ({} remaining)",
        "✓".green(),
        media.file_name,
        remaining.len()
    );
    Ok(())
}
