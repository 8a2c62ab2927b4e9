//! Dashboard summary: record counts across the three screens.

use owo_colors::OwoColorize;

use crate::backend::Backend;
use crate::error::Result;

use super::{backend_from_config, collapse, print_json};

/// Show counts for projects, media, and content pages
pub async fn cmd_status(json: bool) -> Result<()> {
    let backend = backend_from_config()?;

    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let media = collapse(backend.fetch_media().await, "load media")?;
    let pages = collapse(backend.fetch_pages().await, "load content pages")?;

    let published = projects.iter().filter(|p| p.is_published).count();
    let featured = projects.iter().filter(|p| p.featured).count();

    if json {
        return print_json(&serde_json::json!({
            "projects": {
                "total": projects.len(),
                "published": published,
                "featured": featured,
            },
            "media_files": media.len(),
            "content_pages": pages.len(),
        }));
    }

    println!("{}", "Site overview".cyan().bold());
    println!(
        "  projects:      {} ({published} published, {featured} featured)",
        projects.len()
    );
    println!("  media files:   {}", media.len());
    println!("  content pages: {}", pages.len());
    Ok(())
}
