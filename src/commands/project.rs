//! Project commands: list, show, create, edit, publish, delete.
//!
//! Every mutation follows the same cycle: one write request, then a full
//! reload of the list so local output reflects what the backend now holds.

use owo_colors::OwoColorize;

use crate::backend::Backend;
use crate::config::Config;
use crate::display::{format_project_line, project_table};
use crate::error::{Result, SlateError};
use crate::query::{ListFilter, category_options, filter_projects};
use crate::types::{NewProject, Project, ProjectPatch, slugify};

use super::interactive::confirm;
use super::{backend_from_config, collapse, print_json, resolve_id};

/// List projects, with local category/search filtering
pub async fn cmd_project_ls(
    category: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;

    let mut filter = match category {
        Some(cat) => ListFilter::with_category(cat),
        None => ListFilter::new(),
    };
    if let Some(s) = search {
        filter = filter.with_search(s);
    }
    let visible = filter_projects(&projects, &filter);

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!("{}", project_table(&visible));

    let categories = category_options(&projects, |p| p.data_cat.as_str());
    if !categories.is_empty() {
        println!("categories: {}", categories.join(", ").dimmed());
    }
    Ok(())
}

/// Show one project in full
pub async fn cmd_project_show(id: &str, json: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let project = resolve_id(&projects, |p| p.id.as_str(), id, "project")?;

    if json {
        return print_json(project);
    }

    println!("{}", format_project_line(project));
    println!("  slug:         {}", project.slug);
    if let Some(desc) = &project.description {
        println!("  description:  {desc}");
    }
    println!("  poster:       {}", project.poster_image);
    println!("  video:        {}", project.video_url);
    println!("  order:        {}", project.order_index);
    println!("  created:      {}", crate::types::format_date(&project.created_at));
    println!("  updated:      {}", crate::types::format_date(&project.updated_at));
    Ok(())
}

/// Options for creating a project
#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    pub title: String,
    pub client: Option<String>,
    pub category: Option<String>,
    pub data_cat: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub poster: Option<String>,
    pub video: Option<String>,
    pub order: Option<i64>,
    pub publish: bool,
}

/// Create a new project
pub async fn cmd_project_create(options: CreateProjectOptions) -> Result<()> {
    if options.title.trim().is_empty() {
        return Err(SlateError::Validation(
            "project title must not be empty".to_string(),
        ));
    }

    let config = Config::load()?;
    let category = options
        .category
        .or_else(|| config.default_category.clone())
        .unwrap_or_default();
    // data_cat drives the public site's filter chips; it follows category
    // unless set explicitly.
    let data_cat = options.data_cat.unwrap_or_else(|| category.clone());
    let slug = options.slug.unwrap_or_else(|| slugify(&options.title));

    let row = NewProject {
        title: options.title.trim().to_string(),
        slug,
        client: options.client.unwrap_or_default(),
        category,
        data_cat,
        description: options.description,
        poster_image: options.poster.unwrap_or_default(),
        poster_image_srcset: String::new(),
        video_url: options.video.unwrap_or_default(),
        is_published: options.publish,
        order_index: options.order.unwrap_or(0),
    };

    let backend = backend_from_config()?;
    collapse(backend.insert_project(&row).await, "create project")?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;

    println!(
        "{} Project '{}' created ({} total)",
        "✓".green(),
        row.title,
        projects.len()
    );
    Ok(())
}

/// Set one field on a project
pub async fn cmd_project_set(id: &str, field: &str, value: &str) -> Result<()> {
    let patch = ProjectPatch::from_field(field, value)?;

    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let project = resolve_id(&projects, |p| p.id.as_str(), id, "project")?;
    let full_id = project.id.clone();

    collapse(backend.update_project(&full_id, &patch).await, "update project")?;
    collapse(backend.fetch_projects().await, "load projects")?;

    println!("{} Updated {field} on '{}'", "✓".green(), project.title);
    Ok(())
}

/// Explicitly publish or unpublish a project
pub async fn cmd_project_publish(id: &str, publish: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let project = resolve_id(&projects, |p| p.id.as_str(), id, "project")?;

    set_published(&backend, project, publish).await
}

/// Toggle the publish flag from its loaded value.
///
/// Reads the boolean from the already-loaded record and writes its negation
/// without re-fetching first; two operators toggling concurrently race and
/// the last write wins.
pub async fn cmd_project_toggle(id: &str) -> Result<()> {
    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let project = resolve_id(&projects, |p| p.id.as_str(), id, "project")?;

    set_published(&backend, project, !project.is_published).await
}

async fn set_published<B: Backend>(backend: &B, project: &Project, publish: bool) -> Result<()> {
    let patch = ProjectPatch {
        is_published: Some(publish),
        ..Default::default()
    };
    collapse(
        backend.update_project(&project.id, &patch).await,
        "update project",
    )?;
    collapse(backend.fetch_projects().await, "load projects")?;

    let verb = if publish { "published" } else { "unpublished" };
    println!("{} Project '{}' {verb}", "✓".green(), project.title);
    Ok(())
}

/// Delete a project after confirmation
pub async fn cmd_project_rm(id: &str, force: bool) -> Result<()> {
    let backend = backend_from_config()?;
    let projects = collapse(backend.fetch_projects().await, "load projects")?;
    let project = resolve_id(&projects, |p| p.id.as_str(), id, "project")?;

    if !force
        && !confirm(&format!(
            "Are you sure you want to delete project '{}'",
            project.title
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    collapse(backend.delete_project(&project.id).await, "delete project")?;
    let remaining = collapse(backend.fetch_projects().await, "load projects")?;

    println!(
        "{} Project '{}' deleted ({} remaining)",
        "✓".green(),
        project.title,
        remaining.len()
    );
    Ok(())
}
