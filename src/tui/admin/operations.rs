//! Async operation handlers for the admin TUI
//!
//! Each operation issues its backend calls and reduces the outcome to either
//! a success message or the single generic failure message the operator
//! sees; the detailed error goes to the debug log only. Generic over
//! [`Backend`] so tests drive them with an in-memory mock.

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::backend::Backend;
use crate::types::{NewMediaFile, ProjectPatch};

use super::model::TabData;
use super::state::AdminTab;

/// Concurrent requests for bulk deletes
const BULK_DELETE_CONCURRENCY: usize = 5;

/// A mutation the TUI can issue. Exactly one write request per entry
/// (bulk delete: one per id).
#[derive(Debug, Clone)]
pub enum Mutation {
    TogglePublish { id: String, current: bool },
    DeleteProject { id: String },
    DeleteMedia { ids: Vec<String> },
    AddMedia(NewMediaFile),
}

impl Mutation {
    /// The tab whose list must be reloaded after this mutation succeeds.
    pub fn tab(&self) -> AdminTab {
        match self {
            Mutation::TogglePublish { .. } | Mutation::DeleteProject { .. } => AdminTab::Projects,
            Mutation::DeleteMedia { .. } | Mutation::AddMedia(_) => AdminTab::Media,
        }
    }
}

/// Load one tab's data. On failure the caller keeps its previous list.
pub async fn load_tab<B: Backend>(backend: &B, tab: AdminTab) -> Result<TabData, String> {
    match tab {
        AdminTab::Projects => match backend.fetch_projects().await {
            Ok(rows) => Ok(TabData::Projects(rows)),
            Err(e) => {
                debug!(error = %e, "load projects");
                Err("Failed to load projects".to_string())
            }
        },
        AdminTab::Media => match backend.fetch_media().await {
            Ok(rows) => Ok(TabData::Media(rows)),
            Err(e) => {
                debug!(error = %e, "load media");
                Err("Failed to load media".to_string())
            }
        },
        AdminTab::Content => {
            let pages = backend.fetch_pages().await;
            let settings = backend.fetch_settings().await;
            match (pages, settings) {
                (Ok(pages), Ok(settings)) => Ok(TabData::Content(pages, settings)),
                (Err(e), _) | (_, Err(e)) => {
                    debug!(error = %e, "load content");
                    Err("Failed to load content".to_string())
                }
            }
        }
    }
}

/// Run one mutation to completion, returning the toast message for either
/// outcome. The caller reloads the affected tab only on success.
pub async fn run_mutation<B: Backend>(backend: &B, mutation: Mutation) -> Result<String, String> {
    match mutation {
        Mutation::TogglePublish { id, current } => {
            let patch = ProjectPatch {
                is_published: Some(!current),
                ..Default::default()
            };
            match backend.update_project(&id, &patch).await {
                Ok(()) => Ok(if current {
                    "Project unpublished".to_string()
                } else {
                    "Project published".to_string()
                }),
                Err(e) => {
                    debug!(error = %e, id, "toggle publish");
                    Err("Failed to update project".to_string())
                }
            }
        }
        Mutation::DeleteProject { id } => match backend.delete_project(&id).await {
            Ok(()) => Ok("Project deleted successfully".to_string()),
            Err(e) => {
                debug!(error = %e, id, "delete project");
                Err("Failed to delete project".to_string())
            }
        },
        Mutation::DeleteMedia { ids } => delete_media_bulk(backend, ids).await,
        Mutation::AddMedia(row) => match backend.insert_media(&row).await {
            Ok(()) => Ok("Media added successfully!".to_string()),
            Err(e) => {
                debug!(error = %e, "add media");
                Err("Failed to add media".to_string())
            }
        },
    }
}

/// Delete several media files with bounded concurrency.
///
/// Writes are independent requests; a partial failure reports how many
/// landed so the operator knows a reload will show a shorter list.
async fn delete_media_bulk<B: Backend>(backend: &B, ids: Vec<String>) -> Result<String, String> {
    let total = ids.len();
    let results: Vec<_> = stream::iter(ids)
        .map(|id| async move {
            let result = backend.delete_media(&id).await;
            if let Err(e) = &result {
                debug!(error = %e, id, "delete media");
            }
            result
        })
        .buffer_unordered(BULK_DELETE_CONCURRENCY)
        .collect()
        .await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed == 0 {
        if total == 1 {
            Ok("Media deleted!".to_string())
        } else {
            Ok(format!("Deleted {total} media files"))
        }
    } else if failed == total {
        Err("Failed to delete media".to_string())
    } else {
        Err(format!("Failed to delete {failed} of {total} media files"))
    }
}
