//! Backend client module.
//!
//! The hosted CMS backend owns all persistence and auth; this module is the
//! thin typed client the admin screens call. Every operation is one
//! request/response round trip: no streaming, no pagination, no retries.

pub mod error;
pub mod rest;

use std::fmt;

use crate::error::Result;
use crate::types::{
    ContentPage, ContentPagePatch, MediaFile, NewMediaFile, NewProject, Project, ProjectPatch,
    SiteSetting,
};

pub use rest::RestBackend;

/// Backend tables the admin manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Projects,
    MediaFiles,
    ContentPages,
    SiteSettings,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Projects => "projects",
            Table::MediaFiles => "media_files",
            Table::ContentPages => "content_pages",
            Table::SiteSettings => "site_settings",
        }
    }

    /// Default ordering for list queries, as `(column, descending)`.
    pub fn default_order(&self) -> Order {
        match self {
            Table::Projects => Order::asc("order_index"),
            Table::MediaFiles => Order::desc("created_at"),
            Table::ContentPages => Order::asc("page_type"),
            Table::SiteSettings => Order::asc("key"),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering clause for a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    /// Render as a PostgREST `order` query parameter value.
    pub fn to_query_value(&self) -> String {
        let dir = if self.descending { "desc" } else { "asc" };
        format!("{}.{}", self.column, dir)
    }
}

/// Common interface to the hosted backend.
///
/// One method per operation the admin performs; each issues exactly one
/// write or read request. Implemented by [`RestBackend`] in production and
/// by an in-memory mock in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn insert_project(&self, row: &NewProject) -> Result<()>;
    async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<()>;
    async fn delete_project(&self, id: &str) -> Result<()>;

    async fn fetch_media(&self) -> Result<Vec<MediaFile>>;
    async fn insert_media(&self, row: &NewMediaFile) -> Result<()>;
    async fn delete_media(&self, id: &str) -> Result<()>;

    async fn fetch_pages(&self) -> Result<Vec<ContentPage>>;
    async fn update_page(&self, id: &str, patch: &ContentPagePatch) -> Result<()>;

    async fn fetch_settings(&self) -> Result<Vec<SiteSetting>>;
    async fn update_setting(&self, id: &str, value: &serde_json::Value) -> Result<()>;
}
