//! Shared test fixtures: an in-memory backend with call counting and
//! failure injection, plus record builders.

use std::sync::Mutex;

use slate::backend::Backend;
use slate::error::{Result, SlateError};
use slate::types::{
    ContentPage, ContentPagePatch, MediaFile, MediaKind, NewMediaFile, NewProject, Project,
    ProjectPatch, SiteSetting,
};

/// Operations that can be told to fail on their next call.
#[derive(Debug, Default)]
pub struct FailureFlags {
    pub fetch_projects: bool,
    pub fetch_media: bool,
    pub insert_media: bool,
    pub update_project: bool,
    pub delete_project: bool,
    pub delete_media: bool,
}

/// Call counters, one per backend operation the tests assert on.
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub fetch_projects: usize,
    pub fetch_media: usize,
    pub insert_media: usize,
    pub update_project: usize,
    pub delete_project: usize,
    pub delete_media: usize,
}

#[derive(Debug, Default)]
struct Inner {
    projects: Vec<Project>,
    media: Vec<MediaFile>,
    pages: Vec<ContentPage>,
    settings: Vec<SiteSetting>,
    fail: FailureFlags,
    calls: CallCounts,
}

/// In-memory stand-in for the hosted backend.
///
/// Mutations land immediately; reads return a clone of the current rows, so
/// the load-after-mutate cycle observes exactly what a real reload would.
#[derive(Debug, Default)]
pub struct MockBackend {
    inner: Mutex<Inner>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        let backend = Self::new();
        backend.inner.lock().unwrap().projects = projects;
        backend
    }

    pub fn with_media(media: Vec<MediaFile>) -> Self {
        let backend = Self::new();
        backend.inner.lock().unwrap().media = media;
        backend
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn media_rows(&self) -> Vec<MediaFile> {
        self.inner.lock().unwrap().media.clone()
    }

    pub fn project_rows(&self) -> Vec<Project> {
        self.inner.lock().unwrap().projects.clone()
    }

    pub fn fail_next(&self, configure: impl FnOnce(&mut FailureFlags)) {
        configure(&mut self.inner.lock().unwrap().fail);
    }

    fn backend_error() -> SlateError {
        SlateError::Api("injected failure (503 Service Unavailable)".to_string())
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.fetch_projects += 1;
        if std::mem::take(&mut inner.fail.fetch_projects) {
            return Err(Self::backend_error());
        }
        let mut rows = inner.projects.clone();
        rows.sort_by_key(|p| p.order_index);
        Ok(rows)
    }

    async fn insert_project(&self, row: &NewProject) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: row.title.clone(),
            slug: row.slug.clone(),
            client: row.client.clone(),
            category: row.category.clone(),
            data_cat: row.data_cat.clone(),
            description: row.description.clone(),
            poster_image: row.poster_image.clone(),
            poster_image_srcset: row.poster_image_srcset.clone(),
            video_url: row.video_url.clone(),
            is_published: row.is_published,
            order_index: row.order_index,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            ..Default::default()
        };
        inner.projects.push(project);
        Ok(())
    }

    async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update_project += 1;
        if std::mem::take(&mut inner.fail.update_project) {
            return Err(Self::backend_error());
        }
        let project = inner
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SlateError::NotFound("project", id.to_string()))?;
        if let Some(title) = &patch.title {
            project.title = title.clone();
        }
        if let Some(client) = &patch.client {
            project.client = client.clone();
        }
        if let Some(data_cat) = &patch.data_cat {
            project.data_cat = data_cat.clone();
        }
        if let Some(is_published) = patch.is_published {
            project.is_published = is_published;
        }
        if let Some(featured) = patch.featured {
            project.featured = featured;
        }
        if let Some(order_index) = patch.order_index {
            project.order_index = order_index;
        }
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete_project += 1;
        if std::mem::take(&mut inner.fail.delete_project) {
            return Err(Self::backend_error());
        }
        inner.projects.retain(|p| p.id != id);
        Ok(())
    }

    async fn fetch_media(&self) -> Result<Vec<MediaFile>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.fetch_media += 1;
        if std::mem::take(&mut inner.fail.fetch_media) {
            return Err(Self::backend_error());
        }
        Ok(inner.media.clone())
    }

    async fn insert_media(&self, row: &NewMediaFile) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.insert_media += 1;
        if std::mem::take(&mut inner.fail.insert_media) {
            return Err(Self::backend_error());
        }
        let media = MediaFile {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: row.file_name.clone(),
            file_url: row.file_url.clone(),
            file_type: row.file_type.clone(),
            file_size: row.file_size,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        // Newest first, matching the table's created_at.desc ordering
        inner.media.insert(0, media);
        Ok(())
    }

    async fn delete_media(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete_media += 1;
        if std::mem::take(&mut inner.fail.delete_media) {
            return Err(Self::backend_error());
        }
        inner.media.retain(|m| m.id != id);
        Ok(())
    }

    async fn fetch_pages(&self) -> Result<Vec<ContentPage>> {
        Ok(self.inner.lock().unwrap().pages.clone())
    }

    async fn update_page(&self, id: &str, patch: &ContentPagePatch) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let page = inner
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SlateError::NotFound("content page", id.to_string()))?;
        if let Some(title) = &patch.title {
            page.title = title.clone();
        }
        if let Some(content) = &patch.content {
            page.content = content.clone();
        }
        if let Some(meta) = &patch.meta {
            page.meta = meta.clone();
        }
        Ok(())
    }

    async fn fetch_settings(&self) -> Result<Vec<SiteSetting>> {
        Ok(self.inner.lock().unwrap().settings.clone())
    }

    async fn update_setting(&self, id: &str, value: &serde_json::Value) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let setting = inner
            .settings
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SlateError::NotFound("setting", id.to_string()))?;
        setting.value = value.clone();
        Ok(())
    }
}

/// Build a project row with the fields the tests care about.
pub fn project(id: &str, title: &str, data_cat: &str, published: bool, order: i64) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        client: "Acme".to_string(),
        data_cat: data_cat.to_string(),
        is_published: published,
        order_index: order,
        ..Default::default()
    }
}

/// Build a media row.
pub fn media(id: &str, name: &str, kind: MediaKind) -> MediaFile {
    MediaFile {
        id: id.to_string(),
        file_name: name.to_string(),
        file_url: format!("https://cdn.example.com/{name}"),
        file_type: kind,
        file_size: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}
