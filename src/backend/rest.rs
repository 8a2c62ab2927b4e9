//! PostgREST backend implementation over plain HTTP.
//!
//! # Security Note - Logging
//!
//! The service API key is protected from being logged through reqwest's
//! request logging by the `RedactedHeader` wrapper type, which implements
//! `Display` and `Debug` to redact sensitive values. Even if debug logging is
//! accidentally enabled, the `apikey`/`Authorization` header values appear as
//! `[REDACTED]` instead of the actual key.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SlateError};
use crate::types::{
    ContentPage, ContentPagePatch, MediaFile, NewMediaFile, NewProject, Project, ProjectPatch,
    SiteSetting,
};

use super::error::ApiError;
use super::{Backend, Order, Table};

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        header::HeaderValue::from_str(&self.value)
            .map_err(|_| SlateError::Config("API key contains invalid header characters".into()))
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Backend client speaking the PostgREST dialect (one round trip per call).
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: SecretBox<String>,
}

impl RestBackend {
    /// Create a backend client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (url, key) = config.require_backend()?;
        Self::new(&url, &key)
    }

    /// Create a backend client for the given base URL and service key.
    ///
    /// Configures the HTTP client with 30s connect timeout and 60s total
    /// timeout; no retries beyond what the transport provides.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| SlateError::Config(format!("invalid backend URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(SlateError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretBox::new(Box::new(api_key.to_string())),
        })
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.as_str())
    }

    /// Attach auth headers to a request builder.
    fn authed(&self, req: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let key = RedactedHeader::new(self.api_key.expose_secret());
        let value = key.as_header_value()?;
        let mut bearer = RedactedHeader::new(&format!("Bearer {}", self.api_key.expose_secret()))
            .as_header_value()?;
        bearer.set_sensitive(true);
        Ok(req
            .header("apikey", value)
            .header(header::AUTHORIZATION, bearer))
    }

    /// Check the response status, turning non-success into a single ApiError.
    async fn check(response: reqwest::Response) -> std::result::Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // PostgREST error bodies are short JSON blobs; keep a bounded slice
        // for the debug log.
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(200).collect();
        Err(ApiError::with_status(snippet, status))
    }

    /// `GET {base}/rest/v1/{table}?select=*&order={col}.{dir}`
    async fn select<T: DeserializeOwned>(&self, table: Table, order: Order) -> Result<Vec<T>> {
        debug!(table = %table, order = %order.to_query_value(), "select");
        let req = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*"), ("order", order.to_query_value().as_str())]);
        let response = self.authed(req)?.send().await?;
        let response = Self::check(response).await?;
        let rows: Vec<T> = response.json().await?;
        Ok(rows)
    }

    /// `POST {base}/rest/v1/{table}` with a one-element JSON array body,
    /// mirroring the client SDK the site's forms go through.
    async fn insert<T: Serialize + Sync>(&self, table: Table, row: &T) -> Result<()> {
        debug!(table = %table, "insert");
        let req = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(std::slice::from_ref(row));
        let response = self.authed(req)?.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `PATCH {base}/rest/v1/{table}?id=eq.{id}` with a partial JSON body.
    async fn patch<T: Serialize + Sync>(&self, table: Table, id: &str, patch: &T) -> Result<()> {
        debug!(table = %table, id, "update");
        let req = self
            .client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(patch);
        let response = self.authed(req)?.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `DELETE {base}/rest/v1/{table}?id=eq.{id}`
    async fn remove(&self, table: Table, id: &str) -> Result<()> {
        debug!(table = %table, id, "delete");
        let req = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))]);
        let response = self.authed(req)?.send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Backend for RestBackend {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.select(Table::Projects, Table::Projects.default_order())
            .await
    }

    async fn insert_project(&self, row: &NewProject) -> Result<()> {
        self.insert(Table::Projects, row).await
    }

    async fn update_project(&self, id: &str, patch: &ProjectPatch) -> Result<()> {
        self.patch(Table::Projects, id, patch).await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        self.remove(Table::Projects, id).await
    }

    async fn fetch_media(&self) -> Result<Vec<MediaFile>> {
        self.select(Table::MediaFiles, Table::MediaFiles.default_order())
            .await
    }

    async fn insert_media(&self, row: &NewMediaFile) -> Result<()> {
        self.insert(Table::MediaFiles, row).await
    }

    async fn delete_media(&self, id: &str) -> Result<()> {
        self.remove(Table::MediaFiles, id).await
    }

    async fn fetch_pages(&self) -> Result<Vec<ContentPage>> {
        self.select(Table::ContentPages, Table::ContentPages.default_order())
            .await
    }

    async fn update_page(&self, id: &str, patch: &ContentPagePatch) -> Result<()> {
        self.patch(Table::ContentPages, id, patch).await
    }

    async fn fetch_settings(&self) -> Result<Vec<SiteSetting>> {
        self.select(Table::SiteSettings, Table::SiteSettings.default_order())
            .await
    }

    async fn update_setting(&self, id: &str, value: &serde_json::Value) -> Result<()> {
        #[derive(Serialize)]
        struct ValuePatch<'a> {
            value: &'a serde_json::Value,
        }
        self.patch(Table::SiteSettings, id, &ValuePatch { value })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(RestBackend::new("not a url", "key").is_err());
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let backend = RestBackend::new("https://cms.example.com/", "key").unwrap();
        assert_eq!(
            backend.table_url(Table::MediaFiles),
            "https://cms.example.com/rest/v1/media_files"
        );
    }

    #[test]
    fn test_redacted_header_formats_as_redacted() {
        let header = RedactedHeader::new("service-key");
        assert_eq!(format!("{header}"), "[REDACTED]");
        assert!(!format!("{header:?}").contains("service-key"));
    }
}
