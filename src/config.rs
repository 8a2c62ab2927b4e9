//! Configuration handling for the backend connection.
//!
//! Configuration is stored in `.slate/config.yaml` (falling back to the user
//! config directory) and includes:
//! - Backend base URL and service API key
//! - Default category for new projects
//!
//! Environment variables `SLATE_BACKEND_URL` and `SLATE_API_KEY` take
//! precedence over the file.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlateError};
use crate::types::SLATE_DIR;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Default category applied to new projects when none is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

/// Backend connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (e.g. https://xyz.supabase.co)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Service API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    /// Get the path to the config file.
    ///
    /// A `.slate/config.yaml` in the working directory wins; otherwise the
    /// user-level config directory is used.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(SLATE_DIR).join("config.yaml");
        if local.exists() {
            return local;
        }
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "divmain", "slate") {
            let user = proj_dirs.config_dir().join("config.yaml");
            if user.exists() {
                return user;
            }
        }
        local
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get backend URL from environment variable or config file
    pub fn backend_url(&self) -> Option<String> {
        if let Ok(url) = env::var("SLATE_BACKEND_URL")
            && !url.is_empty()
        {
            return Some(url);
        }

        self.backend.url.clone()
    }

    /// Get API key from environment variable or config file
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = env::var("SLATE_API_KEY")
            && !key.is_empty()
        {
            return Some(key);
        }

        self.backend.api_key.clone()
    }

    /// Require a fully configured backend (URL + key), with a pointer to the
    /// fix when it is missing.
    pub fn require_backend(&self) -> Result<(String, String)> {
        let url = self.backend_url().ok_or_else(|| {
            SlateError::Config(
                "backend URL not configured; run 'slate config set backend.url <url>' \
                 or set SLATE_BACKEND_URL"
                    .to_string(),
            )
        })?;
        let key = self.api_key().ok_or_else(|| {
            SlateError::Config(
                "API key not configured; run 'slate config set backend.api_key <key>' \
                 or set SLATE_API_KEY"
                    .to_string(),
            )
        })?;
        Ok((url, key))
    }

    /// Get a config value by dotted key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "backend.url" => self.backend.url.clone(),
            "backend.api_key" => self.backend.api_key.clone(),
            "default_category" => self.default_category.clone(),
            _ => None,
        }
    }

    /// Set a config value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend.url" => {
                // Reject obviously broken URLs before they reach a request
                url::Url::parse(value)
                    .map_err(|e| SlateError::Config(format!("invalid backend URL: {e}")))?;
                self.backend.url = Some(value.to_string());
            }
            "backend.api_key" => self.backend.api_key = Some(value.to_string()),
            "default_category" => self.default_category = Some(value.to_string()),
            _ => {
                return Err(SlateError::Config(format!(
                    "unknown config key '{key}', expected one of: backend.url, \
                     backend.api_key, default_category"
                )));
            }
        }
        Ok(())
    }
}
