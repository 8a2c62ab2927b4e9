pub mod backend;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod query;
pub mod tui;
pub mod types;
pub mod utils;

pub use backend::{Backend, Order, RestBackend, Table};
pub use config::Config;
pub use error::{Result, SlateError};
pub use query::{ListFilter, category_options, filter_media, filter_projects};
pub use types::{
    ContentPage, ContentPagePatch, MediaFile, MediaKind, NewMediaFile, NewProject, Project,
    ProjectPatch, SLATE_DIR, SiteSetting, VALID_MEDIA_KINDS,
};
