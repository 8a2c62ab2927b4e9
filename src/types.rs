use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SlateError;

/// Per-project config directory (relative to the working directory)
pub const SLATE_DIR: &str = ".slate";

/// Kind of a media library entry.
///
/// The backend column is free text with no constraint, so unknown values are
/// preserved through `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    Other(String),
}

impl MediaKind {
    /// Parse strictly: only the two kinds the admin forms offer.
    pub fn parse_strict(s: &str) -> Result<Self, SlateError> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(SlateError::InvalidMediaKind(s.to_string())),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for MediaKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => MediaKind::Image,
            "video" => MediaKind::Video,
            _ => MediaKind::Other(s),
        }
    }
}

impl From<MediaKind> for String {
    fn from(kind: MediaKind) -> Self {
        kind.to_string()
    }
}

impl FromStr for MediaKind {
    type Err = SlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::parse_strict(s)
    }
}

pub const VALID_MEDIA_KINDS: &[&str] = &["image", "video"];

/// A portfolio project row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub data_cat: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_image: String,
    #[serde(default)]
    pub poster_image_srcset: String,
    #[serde(default)]
    pub video_url: String,
    /// Opaque per-format source map, passed through verbatim
    #[serde(default)]
    pub video_formats: serde_json::Value,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i64,
    /// Opaque SEO payload, passed through verbatim
    #[serde(default)]
    pub seo: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Insert payload for a project. The backend assigns `id` and timestamps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub client: String,
    pub category: String,
    pub data_cat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub poster_image: String,
    pub poster_image_srcset: String,
    pub video_url: String,
    pub is_published: bool,
    pub order_index: i64,
}

/// Partial update payload for a project. Only set fields are written.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_cat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_image_srcset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

impl ProjectPatch {
    /// Build a patch that sets one named field from its string form.
    ///
    /// This backs `slate project set <id> <field> <value>`.
    pub fn from_field(field: &str, value: &str) -> Result<Self, SlateError> {
        let mut patch = ProjectPatch::default();
        match field {
            "title" => patch.title = Some(value.to_string()),
            "slug" => patch.slug = Some(value.to_string()),
            "client" => patch.client = Some(value.to_string()),
            "category" => patch.category = Some(value.to_string()),
            "data_cat" => patch.data_cat = Some(value.to_string()),
            "description" => patch.description = Some(value.to_string()),
            "poster_image" => patch.poster_image = Some(value.to_string()),
            "poster_image_srcset" => patch.poster_image_srcset = Some(value.to_string()),
            "video_url" => patch.video_url = Some(value.to_string()),
            "is_published" => {
                patch.is_published = Some(parse_bool(field, value)?);
            }
            "featured" => {
                patch.featured = Some(parse_bool(field, value)?);
            }
            "order_index" => {
                patch.order_index = Some(value.parse().map_err(|_| {
                    SlateError::Validation(format!("order_index must be an integer, got '{value}'"))
                })?);
            }
            _ => {
                return Err(SlateError::Validation(format!(
                    "unknown project field '{field}'"
                )));
            }
        }
        Ok(patch)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, SlateError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(SlateError::Validation(format!(
            "{field} must be true or false, got '{value}'"
        ))),
    }
}

/// A media library row. No upload pipeline exists; the URL is supplied
/// directly by the operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: String,
    pub file_name: String,
    pub file_url: String,
    #[serde(default)]
    pub file_type: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub created_at: String,
}

/// Insert payload for a media file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewMediaFile {
    pub file_name: String,
    pub file_url: String,
    pub file_type: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl NewMediaFile {
    /// Local validation gate: both identifying fields must be non-empty.
    /// Runs before any request is issued.
    pub fn validate(&self) -> Result<(), SlateError> {
        if self.file_name.trim().is_empty() || self.file_url.trim().is_empty() {
            return Err(SlateError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        Ok(())
    }
}

/// A site content page. The payload is opaque to the admin beyond display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPage {
    pub id: String,
    pub page_type: String,
    pub title: String,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Partial update payload for a content page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentPagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// A keyed site setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSetting {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub updated_at: String,
}

static SLUG_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex should be valid"));

/// Derive a URL slug from a title: lowercase, non-alphanumeric runs collapsed
/// to single dashes, no leading/trailing dash.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    SLUG_STRIP
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Format an ISO 8601 timestamp as a calendar date for table output.
/// Unparseable input is shown as-is; the backend owns the format.
pub fn format_date(timestamp: &str) -> String {
    match timestamp.parse::<jiff::Timestamp>() {
        Ok(ts) => ts.strftime("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_parse_strict() {
        assert_eq!(MediaKind::parse_strict("image").unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::parse_strict("Video").unwrap(), MediaKind::Video);
        assert!(MediaKind::parse_strict("audio").is_err());
    }

    #[test]
    fn test_media_kind_roundtrip_preserves_unknown() {
        let kind: MediaKind = String::from("gif").into();
        assert_eq!(kind, MediaKind::Other("gif".to_string()));
        assert_eq!(kind.to_string(), "gif");
    }

    #[test]
    fn test_new_media_file_validation() {
        let missing_name = NewMediaFile {
            file_name: "".to_string(),
            file_url: "x".to_string(),
            ..Default::default()
        };
        assert!(missing_name.validate().is_err());

        let missing_url = NewMediaFile {
            file_name: "a.jpg".to_string(),
            file_url: "   ".to_string(),
            ..Default::default()
        };
        assert!(missing_url.validate().is_err());

        let ok = NewMediaFile {
            file_name: "a.jpg".to_string(),
            file_url: "https://x/a.jpg".to_string(),
            file_type: MediaKind::Image,
            file_size: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_project_patch_from_field() {
        let patch = ProjectPatch::from_field("client", "Acme").unwrap();
        assert_eq!(patch.client.as_deref(), Some("Acme"));
        assert!(patch.title.is_none());

        let patch = ProjectPatch::from_field("is_published", "true").unwrap();
        assert_eq!(patch.is_published, Some(true));

        assert!(ProjectPatch::from_field("is_published", "maybe").is_err());
        assert!(ProjectPatch::from_field("order_index", "abc").is_err());
        assert!(ProjectPatch::from_field("nonsense", "x").is_err());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = ProjectPatch {
            is_published: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"is_published":true}"#);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Moving Forward"), "moving-forward");
        assert_eq!(slugify("  Dubai -- 2024! "), "dubai-2024");
        assert_eq!(slugify("ALLCAPS"), "allcaps");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05T10:22:01Z"), "2024-03-05");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
