use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::{MediaFile, Project, format_date};

/// Shorten a string to `max` characters, eliding the middle.
///
/// IDs from the backend are UUIDs; tables only need enough to disambiguate.
pub fn truncate_middle(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max || max < 5 {
        return s.to_string();
    }
    let keep = max - 1;
    let head = keep / 2;
    let tail = keep - head;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

/// Format a byte count for table display.
pub fn format_file_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes < 1024 => format!("{bytes} B"),
        Some(bytes) if bytes < 1024 * 1024 => format!("{:.1} KB", bytes as f64 / 1024.0),
        Some(bytes) => format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
    }
}

/// A row in the project list table
#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Order")]
    order: i64,
}

/// Render projects as a bordered table
pub fn project_table(projects: &[Project]) -> String {
    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            id: truncate_middle(&p.id, 10),
            title: p.title.clone(),
            client: p.client.clone(),
            category: p.data_cat.clone(),
            status: if p.is_published {
                "published".to_string()
            } else {
                "draft".to_string()
            },
            order: p.order_index,
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// A row in the media list table
#[derive(Tabled)]
struct MediaRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Added")]
    added: String,
}

/// Render media files as a bordered table
pub fn media_table(files: &[MediaFile]) -> String {
    let rows: Vec<MediaRow> = files
        .iter()
        .map(|m| MediaRow {
            id: truncate_middle(&m.id, 10),
            name: m.file_name.clone(),
            kind: m.file_type.to_string(),
            size: format_file_size(m.file_size),
            added: format_date(&m.created_at),
        })
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        let out = truncate_middle("9f1c2ab0-77aa-4b6e-9d01-0a5a1f2e3b4c", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.contains('…'));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(None), "-");
        assert_eq!(format_file_size(Some(512)), "512 B");
        assert_eq!(format_file_size(Some(2048)), "2.0 KB");
        assert_eq!(format_file_size(Some(3 * 1024 * 1024)), "3.0 MB");
    }

    #[test]
    fn test_media_table_snapshot() {
        let files = vec![MediaFile {
            id: "m1".to_string(),
            file_name: "poster.jpg".to_string(),
            file_url: "https://cdn.example.com/poster.jpg".to_string(),
            file_type: MediaKind::Image,
            file_size: Some(2048),
            created_at: "2024-03-05T10:22:01Z".to_string(),
        }];
        insta::assert_snapshot!(media_table(&files), @r"
        ┌────┬────────────┬───────┬────────┬────────────┐
        │ ID │ Name       │ Kind  │ Size   │ Added      │
        ├────┼────────────┼───────┼────────┼────────────┤
        │ m1 │ poster.jpg │ image │ 2.0 KB │ 2024-03-05 │
        └────┴────────────┴───────┴────────┴────────────┘
        ");
    }
}
