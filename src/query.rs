//! Pure list filtering shared by the admin screens.
//!
//! Every screen loads its full list once and derives the visible subset
//! locally: criteria compose as logical AND, matching is case-insensitive,
//! and the source order is preserved. Nothing here performs I/O.

use crate::types::{ContentPage, MediaFile, MediaKind, Project, SiteSetting};

/// Case-insensitive substring match.
///
/// Uses `unicase` for correct Unicode case folding (handles Turkish i,
/// German ß, etc.). Folding the haystack costs an allocation; equality
/// checks elsewhere use the allocation-free `unicase::eq`.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// Active filter criteria for a list screen.
///
/// `None` criteria match everything, so `ListFilter::default()` is the
/// identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Exact category match (case-insensitive). `None` or `"all"` disables it.
    pub category: Option<String>,
    /// Substring search over the screen's display fields.
    pub search: Option<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter for one category, treating the "all" sentinel as no filter.
    pub fn with_category(category: &str) -> Self {
        let category = if category.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(category.to_string())
        };
        Self {
            category,
            search: None,
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        if !search.is_empty() {
            self.search = Some(search.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    /// Check one record against all criteria (logical AND).
    ///
    /// `category` is the record's category value; `haystacks` are the display
    /// fields the search criterion scans.
    pub fn matches(&self, category: &str, haystacks: &[&str]) -> bool {
        if let Some(wanted) = &self.category
            && !unicase::eq(category, wanted.as_str())
        {
            return false;
        }
        if let Some(needle) = &self.search
            && !haystacks
                .iter()
                .any(|h| contains_case_insensitive(h, needle))
        {
            return false;
        }
        true
    }
}

/// Derive the selectable category set from loaded records: distinct non-empty
/// values in first-seen order. Recomputed fresh on every load, so it tracks
/// the data rather than a fixed enumeration.
pub fn category_options<T>(items: &[T], category_of: impl Fn(&T) -> &str) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        let cat = category_of(item);
        if cat.is_empty() {
            continue;
        }
        if !seen.iter().any(|s: &String| unicase::eq(s.as_str(), cat)) {
            seen.push(cat.to_string());
        }
    }
    seen
}

/// Filter projects by category (`data_cat`) and title/client search.
pub fn filter_projects(projects: &[Project], filter: &ListFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(&p.data_cat, &[&p.title, &p.client]))
        .cloned()
        .collect()
}

/// Filter media files by kind and file-name search.
pub fn filter_media(files: &[MediaFile], kind: Option<&MediaKind>, search: &str) -> Vec<MediaFile> {
    files
        .iter()
        .filter(|m| kind.is_none_or(|k| &m.file_type == k))
        .filter(|m| contains_case_insensitive(&m.file_name, search))
        .cloned()
        .collect()
}

/// Filter content pages by page-type/title search.
pub fn filter_pages(pages: &[ContentPage], search: &str) -> Vec<ContentPage> {
    pages
        .iter()
        .filter(|p| {
            contains_case_insensitive(&p.page_type, search)
                || contains_case_insensitive(&p.title, search)
        })
        .cloned()
        .collect()
}

/// Filter site settings by key search.
pub fn filter_settings(settings: &[SiteSetting], search: &str) -> Vec<SiteSetting> {
    settings
        .iter()
        .filter(|s| contains_case_insensitive(&s.key, search))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, client: &str, data_cat: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            client: client.to_string(),
            data_cat: data_cat.to_string(),
            ..Default::default()
        }
    }

    fn media(id: &str, name: &str, kind: MediaKind) -> MediaFile {
        MediaFile {
            id: id.to_string(),
            file_name: name.to_string(),
            file_url: format!("https://cdn.example.com/{name}"),
            file_type: kind,
            ..Default::default()
        }
    }

    fn sample_projects() -> Vec<Project> {
        vec![
            project("p1", "Moving Forward", "Emaar", "commercial"),
            project("p2", "Desert Lines", "RTA", "documentary"),
            project("p3", "Skyline", "Emaar", "commercial"),
            project("p4", "Untagged", "", ""),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let projects = sample_projects();
        let out = filter_projects(&projects, &ListFilter::new());
        assert_eq!(out.len(), projects.len());
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let projects = sample_projects();
        let out = filter_projects(&projects, &ListFilter::with_category("commercial"));
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn test_all_sentinel_disables_category_filter() {
        let projects = sample_projects();
        let out = filter_projects(&projects, &ListFilter::with_category("All"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let projects = sample_projects();
        let out = filter_projects(&projects, &ListFilter::new().with_search("SKY"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p3");

        // Search covers the client field too
        let out = filter_projects(&projects, &ListFilter::new().with_search("emaar"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_criteria_compose_as_and() {
        let projects = sample_projects();
        let filter = ListFilter::with_category("commercial").with_search("moving");
        let out = filter_projects(&projects, &filter);
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1"]);
    }

    #[test]
    fn test_filter_is_fixed_point_on_own_output() {
        let projects = sample_projects();
        let filter = ListFilter::with_category("commercial").with_search("e");
        let once = filter_projects(&projects, &filter);
        let twice = filter_projects(&once, &filter);
        let once_ids: Vec<_> = once.iter().map(|p| p.id.as_str()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let projects = sample_projects();
        let _ = filter_projects(&projects, &ListFilter::with_category("documentary"));
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].id, "p1");
    }

    #[test]
    fn test_category_options_distinct_non_empty() {
        let projects = sample_projects();
        let options = category_options(&projects, |p| p.data_cat.as_str());
        assert_eq!(options, ["commercial", "documentary"]);
    }

    #[test]
    fn test_category_options_case_insensitive_dedup() {
        let projects = vec![
            project("p1", "A", "", "Commercial"),
            project("p2", "B", "", "commercial"),
        ];
        let options = category_options(&projects, |p| p.data_cat.as_str());
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_filter_media_by_kind_and_name() {
        let files = vec![
            media("m1", "poster.jpg", MediaKind::Image),
            media("m2", "trailer.mp4", MediaKind::Video),
            media("m3", "Poster-Final.png", MediaKind::Image),
        ];

        let images = filter_media(&files, Some(&MediaKind::Image), "");
        assert_eq!(images.len(), 2);

        let posters = filter_media(&files, None, "poster");
        let ids: Vec<_> = posters.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m3"]);

        let image_posters = filter_media(&files, Some(&MediaKind::Image), "POSTER");
        assert_eq!(image_posters.len(), 2);

        let none = filter_media(&files, Some(&MediaKind::Video), "poster");
        assert!(none.is_empty());
    }

    #[test]
    fn test_contains_case_insensitive_unicode() {
        assert!(contains_case_insensitive("Straße", "STRASSE"));
        assert!(contains_case_insensitive("anything", ""));
        assert!(!contains_case_insensitive("", "x"));
    }
}
